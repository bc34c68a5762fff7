use pkmncards_scraper::data::card::{AttackRecord, EnergyType};
use pkmncards_scraper::error::AttackParseError;
use pkmncards_scraper::extract::attack::{
    normalize_damage, parse_attack, parse_attacks, split_attack_blocks,
};

use EnergyType::*;

fn attack(block: &str) -> AttackRecord {
    parse_attack(block).expect("attack should parse")
}

#[test]
fn test_multiplier_count_after_glyph() {
    let a = attack("{C}{C} → Tackle ×2\nDoes 20 damage for each heads.");
    assert_eq!(a.energy_cost, vec![Colorless, Colorless]);
    assert_eq!(a.name, "Tackle");
    assert_eq!(a.damage, "2");
    assert_eq!(a.description, "Does 20 damage for each heads.");
}

#[test]
fn test_multiplier_count_before_glyph() {
    let a = attack(
        "{G}{C} → Double Whip 20×\nFlip 2 coins. This attack does 20 damage for each heads.",
    );
    assert_eq!(a.energy_cost, vec![Grass, Colorless]);
    assert_eq!(a.name, "Double Whip");
    assert_eq!(a.damage, "20");
    assert_eq!(
        a.description,
        "Flip 2 coins. This attack does 20 damage for each heads."
    );
}

#[test]
fn test_multiplier_ignores_text_after_glyph() {
    // Only the pre-glyph segment feeds name and damage.
    let a = attack("{P} → Psy Bolt 30× more: extra\nFlip a coin.");
    assert_eq!(a.name, "Psy Bolt");
    assert_eq!(a.damage, "30");
    assert_eq!(a.description, "Flip a coin.");
}

#[test]
fn test_multiplier_keeps_overflow_lines_verbatim() {
    let a = attack("{M} → Iron Head 30×\n  Flip a coin until you get tails.  \nDoes 30 damage for each heads.");
    assert_eq!(a.name, "Iron Head");
    assert_eq!(a.damage, "30");
    assert_eq!(
        a.description,
        "  Flip a coin until you get tails.  \nDoes 30 damage for each heads."
    );

    let a = attack("{C} → Fury Swipes 10×");
    assert_eq!(a.description, "");
}

#[test]
fn test_colon_form_with_damage() {
    let a = attack("{R} → Ember 30: Discard a card.");
    assert_eq!(a.energy_cost, vec![Fire]);
    assert_eq!(a.name, "Ember");
    assert_eq!(a.damage, "30");
    assert_eq!(a.description, "Discard a card.");
}

#[test]
fn test_colon_form_without_damage() {
    let a = attack("{C} → Gnaw: Does nothing special.");
    assert_eq!(a.name, "Gnaw");
    assert_eq!(a.damage, "0");
    assert_eq!(a.description, "Does nothing special.");
}

#[test]
fn test_colon_form_multi_word_name_without_damage() {
    let a = attack("{W} → Call for Family: Search your deck for a Basic Pokémon.");
    assert_eq!(a.name, "Call for Family");
    assert_eq!(a.damage, "0");
}

#[test]
fn test_colon_form_joins_overflow_lines() {
    let a = attack("{C} → Bite 10: Flip a coin.\nIf heads, this attack does 10 more damage.");
    assert_eq!(a.name, "Bite");
    assert_eq!(a.damage, "10");
    assert_eq!(
        a.description,
        "Flip a coin.\nIf heads, this attack does 10 more damage."
    );
}

#[test]
fn test_bare_form() {
    let a = attack("{W}{C} → Water Gun 30");
    assert_eq!(a.energy_cost, vec![Water, Colorless]);
    assert_eq!(a.name, "Water Gun");
    assert_eq!(a.damage, "30");
    assert_eq!(a.description, "");
}

#[test]
fn test_bare_form_without_damage() {
    let a = attack("{P} → Confuse Ray\nYour opponent's Active Pokémon is now Confused.");
    assert_eq!(a.name, "Confuse Ray");
    assert_eq!(a.damage, "0");
    assert_eq!(a.description, "Your opponent's Active Pokémon is now Confused.");
}

#[test]
fn test_damage_keeps_only_digits() {
    let a = attack("{F} → Brick Break 20+");
    assert_eq!(a.name, "Brick Break");
    assert_eq!(a.damage, "20");
    assert_eq!(a.damage_value(), 20);

    let a = attack("{F}{F} → Rage 20+: Does 10 more damage for each damage counter.");
    assert_eq!(a.name, "Rage");
    assert_eq!(a.damage, "20");

    assert_eq!(normalize_damage("120-"), "120");
    assert_eq!(normalize_damage(""), "0");
    assert_eq!(normalize_damage("+"), "0");
}

#[test]
fn test_no_energy_cost_is_empty() {
    let a = attack("→ Ram 10");
    assert!(a.energy_cost.is_empty());
    assert_eq!(a.name, "Ram");
    assert_eq!(a.damage, "10");
}

#[test]
fn test_unknown_energy_letters_skipped_in_cost() {
    let a = attack("{X}{R}{C} → Flare 40");
    assert_eq!(a.energy_cost, vec![Fire, Colorless]);
}

#[test]
fn test_separator_must_appear_once() {
    assert_eq!(
        parse_attack("Ability: Static"),
        Err(AttackParseError::Separator { count: 0 })
    );
    assert_eq!(
        parse_attack("{C} → Tackle 10: Move to → bench"),
        Err(AttackParseError::Separator { count: 2 })
    );
}

#[test]
fn test_split_attack_blocks_keeps_only_attacks() {
    let text = "Ability: Static\nWhen this Pokémon is damaged, flip a coin.\n\n\
                {L} → Thunder Shock 20\n\n\
                {L}{L}{C} → Thunderbolt 90: Discard all Energy from this Pokémon.";
    let blocks = split_attack_blocks(text);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], "{L} → Thunder Shock 20");
}

#[test]
fn test_parse_attacks_drops_bad_blocks() {
    let text = "{L} → Thunder Shock 20\n\n\
                {C} → Broken → Attack\n\n\
                {L}{L}{C} → Thunderbolt 90: Discard all Energy from this Pokémon.";
    let attacks = parse_attacks(text);
    assert_eq!(attacks.len(), 2);
    assert_eq!(attacks[0].name, "Thunder Shock");
    assert_eq!(attacks[1].name, "Thunderbolt");
    assert_eq!(attacks[1].damage, "90");
    assert_eq!(attacks[1].energy_cost, vec![Lightning, Lightning, Colorless]);
    assert_eq!(
        attacks[1].description,
        "Discard all Energy from this Pokémon."
    );
}
