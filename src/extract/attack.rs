//! Attack text parsing.
//!
//! An attack block looks like `{C}{C} → Tackle 20: Flip a coin...`: an energy
//! cost, the arrow, then a name with optional damage and effect text. The
//! catalog does not follow a grammar, so the first body line is classified by
//! the punctuation it carries.

use crate::data::card::AttackRecord;
use crate::data::energy::parse_energy_symbols;
use crate::error::AttackParseError;

/// Separates the energy cost from the rest of the attack.
pub const ARROW: char = '→';
/// Marks per-heads / per-counter damage ("20×").
pub const MULTIPLIER: char = '×';

/// Parse one attack block.
pub fn parse_attack(block: &str) -> Result<AttackRecord, AttackParseError> {
    let count = block.matches(ARROW).count();
    let Some((cost_segment, body)) = block.split_once(ARROW).filter(|_| count == 1) else {
        return Err(AttackParseError::Separator { count });
    };

    let energy_cost = parse_energy_symbols(cost_segment);

    let mut lines = body.lines();
    let first_line = lines.next().unwrap_or("").trim();
    let rest = lines.collect::<Vec<_>>().join("\n");

    let (name, damage, description) = if let Some((pre, post)) = first_line.split_once(MULTIPLIER)
    {
        // "Tackle 20×" carries the count before the glyph, "Tackle ×2" after it.
        let (name, damage) = match split_trailing_damage(pre) {
            (name, Some(damage)) => (name, damage),
            (name, None) => (name, leading_digits(post)),
        };
        // Overflow lines are kept as printed, only the colon and bare forms trim.
        (name, damage, rest)
    } else if let Some((head, tail)) = first_line.split_once(':') {
        let (name, damage) = split_trailing_damage(head);
        let description = format!("{}\n{}", tail, rest).trim().to_string();
        (name, damage.unwrap_or(""), description)
    } else {
        let (name, damage) = split_trailing_damage(first_line);
        (name, damage.unwrap_or(""), rest.trim().to_string())
    };

    Ok(AttackRecord {
        name: name.to_string(),
        damage: normalize_damage(damage),
        energy_cost,
        description,
    })
}

/// Paragraphs of card text that hold an attack.
pub fn split_attack_blocks(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| p.contains(ARROW))
        .collect()
}

/// Parse every attack in a card's text, dropping blocks that do not parse.
pub fn parse_attacks(text: &str) -> Vec<AttackRecord> {
    split_attack_blocks(text)
        .into_iter()
        .filter_map(|block| match parse_attack(block) {
            Ok(attack) => Some(attack),
            Err(e) => {
                logw!("No attack extracted from {:?}: {}", block, e);
                None
            }
        })
        .collect()
}

/// Split `s` at its last whitespace. The trailing token is returned as damage
/// only if it holds a digit; otherwise all of `s` is the name.
fn split_trailing_damage(s: &str) -> (&str, Option<&str>) {
    let s = s.trim();
    match s.rsplit_once(char::is_whitespace) {
        Some((name, token)) if token.chars().any(|c| c.is_ascii_digit()) => {
            (name.trim_end(), Some(token))
        }
        _ => (s, None),
    }
}

fn leading_digits(s: &str) -> &str {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}

/// Keep only the digits; "20+" becomes "20", nothing becomes "0".
pub fn normalize_damage(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        "0".to_string()
    } else {
        digits
    }
}
