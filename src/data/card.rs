use serde::{Deserialize, Serialize};

use super::energy;
use crate::extract::attack;

/// Energy types printed on Pokemon TCG cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyType {
    Colorless,
    Grass,
    Fire,
    Water,
    Lightning,
    Psychic,
    Fighting,
    Darkness,
    Metal,
    Fairy,
    Dragon,
}

impl EnergyType {
    /// All energy types, in catalog order.
    pub fn all() -> &'static [EnergyType] {
        &[
            EnergyType::Colorless,
            EnergyType::Grass,
            EnergyType::Fire,
            EnergyType::Water,
            EnergyType::Lightning,
            EnergyType::Psychic,
            EnergyType::Fighting,
            EnergyType::Darkness,
            EnergyType::Metal,
            EnergyType::Fairy,
            EnergyType::Dragon,
        ]
    }

    /// Map the letter used inside a `{X}` token to its energy type.
    pub fn from_symbol(letter: char) -> Option<EnergyType> {
        match letter {
            'C' => Some(EnergyType::Colorless),
            'G' => Some(EnergyType::Grass),
            'R' => Some(EnergyType::Fire),
            'W' => Some(EnergyType::Water),
            'L' => Some(EnergyType::Lightning),
            'P' => Some(EnergyType::Psychic),
            'F' => Some(EnergyType::Fighting),
            'D' => Some(EnergyType::Darkness),
            'M' => Some(EnergyType::Metal),
            'Y' => Some(EnergyType::Fairy),
            'N' => Some(EnergyType::Dragon),
            _ => None,
        }
    }

    /// The letter this type is written as inside a `{X}` token.
    pub fn symbol(self) -> char {
        match self {
            EnergyType::Colorless => 'C',
            EnergyType::Grass => 'G',
            EnergyType::Fire => 'R',
            EnergyType::Water => 'W',
            EnergyType::Lightning => 'L',
            EnergyType::Psychic => 'P',
            EnergyType::Fighting => 'F',
            EnergyType::Darkness => 'D',
            EnergyType::Metal => 'M',
            EnergyType::Fairy => 'Y',
            EnergyType::Dragon => 'N',
        }
    }

    /// The name this type is written as in JSON ("lightning").
    pub fn serde_name(self) -> String {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(name)) => name,
            _ => String::new(),
        }
    }

    /// Parse a spelled-out type name ("Grass", "lightning", ...).
    pub fn from_name(s: &str) -> Option<EnergyType> {
        match s.trim().to_lowercase().as_str() {
            "colorless" => Some(EnergyType::Colorless),
            "grass" => Some(EnergyType::Grass),
            "fire" => Some(EnergyType::Fire),
            "water" => Some(EnergyType::Water),
            "lightning" => Some(EnergyType::Lightning),
            "psychic" => Some(EnergyType::Psychic),
            "fighting" => Some(EnergyType::Fighting),
            "darkness" => Some(EnergyType::Darkness),
            "metal" => Some(EnergyType::Metal),
            "fairy" => Some(EnergyType::Fairy),
            "dragon" => Some(EnergyType::Dragon),
            _ => None,
        }
    }
}

/// One attack, decomposed from its raw text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRecord {
    /// Attack name.
    pub name: String,
    /// Printed damage, digits only. "0" when none is printed.
    pub damage: String,
    /// Energy cost in left-to-right token order.
    pub energy_cost: Vec<EnergyType>,
    /// Effect text, possibly empty.
    pub description: String,
}

impl AttackRecord {
    /// Damage as a number. Saturates on absurdly long digit runs.
    pub fn damage_value(&self) -> u32 {
        self.damage.parse().unwrap_or(u32::MAX)
    }
}

/// A card as scraped from a catalog search page.
///
/// Field order is the order of the keys in the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card name (e.g., "Pikachu").
    pub name: String,
    /// Raw category/evolution line (e.g., "Pokémon › Basic").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    /// First segment of `type_line`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    // -- Pokemon-specific fields --
    /// Hit points (Pokemon only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    /// Color field text as printed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Card text, paragraphs separated by a blank line.
    #[serde(default)]
    pub text: String,
    /// Retreat cost in colorless energy (Pokemon only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retreat_cost: Option<u32>,
}

impl CardRecord {
    pub fn is_pokemon(&self) -> bool {
        self.category
            .as_deref()
            .is_some_and(category_is_pokemon)
    }

    /// Structured attacks found in the card text. Blocks that fail to parse
    /// are dropped.
    pub fn attacks(&self) -> Vec<AttackRecord> {
        attack::parse_attacks(&self.text)
    }

    /// The card's color resolved to an energy type, if a color was printed.
    pub fn color_type(&self) -> Option<EnergyType> {
        self.color.as_deref().map(energy::resolve_single_energy)
    }
}

/// Whether a category segment names a Pokemon card.
pub fn category_is_pokemon(category: &str) -> bool {
    category.contains("Pokémon")
}
