//! Energy symbol codec: `{X}` tokens to [`EnergyType`].

use regex_lite::Regex;

use super::card::EnergyType;

/// Literal token counted for retreat cost.
pub const COLORLESS_TOKEN: &str = "{C}";

/// Every recognized `{X}` token in `text`, left to right, repeats included.
/// Unknown letters are skipped.
pub fn parse_energy_symbols(text: &str) -> Vec<EnergyType> {
    let Ok(re) = Regex::new(r"\{([A-Za-z])\}") else {
        return Vec::new();
    };
    re.captures_iter(text)
        .filter_map(|caps| caps[1].chars().next().and_then(EnergyType::from_symbol))
        .collect()
}

/// Resolve a fragment expected to name exactly one energy type.
///
/// Takes the first recognized token; a bare type name ("Grass") is accepted
/// too. Falls back to Colorless with a warning.
pub fn resolve_single_energy(text: &str) -> EnergyType {
    if let Some(&first) = parse_energy_symbols(text).first() {
        return first;
    }
    if let Some(named) = EnergyType::from_name(text) {
        return named;
    }
    logw!("No energy symbol in {:?}, defaulting to Colorless", text);
    EnergyType::Colorless
}

/// Number of `{C}` tokens in `text`.
///
/// Retreat cost is always paid in colorless units, so other letters are not
/// counted even when present.
pub fn count_colorless(text: &str) -> u32 {
    text.matches(COLORLESS_TOKEN).count() as u32
}
