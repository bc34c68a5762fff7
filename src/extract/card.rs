//! Card markup to [`CardRecord`].
//!
//! Expected shape of one catalog entry:
//!
//! ```html
//! <article class="type-pkmn_card">
//!   <span class="name">Pikachu</span>
//!   <div class="type-evolves-is">Pokémon › Basic</div>
//!   <span class="hp">60 HP</span>
//!   <span class="color">{L}</span>
//!   <div class="text"><p>{L} → Thunder Shock 20</p></div>
//!   <div class="weak-resist-retreat">
//!     <span class="retreat"><abbr title="{C}">1</abbr></span>
//!   </div>
//! </article>
//! ```

use scraper::{ElementRef, Html, Selector};

use super::dedup::{DedupIndex, Identifier};
use crate::data::card::{category_is_pokemon, CardRecord};
use crate::data::energy::count_colorless;
use crate::error::ExtractError;

pub const CARD_SELECTOR: &str = "article.type-pkmn_card";
pub const NAME_SELECTOR: &str = "span.name";
pub const TYPE_SELECTOR: &str = "div.type-evolves-is";
pub const HP_SELECTOR: &str = "span.hp";
pub const COLOR_SELECTOR: &str = "span.color";
pub const TEXT_SELECTOR: &str = "div.text";
pub const STATS_SELECTOR: &str = "div.weak-resist-retreat";
pub const RETREAT_SELECTOR: &str = "span.retreat";

/// Separates the category from the evolution info in the type line.
pub const TYPE_SEPARATOR: char = '›';

/// Turns card subtrees into records, skipping cards already seen this run.
#[derive(Debug, Default)]
pub struct CardExtractor {
    index: DedupIndex,
}

impl CardExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> &DedupIndex {
        &self.index
    }

    /// Extract one card, or `None` if it should be skipped.
    ///
    /// Duplicates and unparseable cards both come back as `None`; the reason
    /// only shows up in the log.
    pub fn extract(&mut self, card: ElementRef<'_>) -> Option<CardRecord> {
        match self.try_extract(card) {
            Ok(record) => Some(record),
            Err(ExtractError::Duplicate) => None,
            Err(e) => {
                let name = card_name(card).unwrap_or_else(|_| "unknown card".to_string());
                loge!("Error parsing card data for {}: {}", name, e);
                None
            }
        }
    }

    /// Extract one card, keeping the reason a card was skipped.
    pub fn try_extract(&mut self, card: ElementRef<'_>) -> Result<CardRecord, ExtractError> {
        let text = card_text(card);
        let name = card_name(card)?;

        let type_line = type_line(card);
        let category = type_line.as_deref().map(category_of);
        let is_pokemon = category.as_deref().is_some_and(category_is_pokemon);

        let id = Identifier::new(type_line.as_deref(), &text);
        if self.index.seen(&id) {
            logf!("Skipping duplicate card: {}", name);
            return Err(ExtractError::Duplicate);
        }

        let hp = if is_pokemon { hp(card)? } else { None };
        let color = color(card);

        let retreat_cost = if is_pokemon {
            Some(retreat_cost(card).unwrap_or_else(|e| {
                loge!("Error parsing retreat cost for {}: {}", name, e);
                0
            }))
        } else {
            None
        };

        self.index.register(id);
        logd!("Parsed card: {}", name);

        Ok(CardRecord {
            name,
            type_line,
            category,
            hp,
            color,
            text,
            retreat_cost,
        })
    }

    /// Extract every card on a search results page, in document order.
    pub fn extract_page(&mut self, page: &Html) -> Vec<CardRecord> {
        let Some(selector) = selector(CARD_SELECTOR) else {
            return Vec::new();
        };
        page.select(&selector)
            .filter_map(|card| self.extract(card))
            .collect()
    }
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn find<'a>(el: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = selector(css)?;
    el.select(&selector).next()
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Paragraphs of the text block, trimmed and joined by a blank line.
/// No text block gives an empty string.
pub fn card_text(card: ElementRef<'_>) -> String {
    let Some(block) = find(card, TEXT_SELECTOR) else {
        return String::new();
    };
    let Some(p) = selector("p") else {
        return String::new();
    };
    block
        .select(&p)
        .map(trimmed_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn card_name(card: ElementRef<'_>) -> Result<String, ExtractError> {
    find(card, NAME_SELECTOR)
        .map(trimmed_text)
        .ok_or(ExtractError::MissingElement {
            selector: NAME_SELECTOR,
        })
}

pub fn type_line(card: ElementRef<'_>) -> Option<String> {
    find(card, TYPE_SELECTOR).map(trimmed_text)
}

/// Text before the first `›`, trimmed.
pub fn category_of(type_line: &str) -> String {
    type_line
        .split(TYPE_SEPARATOR)
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// HP with the "HP" suffix stripped. `Ok(None)` when the card prints none.
pub fn hp(card: ElementRef<'_>) -> Result<Option<u32>, ExtractError> {
    let Some(span) = find(card, HP_SELECTOR) else {
        return Ok(None);
    };
    let raw = trimmed_text(span);
    raw.replace("HP", "")
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ExtractError::Format {
            field: "hp",
            value: raw,
        })
}

pub fn color(card: ElementRef<'_>) -> Option<String> {
    find(card, COLOR_SELECTOR).map(trimmed_text)
}

/// Retreat cost from the `title` of the retreat `abbr`, in `{C}` units.
///
/// A missing stats block, retreat span or abbr means no retreat cost (0). An
/// abbr without a title is an error.
pub fn retreat_cost(card: ElementRef<'_>) -> Result<u32, ExtractError> {
    let Some(abbr) = find(card, STATS_SELECTOR)
        .and_then(|stats| find(stats, RETREAT_SELECTOR))
        .and_then(|retreat| find(retreat, "abbr"))
    else {
        return Ok(0);
    };
    abbr.value()
        .attr("title")
        .map(count_colorless)
        .ok_or(ExtractError::MissingElement {
            selector: "abbr[title]",
        })
}
