#![allow(dead_code)]

use scraper::{ElementRef, Html, Selector};

/// Markup for one catalog entry. `None` leaves the element out.
#[derive(Clone, Default)]
pub struct CardFixture {
    pub name: Option<String>,
    pub type_line: Option<String>,
    pub hp: Option<String>,
    pub color: Option<String>,
    pub paragraphs: Option<Vec<String>>,
    /// Inner markup of `div.weak-resist-retreat`.
    pub stats: Option<String>,
}

impl CardFixture {
    pub fn pokemon(name: &str) -> Self {
        CardFixture {
            name: Some(name.to_string()),
            type_line: Some("Pokémon › Basic".to_string()),
            hp: Some("60 HP".to_string()),
            color: Some("{L}".to_string()),
            paragraphs: Some(vec!["{L} → Thunder Shock 20".to_string()]),
            stats: Some(retreat_abbr("{C}")),
        }
    }

    pub fn trainer(name: &str, text: &str) -> Self {
        CardFixture {
            name: Some(name.to_string()),
            type_line: Some("Trainer › Item".to_string()),
            hp: None,
            color: None,
            paragraphs: Some(vec![text.to_string()]),
            stats: None,
        }
    }

    pub fn html(&self) -> String {
        let mut s = String::from("<article class=\"type-pkmn_card\">");
        if let Some(name) = &self.name {
            s.push_str(&format!("<span class=\"name\">{}</span>", name));
        }
        if let Some(t) = &self.type_line {
            s.push_str(&format!("<div class=\"type-evolves-is\">{}</div>", t));
        }
        if let Some(hp) = &self.hp {
            s.push_str(&format!("<span class=\"hp\">{}</span>", hp));
        }
        if let Some(color) = &self.color {
            s.push_str(&format!("<span class=\"color\">{}</span>", color));
        }
        if let Some(paragraphs) = &self.paragraphs {
            s.push_str("<div class=\"text\">");
            for p in paragraphs {
                s.push_str(&format!("<p>{}</p>", p));
            }
            s.push_str("</div>");
        }
        if let Some(stats) = &self.stats {
            s.push_str(&format!("<div class=\"weak-resist-retreat\">{}</div>", stats));
        }
        s.push_str("</article>");
        s
    }
}

pub fn retreat_abbr(title: &str) -> String {
    format!(
        "<span class=\"weakness\">{{F}}</span><span class=\"retreat\"><abbr title=\"{}\">x</abbr></span>",
        title
    )
}

/// A search results page holding `cards`, with an optional "last page" marker.
pub fn search_page(cards: &[CardFixture], last_page: Option<&str>) -> String {
    let mut s = String::from("<html><body><main>");
    for card in cards {
        s.push_str(&card.html());
    }
    if let Some(marker) = last_page {
        s.push_str(&format!("<span class=\"last-page-link\">{}</span>", marker));
    }
    s.push_str("</main></body></html>");
    s
}

pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// The first card article in a parsed document.
pub fn first_card(doc: &Html) -> ElementRef<'_> {
    let selector = Selector::parse("article.type-pkmn_card").unwrap();
    doc.select(&selector).next().expect("fixture has a card")
}
