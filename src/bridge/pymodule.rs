use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use scraper::Html;

use crate::crawl::pages::total_pages;
use crate::data::card::AttackRecord;
use crate::extract::attack::{parse_attack, parse_attacks};
use crate::extract::card::CardExtractor;

/// Python-facing extractor that keeps its duplicate index across pages.
#[pyclass]
pub struct PyCardExtractor {
    extractor: CardExtractor,
}

#[pymethods]
impl PyCardExtractor {
    #[new]
    fn new() -> Self {
        PyCardExtractor {
            extractor: CardExtractor::new(),
        }
    }

    /// Extract every new card on a search results page.
    /// Returns a JSON array string of card records.
    fn extract_page(&mut self, html: &str) -> PyResult<String> {
        let doc = Html::parse_document(html);
        let cards = self.extractor.extract_page(&doc);
        serde_json::to_string(&cards).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Number of distinct cards accepted so far.
    fn seen_count(&self) -> usize {
        self.extractor.index().len()
    }
}

/// Parse one attack block into (name, damage, energy_cost, description).
#[pyfunction]
fn attack(block: &str) -> PyResult<(String, String, Vec<String>, String)> {
    parse_attack(block)
        .map(attack_tuple)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Parse every attack in a card's text.
#[pyfunction]
fn attacks(text: &str) -> Vec<(String, String, Vec<String>, String)> {
    parse_attacks(text).into_iter().map(attack_tuple).collect()
}

/// Page count of a search results page.
#[pyfunction]
fn page_count(html: &str) -> u32 {
    total_pages(&Html::parse_document(html))
}

fn attack_tuple(a: AttackRecord) -> (String, String, Vec<String>, String) {
    let cost = a.energy_cost.iter().map(|e| e.serde_name()).collect();
    (a.name, a.damage, cost, a.description)
}

/// Register the PyO3 module.
#[pymodule]
pub fn pkmncards_scraper(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCardExtractor>()?;
    m.add_function(wrap_pyfunction!(attack, m)?)?;
    m.add_function(wrap_pyfunction!(attacks, m)?)?;
    m.add_function(wrap_pyfunction!(page_count, m)?)?;
    Ok(())
}
