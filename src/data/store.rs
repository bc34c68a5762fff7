use std::fs;
use std::path::Path;

use super::card::CardRecord;
use crate::error::StoreError;

/// Write cards as a pretty-printed JSON array, non-ASCII kept as is.
pub fn save_cards(path: &Path, cards: &[CardRecord]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(cards).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    logf!("Successfully saved {} cards to {}", cards.len(), path.display());
    Ok(())
}

/// Load cards from a file written by [`save_cards`].
pub fn load_cards(path: &Path) -> Result<Vec<CardRecord>, StoreError> {
    let data = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| StoreError::Json {
        path: path.display().to_string(),
        source,
    })
}
