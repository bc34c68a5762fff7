use std::collections::HashSet;

/// Deduplication key: the card's type line and its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(type_line: Option<&str>, text: &str) -> Self {
        Identifier(format!("{}\n{}", type_line.unwrap_or(""), text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiers of every card accepted during one scrape run.
///
/// Matching is exact: case and whitespace count. Nothing is ever evicted.
#[derive(Debug, Default, Clone)]
pub struct DedupIndex {
    seen: HashSet<Identifier>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self, id: &Identifier) -> bool {
        self.seen.contains(id)
    }

    /// Record `id`. Registering twice is a no-op.
    pub fn register(&mut self, id: Identifier) {
        self.seen.insert(id);
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
