/// Local search state for the country picker.
///
/// Owns only the search text and the visible sub-list; which countries are
/// actually selected lives in the filter specification, not here.
#[derive(Debug, Default, Clone)]
pub struct CountrySearch {
    available: Vec<String>,
    query: String,
    visible: Vec<String>,
}

impl CountrySearch {
    pub fn new(available: Vec<String>) -> Self {
        let visible = available.clone();
        Self {
            available,
            query: String::new(),
            visible,
        }
    }

    /// Replace the full country list (e.g. when the feed finishes loading).
    /// The visible list resets to the full list regardless of the current
    /// search text.
    pub fn set_available(&mut self, available: Vec<String>) {
        self.visible = available.clone();
        self.available = available;
    }

    /// Update the search text and recompute the visible list by
    /// case-sensitive substring containment. An empty query shows everything.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.visible = if self.query.is_empty() {
            self.available.clone()
        } else {
            self.available
                .iter()
                .filter(|country| country.contains(&self.query))
                .cloned()
                .collect()
        };
    }

    /// Explicit clear action: empties the query, restoring the full list
    pub fn clear(&mut self) {
        self.set_query("");
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[String] {
        &self.visible
    }
}
