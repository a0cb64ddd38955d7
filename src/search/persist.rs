use crate::search::filters::Filters;
use std::collections::HashMap;
use tracing::warn;

/// Storage namespace for the serialized filter specification.
pub const FILTER_STORE_KEY: &str = "hotel-catalog/filters";

/// Key/value port for echoing the filter specification between sessions.
///
/// Injected into the form rather than reached for ambiently, so the
/// fail-open behavior below is testable without a real storage backend.
pub trait FilterStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-process store backed by a plain map
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl FilterStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Read the stored specification, falling open to `None` on anything
/// malformed. Initialization must never fail because of a bad stored value.
pub fn load_filters<S: FilterStore>(store: &S) -> Option<Filters> {
    let raw = store.get(FILTER_STORE_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(filters) => Some(filters),
        Err(err) => {
            warn!("Ignoring malformed stored filters: {err}");
            None
        }
    }
}

/// Write the current specification under the filter namespace
pub fn save_filters<S: FilterStore>(store: &mut S, filters: &Filters) {
    match serde_json::to_string(filters) {
        Ok(raw) => store.set(FILTER_STORE_KEY, raw),
        Err(err) => warn!("Failed to serialize filters for storage: {err}"),
    }
}
