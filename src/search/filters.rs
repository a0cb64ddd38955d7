use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Upper price sentinel: a `price_to` at this value places no upper bound.
pub const PRICE_CEILING: i64 = 100_500;

/// Review-count sentinel: any negative value places no minimum.
pub const NO_REVIEW_MINIMUM: i32 = -1;

/// The full set of search constraints at a point in time.
///
/// Every field is always present; "no filter" is expressed by an empty set or
/// a sentinel value, never by a missing field. Serialized field names follow
/// the feed/form vocabulary (`type`, `starCount`, ...), so a persisted
/// specification written by an older front end still round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Accepted countries; empty accepts all.
    pub country: BTreeSet<String>,
    /// Accepted category labels; empty accepts all.
    #[serde(rename = "type")]
    pub types: BTreeSet<String>,
    /// Accepted star ratings; empty accepts all.
    #[serde(rename = "starCount")]
    pub star_count: BTreeSet<u8>,
    /// Minimum review count; negative means no minimum.
    #[serde(rename = "reviewCount")]
    pub review_count: i32,
    /// Inclusive lower price bound; 0 means unbounded below.
    #[serde(rename = "priceFrom")]
    pub price_from: i64,
    /// Inclusive upper price bound; `PRICE_CEILING` means unbounded above.
    #[serde(rename = "priceTo")]
    pub price_to: i64,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            country: BTreeSet::new(),
            types: BTreeSet::new(),
            star_count: BTreeSet::new(),
            review_count: NO_REVIEW_MINIMUM,
            price_from: 0,
            price_to: PRICE_CEILING,
        }
    }
}

impl Filters {
    /// True when every dimension is at its "no filter" default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fully_unconstrained() {
        let filters = Filters::default();
        assert!(filters.country.is_empty());
        assert!(filters.types.is_empty());
        assert!(filters.star_count.is_empty());
        assert_eq!(filters.review_count, NO_REVIEW_MINIMUM);
        assert_eq!(filters.price_from, 0);
        assert_eq!(filters.price_to, PRICE_CEILING);
        assert!(filters.is_default());
    }

    #[test]
    fn serializes_under_external_vocabulary() {
        let mut filters = Filters::default();
        filters.types.insert("hotel".to_string());
        filters.star_count.insert(4);

        let json = serde_json::to_string(&filters).unwrap();
        assert!(json.contains("\"type\":[\"hotel\"]"));
        assert!(json.contains("\"starCount\":[4]"));
        assert!(json.contains("\"reviewCount\":-1"));
        assert!(json.contains("\"priceFrom\":0"));
        assert!(json.contains("\"priceTo\":100500"));

        let back: Filters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filters);
    }
}
