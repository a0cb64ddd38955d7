use serde::{Deserialize, Serialize};

/// A single hotel record as delivered by the feed.
///
/// Records are immutable once loaded; `name` is unique within a feed and is
/// used as the display key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub country: String,
    pub address: String,
    /// Star rating, 1 through 5.
    pub stars: u8,
    /// Free-text category label ("hotel", "apartment", ...). The feed calls
    /// this field `type`.
    #[serde(rename = "type")]
    pub category: String,
    pub description: String,
    pub services: Vec<String>,
    /// Minimum nightly price, denominated in `currency`.
    pub min_price: i64,
    pub currency: String,
    /// Guest rating, display-only.
    pub rating: f64,
    pub reviews_amount: u32,
    /// Timestamp of the most recent review. Display-only, not validated.
    pub last_review: String,
}

/// The feed envelope: a single JSON object wrapping the full hotel list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelFeed {
    pub hotels: Vec<Hotel>,
}
