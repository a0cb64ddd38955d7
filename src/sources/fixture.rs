use crate::models::Hotel;
use crate::sources::traits::HotelSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// In-memory hotel source serving a fixed sample feed.
///
/// Used by the demo run when no feed URL is given, and by tests that need a
/// catalog without network access.
pub struct FixtureSource {
    hotels: Vec<Hotel>,
}

impl FixtureSource {
    /// Create a fixture source with the built-in sample catalog
    pub fn new() -> Self {
        Self {
            hotels: sample_hotels(),
        }
    }

    /// Create a fixture source serving the given hotels
    pub fn with_hotels(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HotelSource for FixtureSource {
    async fn fetch(&self) -> Result<Vec<Hotel>> {
        info!("Serving {} fixture hotels", self.hotels.len());
        Ok(self.hotels.clone())
    }

    fn source_name(&self) -> &'static str {
        "fixture"
    }
}

/// Sample catalog used when no live feed is configured
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            name: "Grand Palace".to_string(),
            country: "France".to_string(),
            address: "12 Rue Saint-Honoré, Paris".to_string(),
            stars: 5,
            category: "hotel".to_string(),
            description: "Historic palace hotel near the Louvre.".to_string(),
            services: vec!["wifi".to_string(), "spa".to_string(), "parking".to_string()],
            min_price: 420,
            currency: "EUR".to_string(),
            rating: 9.1,
            reviews_amount: 311,
            last_review: "2 days ago".to_string(),
        },
        Hotel {
            name: "Riverside Apartments".to_string(),
            country: "France".to_string(),
            address: "3 Quai de la Loire, Nantes".to_string(),
            stars: 3,
            category: "apartment".to_string(),
            description: "Self-catering flats on the river bank.".to_string(),
            services: vec!["wifi".to_string(), "kitchen".to_string()],
            min_price: 85,
            currency: "EUR".to_string(),
            rating: 8.2,
            reviews_amount: 57,
            last_review: "last week".to_string(),
        },
        Hotel {
            name: "Alpenhof".to_string(),
            country: "Germany".to_string(),
            address: "Bergstraße 9, Garmisch".to_string(),
            stars: 4,
            category: "hotel".to_string(),
            description: "Family-run mountain hotel with half board.".to_string(),
            services: vec!["wifi".to_string(), "restaurant".to_string(), "sauna".to_string()],
            min_price: 150,
            currency: "EUR".to_string(),
            rating: 8.8,
            reviews_amount: 124,
            last_review: "yesterday".to_string(),
        },
        Hotel {
            name: "Hauptbahnhof Rooms".to_string(),
            country: "Germany".to_string(),
            address: "Bahnhofplatz 2, Leipzig".to_string(),
            stars: 2,
            category: "hotel".to_string(),
            description: "Basic rooms right by the central station.".to_string(),
            services: vec!["wifi".to_string()],
            min_price: 48,
            currency: "EUR".to_string(),
            rating: 6.9,
            reviews_amount: 16,
            last_review: "3 weeks ago".to_string(),
        },
        Hotel {
            name: "Casa del Sole".to_string(),
            country: "Italy".to_string(),
            address: "Via Roma 41, Palermo".to_string(),
            stars: 3,
            category: "apartment".to_string(),
            description: "Sunny top-floor apartment with a terrace.".to_string(),
            services: vec!["wifi".to_string(), "kitchen".to_string(), "terrace".to_string()],
            min_price: 70,
            currency: "EUR".to_string(),
            rating: 8.5,
            reviews_amount: 43,
            last_review: "5 days ago".to_string(),
        },
        Hotel {
            name: "Laguna Vista".to_string(),
            country: "Italy".to_string(),
            address: "Fondamenta Nove 18, Venice".to_string(),
            stars: 4,
            category: "hotel".to_string(),
            description: "Quiet hotel overlooking the northern lagoon.".to_string(),
            services: vec!["wifi".to_string(), "bar".to_string()],
            min_price: 210,
            currency: "EUR".to_string(),
            rating: 8.9,
            reviews_amount: 208,
            last_review: "today".to_string(),
        },
        Hotel {
            name: "Ostello Nuovo".to_string(),
            country: "Italy".to_string(),
            address: "Corso Buenos Aires 77, Milan".to_string(),
            stars: 1,
            category: "hotel".to_string(),
            description: "Budget beds a short walk from the metro.".to_string(),
            services: vec!["wifi".to_string(), "lockers".to_string()],
            min_price: 25,
            currency: "EUR".to_string(),
            rating: 7.4,
            reviews_amount: 89,
            last_review: "1 month ago".to_string(),
        },
    ]
}
