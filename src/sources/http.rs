use crate::models::{Hotel, HotelFeed};
use crate::sources::traits::HotelSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Hotel source backed by a static JSON feed fetched over HTTP.
///
/// The feed is a single parameterless GET; all filtering happens client-side
/// after the full collection is loaded.
pub struct HttpHotelSource {
    client: Client,
    url: String,
}

impl HttpHotelSource {
    /// Create a new HTTP source pointing at the given feed URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Decode the feed envelope into the hotel list
    fn parse_feed(body: &str) -> Result<Vec<Hotel>> {
        let feed: HotelFeed =
            serde_json::from_str(body).context("Failed to decode hotel feed")?;
        Ok(feed.hotels)
    }
}

#[async_trait]
impl HotelSource for HttpHotelSource {
    async fn fetch(&self) -> Result<Vec<Hotel>> {
        debug!("Fetching hotel feed from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch hotel feed")?;

        if !response.status().is_success() {
            warn!("Feed returned status: {}", response.status());
            anyhow::bail!("Failed to fetch hotel feed: {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read feed response body")?;

        debug!("Downloaded {} bytes of feed JSON", body.len());

        let hotels = Self::parse_feed(&body)?;
        info!("Loaded {} hotels from feed", hotels.len());

        Ok(hotels)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
