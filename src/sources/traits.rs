use crate::models::Hotel;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all hotel feed sources
/// This allows swapping the live HTTP feed for fixture data in tests and demos
#[async_trait]
pub trait HotelSource: Send + Sync {
    /// Fetch the full hotel collection from the source
    async fn fetch(&self) -> Result<Vec<Hotel>>;

    /// Get the name of the feed source
    fn source_name(&self) -> &'static str;
}
