use crate::filters::FilterSet;
use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing sources
/// This allows swapping the sample data for a real backend in the future
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the listings matching the current filter snapshot
    async fn fetch(&self, filters: &FilterSet) -> Result<Vec<Listing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
