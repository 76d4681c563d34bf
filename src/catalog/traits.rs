use crate::models::{Booking, Manager, Payment, Property, Workspace};
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for listing data sources
/// Listing pages only see this, so the static datasets can be swapped for a
/// `GET /resource?city=…` backend without touching the query pipeline
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Workspaces in a city, matched case-insensitively
    async fn workspaces(&self, city: &str) -> Result<Vec<Workspace>>;

    /// Look up one workspace. `None` means the detail page shows Not Found.
    async fn find_workspace(&self, id: &str) -> Result<Option<Workspace>>;

    async fn properties(&self) -> Result<Vec<Property>>;

    async fn bookings(&self) -> Result<Vec<Booking>>;

    async fn payments(&self) -> Result<Vec<Payment>>;

    async fn managers(&self) -> Result<Vec<Manager>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
