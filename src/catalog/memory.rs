use crate::catalog::sample;
use crate::catalog::traits::CatalogSource;
use crate::models::{Booking, Manager, Payment, Property, Workspace};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Catalog backed by in-memory collections
pub struct StaticCatalog {
    workspaces: Vec<Workspace>,
    properties: Vec<Property>,
    bookings: Vec<Booking>,
    payments: Vec<Payment>,
    managers: Vec<Manager>,
}

impl StaticCatalog {
    /// Create a catalog holding the built-in sample datasets
    pub fn new() -> Self {
        info!("📋 Loading sample marketplace data");
        Self::with_data(
            sample::sample_workspaces(),
            sample::sample_properties(),
            sample::sample_bookings(),
            sample::sample_payments(),
            sample::sample_managers(),
        )
    }

    /// Create a catalog from custom collections
    pub fn with_data(
        workspaces: Vec<Workspace>,
        properties: Vec<Property>,
        bookings: Vec<Booking>,
        payments: Vec<Payment>,
        managers: Vec<Manager>,
    ) -> Self {
        let workspaces: Vec<Workspace> = workspaces.into_iter().map(Workspace::resolved).collect();
        debug!(
            "Catalog holds {} workspaces, {} properties, {} bookings, {} payments, {} managers",
            workspaces.len(),
            properties.len(),
            bookings.len(),
            payments.len(),
            managers.len()
        );

        Self {
            workspaces,
            properties,
            bookings,
            payments,
            managers,
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn workspaces(&self, city: &str) -> Result<Vec<Workspace>> {
        let found: Vec<Workspace> = self
            .workspaces
            .iter()
            .filter(|ws| ws.location.city.eq_ignore_ascii_case(city))
            .cloned()
            .collect();
        debug!("Found {} workspaces in {}", found.len(), city);
        Ok(found)
    }

    async fn find_workspace(&self, id: &str) -> Result<Option<Workspace>> {
        Ok(self.workspaces.iter().find(|ws| ws.id == id).cloned())
    }

    async fn properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    async fn bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.clone())
    }

    async fn payments(&self) -> Result<Vec<Payment>> {
        Ok(self.payments.clone())
    }

    async fn managers(&self) -> Result<Vec<Manager>> {
        Ok(self.managers.clone())
    }

    fn source_name(&self) -> &'static str {
        "Static"
    }
}
