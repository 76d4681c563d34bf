use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use workspace_market::catalog::{CatalogSource, StaticCatalog};
use workspace_market::config::Config;
use workspace_market::query::{facet_counts, AmenityMap, KeyPolicy, Listable, ListingKind, QuerySession};

/// Browse marketplace listings with URL-style filters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Listing view to query
    #[arg(value_enum)]
    listing: ListingKind,

    /// City to browse, for workspace listings
    #[arg(short, long)]
    city: Option<String>,

    /// Query string, e.g. "price_range=300-500&amenities=wifi,parking&sort=price-low"
    #[arg(short, long, default_value = "")]
    query: String,

    /// Reject unknown amenities and malformed values instead of ignoring them
    #[arg(long)]
    strict: bool,

    /// Write the page as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let policy = if cli.strict {
        KeyPolicy::Strict
    } else {
        config.key_policy
    };
    let amenities = AmenityMap::default();
    let session = QuerySession::from_query_string(cli.listing, &cli.query, &amenities, policy)
        .context("Failed to decode query string")?;

    let city = cli.city.clone().unwrap_or_else(|| config.default_city.clone());
    let output = cli.output.clone().or_else(|| {
        config
            .output_dir
            .as_ref()
            .map(|dir| dir.join(format!("{:?}.json", cli.listing).to_lowercase()))
    });

    let catalog = StaticCatalog::new();
    info!("🏢 Workspace Market - {} catalog", catalog.source_name());
    info!("Listing {:?} with filters [{}]", cli.listing, session.to_query_string(&amenities));

    let view = ListingView {
        session: &session,
        output,
    };

    match cli.listing {
        ListingKind::Coworking
        | ListingKind::MeetingRoom
        | ListingKind::PrivateOffice
        | ListingKind::VirtualOffice => {
            let mut workspaces = catalog.workspaces(&city).await?;
            if let Some(kind) = cli.listing.workspace_type() {
                workspaces.retain(|ws| ws.kind.label() == kind);
            }
            view.show(&workspaces, "area", |ws| {
                format!(
                    "{} [{}] {} · {} · {} per {} · ★ {}{}",
                    ws.name,
                    ws.id,
                    ws.kind.label(),
                    ws.location.area,
                    ws.price,
                    ws.kind.price_unit(),
                    ws.rating,
                    ws.badge.map(|badge| format!(" · {}", badge.label())).unwrap_or_default()
                )
            })
            .await
        }
        ListingKind::Properties => {
            let properties = catalog.properties().await?;
            view.show(&properties, "city", |property| {
                format!(
                    "{} [{}] {} · {}, {} · {} · {}",
                    property.name,
                    property.id,
                    property.property_type,
                    property.area,
                    property.city,
                    property.status.as_str(),
                    property.price
                )
            })
            .await
        }
        ListingKind::Bookings => {
            let bookings = catalog.bookings().await?;
            view.show(&bookings, "status", |booking| {
                format!(
                    "{} {} · {} ({}) · {} seats · {} · {}",
                    booking.id,
                    booking.customer,
                    booking.workspace,
                    booking.workspace_type,
                    booking.seats,
                    booking.amount,
                    booking.status.as_str()
                )
            })
            .await
        }
        ListingKind::Payments => {
            let payments = catalog.payments().await?;
            view.show(&payments, "status", |payment| {
                format!(
                    "{} {} · {} · {} · {} · {}",
                    payment.id,
                    payment.booking_id,
                    payment.customer,
                    payment.method.as_str(),
                    payment.amount,
                    payment.status.as_str()
                )
            })
            .await
        }
        ListingKind::Managers => {
            let managers = catalog.managers().await?;
            view.show(&managers, "city", |manager| {
                format!(
                    "{} [{}] {} · {} · {} properties",
                    manager.name,
                    manager.id,
                    manager.email,
                    manager.city,
                    manager.properties
                )
            })
            .await
        }
    }
}

struct ListingView<'s> {
    session: &'s QuerySession,
    output: Option<PathBuf>,
}

impl ListingView<'_> {
    async fn show<T, F>(&self, collection: &[T], facet: &str, describe: F) -> Result<()>
    where
        T: Listable + Serialize,
        F: Fn(&T) -> String,
    {
        let facets = facet_counts(collection, facet);
        if !facets.is_empty() {
            let chips: Vec<String> = facets
                .iter()
                .map(|(value, count)| format!("{} ({})", value, count))
                .collect();
            println!("{}: {}", facet, chips.join(" | "));
            println!();
        }

        let page = self.session.run(collection);
        if page.is_empty() {
            println!("No results found.");
        } else {
            let offset = (self.session.page() - 1) * self.session.params().page_size;
            for (i, item) in page.items.iter().enumerate() {
                println!("{}. {}", offset + i + 1, describe(*item));
            }
        }
        println!();
        println!(
            "Page {} of {} · {} results",
            self.session.page(),
            page.total_pages,
            page.total_count
        );

        if let Some(path) = &self.output {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            let json = serde_json::to_string_pretty(&page)?;
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("💾 Saved page to {}", path.display());
        }

        Ok(())
    }
}
