use crate::models::{Badge, Location};
use crate::query::Listable;
use serde::{Deserialize, Serialize};

/// Type-specific details of a workspace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum WorkspaceKind {
    Coworking {
        seats: u32,
    },
    #[serde(rename = "Meeting Room")]
    MeetingRoom {
        capacity: u32,
    },
    #[serde(rename = "Private Office")]
    PrivateOffice {
        cabins: u32,
        furnished: bool,
    },
    #[serde(rename = "Virtual Office")]
    VirtualOffice {
        services: Vec<String>,
    },
}

impl WorkspaceKind {
    /// Human readable type name, also the value matched by `type` filters
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceKind::Coworking { .. } => "Coworking",
            WorkspaceKind::MeetingRoom { .. } => "Meeting Room",
            WorkspaceKind::PrivateOffice { .. } => "Private Office",
            WorkspaceKind::VirtualOffice { .. } => "Virtual Office",
        }
    }

    /// How many people the space holds. Virtual offices have no seating.
    pub fn capacity(&self) -> Option<u32> {
        match self {
            WorkspaceKind::Coworking { seats } => Some(*seats),
            WorkspaceKind::MeetingRoom { capacity } => Some(*capacity),
            // Four people per cabin is the layout every listed office uses
            WorkspaceKind::PrivateOffice { cabins, .. } => Some(cabins * 4),
            WorkspaceKind::VirtualOffice { .. } => None,
        }
    }

    /// Unit the price is quoted in
    pub fn price_unit(&self) -> &'static str {
        match self {
            WorkspaceKind::Coworking { .. } => "seat/day",
            WorkspaceKind::MeetingRoom { .. } => "hour",
            WorkspaceKind::PrivateOffice { .. } => "seat/month",
            WorkspaceKind::VirtualOffice { .. } => "month",
        }
    }
}

/// Bookable workspace listed in a city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub kind: WorkspaceKind,
    pub price: f64,
    pub rating: f64,
    pub reviews: u32,
    pub amenities: Vec<String>,
    pub badge: Option<Badge>,
    /// Gallery images. `None` when the listing has none, never an empty list.
    pub images: Option<Vec<String>>,
    pub description: String,
}

impl Workspace {
    /// Normalize fields that arrive in loose shapes from the data source
    pub fn resolved(mut self) -> Self {
        if self.images.as_ref().is_some_and(|images| images.is_empty()) {
            self.images = None;
        }
        self
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .map(String::as_str)
    }
}

impl Listable for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, attribute: &str) -> Option<&str> {
        match attribute {
            "city" => Some(&self.location.city),
            "area" => Some(&self.location.area),
            "type" => Some(self.kind.label()),
            "badge" => self.badge.map(Badge::label),
            "name" => Some(&self.name),
            _ => None,
        }
    }

    fn tags(&self, attribute: &str) -> Option<&[String]> {
        match (attribute, &self.kind) {
            ("amenities", _) => Some(&self.amenities),
            ("services", WorkspaceKind::VirtualOffice { services }) => Some(services),
            _ => None,
        }
    }

    fn numeric(&self, attribute: &str) -> Option<f64> {
        match attribute {
            "price" => Some(self.price),
            "rating" => Some(self.rating),
            "reviews" => Some(f64::from(self.reviews)),
            "capacity" => self.kind.capacity().map(f64::from),
            _ => None,
        }
    }

    fn badge(&self) -> Option<Badge> {
        self.badge
    }
}
