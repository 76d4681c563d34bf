pub mod dashboard;
pub mod workspace;

use serde::{Deserialize, Serialize};

pub use dashboard::{Booking, BookingStatus, Manager, Payment, PaymentMethod, PaymentStatus, Property, PropertyStatus};
pub use workspace::{Workspace, WorkspaceKind};

/// Promotional badge shown on a listing card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Badge {
    Featured,
    Popular,
    #[serde(rename = "Special Offer")]
    SpecialOffer,
}

impl Badge {
    /// Rank used by the recommended ordering. Higher sorts first.
    pub fn priority(self) -> u8 {
        match self {
            Badge::Featured => 3,
            Badge::Popular => 2,
            Badge::SpecialOffer => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Badge::Featured => "Featured",
            Badge::Popular => "Popular",
            Badge::SpecialOffer => "Special Offer",
        }
    }
}

/// Rank of an optional badge; listings without one rank lowest.
pub fn badge_priority(badge: Option<Badge>) -> u8 {
    badge.map(Badge::priority).unwrap_or(0)
}

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub area: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_priority_order() {
        assert!(Badge::Featured.priority() > Badge::Popular.priority());
        assert!(Badge::Popular.priority() > Badge::SpecialOffer.priority());
        assert_eq!(badge_priority(Some(Badge::SpecialOffer)), 1);
        assert_eq!(badge_priority(None), 0);
    }

    #[test]
    fn test_badge_serializes_with_display_label() {
        let json = serde_json::to_string(&Badge::SpecialOffer).unwrap();
        assert_eq!(json, "\"Special Offer\"");
    }
}
