use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Badge priority first, then rating
    #[default]
    Recommended,
    PriceLow,
    PriceHigh,
    RatingHigh,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::RatingHigh => "rating-high",
        }
    }
}

impl From<&str> for SortKey {
    /// Unrecognized keys fall back to the recommended ordering.
    fn from(value: &str) -> Self {
        match value {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating-high" => SortKey::RatingHigh,
            _ => SortKey::Recommended,
        }
    }
}

/// Required value of a single-valued attribute
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EqualityValue {
    /// No constraint
    #[default]
    All,
    Is(String),
}

impl From<&str> for EqualityValue {
    fn from(value: &str) -> Self {
        if value == "all" {
            EqualityValue::All
        } else {
            EqualityValue::Is(value.to_string())
        }
    }
}

/// Inclusive numeric bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RangeBound {
    pub min: f64,
    pub max: f64,
}

impl RangeBound {
    pub fn between(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Open-ended range written as `"N+"`
    pub fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Parse `"min-max"` or `"N+"`. Anything else yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(min) = raw.strip_suffix('+') {
            let min = parse_bound(min)?;
            return Some(Self::at_least(min));
        }
        // A leading '-' is the sign of the lower bound, not the separator
        let (split, _) = raw.char_indices().skip(1).find(|(_, c)| *c == '-')?;
        let (min, max) = (&raw[..split], &raw[split + 1..]);
        Some(Self::between(parse_bound(min)?, parse_bound(max)?))
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max.is_infinite() {
            write!(f, "{}+", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// How filter keys that don't map onto known data are treated
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Unmapped amenity ids match literally, filters on attributes a record
    /// lacks are skipped
    #[default]
    Permissive,
    /// Unmapped amenity ids are decode errors, filters on attributes a
    /// record lacks exclude that record
    Strict,
}

impl FromStr for KeyPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(KeyPolicy::Permissive),
            "strict" => Ok(KeyPolicy::Strict),
            other => bail!("unknown key policy: {}", other),
        }
    }
}

/// Listing views, each with its own fixed page size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ListingKind {
    /// City browse page across all workspace types
    Coworking,
    MeetingRoom,
    PrivateOffice,
    VirtualOffice,
    /// Admin and manager property tables
    Properties,
    Bookings,
    Payments,
    Managers,
}

impl ListingKind {
    /// Card grids show 9 per page, dashboard tables 10
    pub fn page_size(self) -> usize {
        match self {
            ListingKind::Coworking
            | ListingKind::MeetingRoom
            | ListingKind::PrivateOffice
            | ListingKind::VirtualOffice => 9,
            ListingKind::Properties
            | ListingKind::Bookings
            | ListingKind::Payments
            | ListingKind::Managers => 10,
        }
    }

    /// Workspace type a dedicated listing page is scoped to
    pub fn workspace_type(self) -> Option<&'static str> {
        match self {
            ListingKind::MeetingRoom => Some("Meeting Room"),
            ListingKind::PrivateOffice => Some("Private Office"),
            ListingKind::VirtualOffice => Some("Virtual Office"),
            _ => None,
        }
    }
}

/// Maps the short amenity ids used in URLs onto the labels stored on records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityMap {
    entries: Vec<(String, String)>,
}

impl AmenityMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, label)| (id.into(), label.into()))
                .collect(),
        }
    }

    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, label)| label.as_str())
    }

    pub fn id_for(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, known)| known == label)
            .map(|(id, _)| id.as_str())
    }
}

impl Default for AmenityMap {
    fn default() -> Self {
        Self::new([
            ("wifi", "High-Speed WiFi"),
            ("parking", "Parking"),
            ("ac", "Air Conditioning"),
            ("meeting-rooms", "Meeting Rooms"),
            ("cafeteria", "Cafeteria"),
            ("24x7", "24/7 Access"),
            ("printing", "Printing"),
            ("reception", "Reception"),
        ])
    }
}

/// Active filter, sort and pagination state of a listing view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryParams {
    pub equality_filters: BTreeMap<String, EqualityValue>,
    /// Attribute must equal one of the listed values
    pub one_of_filters: BTreeMap<String, Vec<String>>,
    /// Attribute set must contain every listed value
    pub set_filters: BTreeMap<String, Vec<String>>,
    pub range_filters: BTreeMap<String, RangeBound>,
    /// Carried in URLs but never applied to records
    pub inert: BTreeMap<String, String>,
    pub sort_key: SortKey,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub key_policy: KeyPolicy,
}

impl QueryParams {
    pub fn new(page_size: usize) -> Self {
        Self {
            equality_filters: BTreeMap::new(),
            one_of_filters: BTreeMap::new(),
            set_filters: BTreeMap::new(),
            range_filters: BTreeMap::new(),
            inert: BTreeMap::new(),
            sort_key: SortKey::Recommended,
            page: 1,
            page_size,
            key_policy: KeyPolicy::Permissive,
        }
    }

    pub fn for_listing(listing: ListingKind) -> Self {
        Self::new(listing.page_size())
    }

    pub fn with_equality(mut self, attribute: &str, value: impl Into<EqualityValue>) -> Self {
        self.equality_filters.insert(attribute.to_string(), value.into());
        self
    }

    pub fn with_one_of<S: Into<String>>(mut self, attribute: &str, values: impl IntoIterator<Item = S>) -> Self {
        self.one_of_filters.insert(
            attribute.to_string(),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn with_set<S: Into<String>>(mut self, attribute: &str, values: impl IntoIterator<Item = S>) -> Self {
        self.set_filters.insert(
            attribute.to_string(),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn with_range(mut self, attribute: &str, range: RangeBound) -> Self {
        self.range_filters.insert(attribute.to_string(), range);
        self
    }

    pub fn with_sort(self, sort_key: SortKey) -> Self {
        Self { sort_key, ..self }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    pub fn with_key_policy(self, key_policy: KeyPolicy) -> Self {
        Self { key_policy, ..self }
    }

    /// Whether any filter would actually constrain a record
    pub fn is_filtered(&self) -> bool {
        self.equality_filters
            .values()
            .any(|value| *value != EqualityValue::All)
            || self.one_of_filters.values().any(|values| !values.is_empty())
            || self.set_filters.values().any(|values| !values.is_empty())
            || !self.range_filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_parsing() {
        assert_eq!(RangeBound::parse("300-500"), Some(RangeBound::between(300.0, 500.0)));
        assert_eq!(RangeBound::parse("700+"), Some(RangeBound::at_least(700.0)));
        assert_eq!(RangeBound::parse(" 0 - 250 "), Some(RangeBound::between(0.0, 250.0)));
        assert_eq!(RangeBound::parse("cheap"), None);
        assert_eq!(RangeBound::parse("300-"), None);
        assert_eq!(RangeBound::parse("inf+"), None);
    }

    #[test]
    fn test_negative_lower_bound() {
        assert_eq!(RangeBound::parse("-100-200"), Some(RangeBound::between(-100.0, 200.0)));
        assert_eq!(RangeBound::parse("-5+"), Some(RangeBound::at_least(-5.0)));
        assert_eq!(RangeBound::parse("-100"), None);
        let range = RangeBound::between(-100.0, 200.0);
        assert_eq!(RangeBound::parse(&range.to_string()), Some(range));
    }

    #[test]
    fn test_range_display_matches_url_form() {
        assert_eq!(RangeBound::between(300.0, 500.0).to_string(), "300-500");
        assert_eq!(RangeBound::at_least(700.0).to_string(), "700+");
        assert_eq!(RangeBound::between(2.5, 4.0).to_string(), "2.5-4");
    }

    #[test]
    fn test_open_range_bounds() {
        let range = RangeBound::at_least(700.0);
        assert!(range.contains(700.0));
        assert!(range.contains(1_000_000.0));
        assert!(!range.contains(699.0));
    }

    #[test]
    fn test_unknown_sort_key_is_recommended() {
        assert_eq!(SortKey::from("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::from("distance"), SortKey::Recommended);
        assert_eq!(SortKey::from(""), SortKey::Recommended);
    }

    #[test]
    fn test_key_policy_from_str() {
        assert_eq!("Strict".parse::<KeyPolicy>().unwrap(), KeyPolicy::Strict);
        assert_eq!("permissive".parse::<KeyPolicy>().unwrap(), KeyPolicy::Permissive);
        assert!("lenient".parse::<KeyPolicy>().is_err());
    }

    #[test]
    fn test_amenity_map_lookups() {
        let map = AmenityMap::default();
        assert_eq!(map.resolve("wifi"), Some("High-Speed WiFi"));
        assert_eq!(map.id_for("Parking"), Some("parking"));
        assert_eq!(map.resolve("pool"), None);
    }

    #[test]
    fn test_all_is_not_an_active_filter() {
        let params = QueryParams::new(9).with_equality("area", "all");
        assert!(!params.is_filtered());
        assert!(params.with_equality("city", "Mumbai").is_filtered());
    }

    #[test]
    fn test_page_sizes_per_listing() {
        assert_eq!(ListingKind::Coworking.page_size(), 9);
        assert_eq!(ListingKind::Bookings.page_size(), 10);
        assert_eq!(QueryParams::for_listing(ListingKind::VirtualOffice).page_size, 9);
    }
}
