use crate::query::error::QueryError;
use crate::query::params::{AmenityMap, EqualityValue, KeyPolicy, ListingKind, QueryParams, RangeBound, SortKey};
use crate::query::pipeline::{self, QueryPage};
use crate::query::url;
use crate::query::Listable;
use tracing::debug;

/// Query state of one listing view, from entering the view until leaving it.
///
/// Every filter or sort change sends the view back to page 1. The page size
/// is fixed by the listing kind and can't be changed mid-session.
#[derive(Debug, Clone)]
pub struct QuerySession {
    listing: ListingKind,
    params: QueryParams,
}

impl QuerySession {
    pub fn new(listing: ListingKind, policy: KeyPolicy) -> Self {
        Self {
            listing,
            params: QueryParams::for_listing(listing).with_key_policy(policy),
        }
    }

    /// Seed the session from a URL query string
    pub fn from_query_string(
        listing: ListingKind,
        query: &str,
        amenities: &AmenityMap,
        policy: KeyPolicy,
    ) -> Result<Self, QueryError> {
        let params = url::parse_query_string(query, listing.page_size(), amenities, policy)?;
        Ok(Self { listing, params })
    }

    pub fn listing(&self) -> ListingKind {
        self.listing
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn page(&self) -> usize {
        self.params.page
    }

    pub fn set_equality(&mut self, attribute: &str, value: impl Into<EqualityValue>) {
        self.params
            .equality_filters
            .insert(attribute.to_string(), value.into());
        self.reset_page("equality filter");
    }

    /// Area chip click: selecting the active area again clears it
    pub fn toggle_area(&mut self, area: &str) {
        let next = match self.params.equality_filters.get("area") {
            Some(EqualityValue::Is(current)) if current == area => EqualityValue::All,
            _ => EqualityValue::Is(area.to_string()),
        };
        self.set_equality("area", next);
    }

    pub fn set_one_of(&mut self, attribute: &str, values: Vec<String>) {
        self.params.one_of_filters.insert(attribute.to_string(), values);
        self.reset_page("one-of filter");
    }

    /// Checkbox click on a set filter value
    pub fn toggle_set_value(&mut self, attribute: &str, value: &str) {
        let values = self
            .params
            .set_filters
            .entry(attribute.to_string())
            .or_default();
        match values.iter().position(|existing| existing == value) {
            Some(index) => {
                values.remove(index);
            }
            None => values.push(value.to_string()),
        }
        self.reset_page("set filter");
    }

    /// `None` removes the range constraint
    pub fn set_range(&mut self, attribute: &str, range: Option<RangeBound>) {
        match range {
            Some(range) => {
                self.params.range_filters.insert(attribute.to_string(), range);
            }
            None => {
                self.params.range_filters.remove(attribute);
            }
        }
        self.reset_page("range filter");
    }

    /// Placeholder filters change the URL and the page, never the results
    pub fn set_inert(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.params.inert.insert(key.to_string(), value.to_string());
            }
            None => {
                self.params.inert.remove(key);
            }
        }
        self.reset_page("placeholder filter");
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.params.sort_key = sort_key;
        self.reset_page("sort");
    }

    pub fn clear_filters(&mut self) {
        self.params = QueryParams::for_listing(self.listing)
            .with_key_policy(self.params.key_policy)
            .with_sort(self.params.sort_key);
        debug!("Cleared filters on {:?}", self.listing);
    }

    /// Page clicks are the only change that keeps the other params
    pub fn go_to_page(&mut self, page: usize) {
        self.params.page = page;
    }

    pub fn run<'a, T: Listable>(&self, collection: &'a [T]) -> QueryPage<'a, T> {
        pipeline::run(collection, &self.params)
    }

    pub fn to_query_string(&self, amenities: &AmenityMap) -> String {
        url::to_query_string(&self.params, amenities)
    }

    fn reset_page(&mut self, cause: &str) {
        debug!("{} changed on {:?}, back to page 1", cause, self.listing);
        self.params.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::sample_workspaces;

    fn session() -> QuerySession {
        QuerySession::new(ListingKind::Coworking, KeyPolicy::Permissive)
    }

    #[test]
    fn test_every_filter_change_resets_page() {
        let mut session = session();

        session.go_to_page(3);
        session.set_range("price", RangeBound::parse("300-500"));
        assert_eq!(session.page(), 1);

        session.go_to_page(2);
        session.set_sort(SortKey::PriceHigh);
        assert_eq!(session.page(), 1);

        session.go_to_page(2);
        session.toggle_area("Koramangala");
        assert_eq!(session.page(), 1);

        session.go_to_page(2);
        session.toggle_set_value("amenities", "Parking");
        assert_eq!(session.page(), 1);

        session.go_to_page(2);
        session.set_one_of("type", vec!["Coworking".to_string()]);
        assert_eq!(session.page(), 1);

        session.go_to_page(2);
        session.set_inert("capacity", Some("10"));
        assert_eq!(session.page(), 1);

        session.go_to_page(4);
        assert_eq!(session.page(), 4);
    }

    #[test]
    fn test_area_chip_toggles_off() {
        let mut session = session();
        session.toggle_area("Whitefield");
        assert_eq!(
            session.params().equality_filters.get("area"),
            Some(&EqualityValue::Is("Whitefield".to_string()))
        );
        session.toggle_area("Whitefield");
        assert_eq!(session.params().equality_filters.get("area"), Some(&EqualityValue::All));
        assert!(!session.params().is_filtered());
    }

    #[test]
    fn test_page_size_follows_listing() {
        let session = QuerySession::from_query_string(
            ListingKind::Bookings,
            "status=Pending&page=2",
            &AmenityMap::default(),
            KeyPolicy::Permissive,
        )
        .unwrap();
        assert_eq!(session.params().page_size, 10);
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn test_inert_filters_do_not_change_results() {
        let workspaces = sample_workspaces();
        let mut session = session();
        let before = session.run(&workspaces).total_count;

        session.set_inert("furnishing", Some("furnished"));
        session.set_inert("availability", Some("immediate"));
        assert_eq!(session.run(&workspaces).total_count, before);
        assert_eq!(
            session.to_query_string(&AmenityMap::default()),
            "availability=immediate&furnishing=furnished"
        );
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut session = session();
        session.set_sort(SortKey::RatingHigh);
        session.toggle_set_value("amenities", "Parking");
        session.go_to_page(2);
        session.clear_filters();
        assert!(!session.params().is_filtered());
        assert_eq!(session.params().sort_key, SortKey::RatingHigh);
        assert_eq!(session.page(), 1);
    }
}
