pub mod error;
pub mod params;
pub mod pipeline;
pub mod session;
pub mod url;

use crate::models::Badge;

pub use error::QueryError;
pub use params::{AmenityMap, EqualityValue, KeyPolicy, ListingKind, QueryParams, RangeBound, SortKey};
pub use pipeline::{distinct_facet_values, facet_counts, filter, paginate, run, sort, QueryPage};
pub use session::QuerySession;
pub use url::{parse_query_string, to_query_string};

/// Any record that can be filtered, sorted and paginated in a listing view.
///
/// Attributes are looked up by name so one set of query parameters can drive
/// every listing. Returning `None` means the record has no such attribute.
pub trait Listable {
    fn id(&self) -> &str;

    /// Single-valued attribute used by equality filters and facets
    fn category(&self, attribute: &str) -> Option<&str>;

    /// Multi-valued attribute used by set filters
    fn tags(&self, attribute: &str) -> Option<&[String]>;

    /// Numeric attribute used by range filters and sorting
    fn numeric(&self, attribute: &str) -> Option<f64>;

    fn badge(&self) -> Option<Badge> {
        None
    }
}
