//! Query-string form of [`QueryParams`], e.g.
//! `?types=Coworking,Meeting%20Room&price_range=300-500&amenities=wifi,parking`.
//!
//! Multi-valued filters are comma separated, ranges are `min-max` or `N+`.
//! `All` is never written; a missing key means `All`.

use crate::query::error::QueryError;
use crate::query::params::{AmenityMap, EqualityValue, KeyPolicy, QueryParams, RangeBound, SortKey};
use std::borrow::Cow;
use tracing::warn;

/// Keys the listing pages expose but never apply to records
pub const INERT_KEYS: [&str; 5] = ["capacity", "booking_type", "furnishing", "lockable", "availability"];

/// Keys decoded as set filters
const SET_KEYS: [&str; 2] = ["amenities", "services"];

const RANGE_SUFFIX: &str = "_range";
const ONE_OF_SUFFIX: &str = "_in";

/// Decode a query string into fresh params with the given page size.
///
/// Under [`KeyPolicy::Permissive`] malformed values are dropped with a
/// warning. Under [`KeyPolicy::Strict`] they are returned as errors.
pub fn parse_query_string(
    query: &str,
    page_size: usize,
    amenities: &AmenityMap,
    policy: KeyPolicy,
) -> Result<QueryParams, QueryError> {
    let mut params = QueryParams::new(page_size).with_key_policy(policy);
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let (key, value) = match (decode(raw_key), decode(raw_value)) {
            (Some(key), Some(value)) => (key, value),
            _ => {
                reject(policy, QueryError::Encoding(pair.to_string()))?;
                continue;
            }
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        if key == "sort" {
            params.sort_key = SortKey::from(value);
        } else if key == "page" {
            match value.parse::<usize>() {
                Ok(page) => params.page = page,
                Err(_) => reject(policy, QueryError::InvalidPage(value.to_string()))?,
            }
        } else if let Some(attribute) = key.strip_suffix(RANGE_SUFFIX) {
            match RangeBound::parse(value) {
                Some(range) => {
                    params.range_filters.insert(attribute.to_string(), range);
                }
                None => reject(
                    policy,
                    QueryError::MalformedRange {
                        key: key.to_string(),
                        value: value.to_string(),
                    },
                )?,
            }
        } else if key == "types" {
            params.one_of_filters.insert("type".to_string(), split_list(raw_value));
        } else if let Some(attribute) = key.strip_suffix(ONE_OF_SUFFIX) {
            params.one_of_filters.insert(attribute.to_string(), split_list(raw_value));
        } else if key == "amenities" {
            let labels = split_list(raw_value)
                .into_iter()
                .map(|id| match amenities.resolve(&id) {
                    Some(label) => Ok(label.to_string()),
                    None if policy == KeyPolicy::Strict => Err(QueryError::UnknownAmenity(id)),
                    None => Ok(id),
                })
                .collect::<Result<Vec<_>, _>>()?;
            params.set_filters.insert(key.to_string(), labels);
        } else if SET_KEYS.contains(&&*key) {
            params.set_filters.insert(key.to_string(), split_list(raw_value));
        } else if INERT_KEYS.contains(&&*key) {
            params.inert.insert(key.to_string(), value.to_string());
        } else if value != "all" {
            params
                .equality_filters
                .insert(key.to_string(), EqualityValue::Is(value.to_string()));
        }
    }

    Ok(params)
}

/// Encode params in a stable key order, leaving out defaults.
pub fn to_query_string(params: &QueryParams, amenities: &AmenityMap) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();

    if params.sort_key != SortKey::Recommended {
        pairs.push(("sort".to_string(), params.sort_key.as_str().to_string()));
    }

    for (attribute, value) in &params.equality_filters {
        if let EqualityValue::Is(value) = value {
            pairs.push((encode(attribute), encode(value)));
        }
    }

    for (attribute, values) in params.one_of_filters.iter().filter(|(_, values)| !values.is_empty()) {
        let key = if attribute == "type" {
            "types".to_string()
        } else {
            format!("{}{}", encode(attribute), ONE_OF_SUFFIX)
        };
        pairs.push((key, join_list(values.iter().map(String::as_str))));
    }

    for (attribute, values) in params.set_filters.iter().filter(|(_, values)| !values.is_empty()) {
        let value = if attribute == "amenities" {
            join_list(values.iter().map(|label| amenities.id_for(label).unwrap_or(label)))
        } else {
            join_list(values.iter().map(String::as_str))
        };
        pairs.push((encode(attribute), value));
    }

    for (attribute, range) in &params.range_filters {
        pairs.push((format!("{}{}", encode(attribute), RANGE_SUFFIX), range.to_string()));
    }

    for (key, value) in &params.inert {
        pairs.push((encode(key), encode(value)));
    }

    if params.page != 1 {
        pairs.push(("page".to_string(), params.page.to_string()));
    }

    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

fn reject(policy: KeyPolicy, error: QueryError) -> Result<(), QueryError> {
    match policy {
        KeyPolicy::Strict => Err(error),
        KeyPolicy::Permissive => {
            warn!("Ignoring query parameter: {}", error);
            Ok(())
        }
    }
}

fn decode(raw: &str) -> Option<Cow<'_, str>> {
    urlencoding::decode(raw).ok()
}

fn encode(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Split a still-encoded list on its literal commas, then decode each item,
/// so an encoded `%2C` stays inside its item.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(decode)
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn join_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.map(encode).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> QueryParams {
        parse_query_string(query, 9, &AmenityMap::default(), KeyPolicy::Permissive).unwrap()
    }

    #[test]
    fn test_parse_listing_url() {
        let params = parse("?types=Coworking,Meeting%20Room&price_range=300-500&amenities=wifi,parking&sort=price-low&page=2");

        assert_eq!(
            params.one_of_filters.get("type"),
            Some(&vec!["Coworking".to_string(), "Meeting Room".to_string()])
        );
        assert_eq!(params.range_filters.get("price"), Some(&RangeBound::between(300.0, 500.0)));
        assert_eq!(
            params.set_filters.get("amenities"),
            Some(&vec!["High-Speed WiFi".to_string(), "Parking".to_string()])
        );
        assert_eq!(params.sort_key, SortKey::PriceLow);
        assert_eq!(params.page, 2);
        assert_eq!(params.page_size, 9);
    }

    #[test]
    fn test_missing_and_all_mean_no_constraint() {
        let params = parse("area=all&city=");
        assert!(params.equality_filters.is_empty());
        assert!(!params.is_filtered());
        assert_eq!(params, QueryParams::new(9));
    }

    #[test]
    fn test_open_range_and_plus_sign() {
        let params = parse("price_range=700+");
        assert_eq!(params.range_filters.get("price"), Some(&RangeBound::at_least(700.0)));
        assert_eq!(to_query_string(&params, &AmenityMap::default()), "price_range=700+");
    }

    #[test]
    fn test_unmapped_amenity_matches_raw_id_when_permissive() {
        let params = parse("amenities=wifi,rooftop");
        assert_eq!(
            params.set_filters.get("amenities"),
            Some(&vec!["High-Speed WiFi".to_string(), "rooftop".to_string()])
        );
    }

    #[test]
    fn test_strict_policy_rejects_bad_values() {
        let map = AmenityMap::default();
        assert_eq!(
            parse_query_string("amenities=rooftop", 9, &map, KeyPolicy::Strict),
            Err(QueryError::UnknownAmenity("rooftop".to_string()))
        );
        assert_eq!(
            parse_query_string("price_range=cheap", 9, &map, KeyPolicy::Strict),
            Err(QueryError::MalformedRange {
                key: "price_range".to_string(),
                value: "cheap".to_string(),
            })
        );
        assert_eq!(
            parse_query_string("page=two", 9, &map, KeyPolicy::Strict),
            Err(QueryError::InvalidPage("two".to_string()))
        );
    }

    #[test]
    fn test_permissive_policy_drops_bad_values() {
        let params = parse("price_range=cheap&page=two&area=HSR%20Layout");
        assert!(params.range_filters.is_empty());
        assert_eq!(params.page, 1);
        assert_eq!(
            params.equality_filters.get("area"),
            Some(&EqualityValue::Is("HSR Layout".to_string()))
        );
    }

    #[test]
    fn test_placeholder_filters_are_inert() {
        let params = parse("capacity=10&furnishing=furnished&lockable=yes");
        assert!(!params.is_filtered());
        assert_eq!(params.inert.len(), 3);
        assert_eq!(params.inert.get("furnishing").map(String::as_str), Some("furnished"));
    }

    #[test]
    fn test_encode_round_trip() {
        let map = AmenityMap::default();
        let params = QueryParams::new(9)
            .with_equality("area", "HSR Layout")
            .with_equality("city", "all")
            .with_one_of("type", ["Coworking", "Meeting Room"])
            .with_set("amenities", ["High-Speed WiFi", "Parking"])
            .with_range("price", RangeBound::between(300.0, 500.0))
            .with_sort(SortKey::RatingHigh)
            .with_page(3);

        let encoded = to_query_string(&params, &map);
        assert_eq!(
            encoded,
            "sort=rating-high&area=HSR%20Layout&types=Coworking,Meeting%20Room&amenities=wifi,parking&price_range=300-500&page=3"
        );

        let decoded = parse_query_string(&encoded, 9, &map, KeyPolicy::Strict).unwrap();
        let mut expected = params.with_key_policy(KeyPolicy::Strict);
        expected.equality_filters.remove("city");
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_commas_inside_list_items_survive_round_trip() {
        let map = AmenityMap::default();
        let params = QueryParams::new(9)
            .with_set("amenities", ["Tea, Coffee", "Parking"])
            .with_one_of("type", ["Desk, Hot"]);

        let encoded = to_query_string(&params, &map);
        assert_eq!(encoded, "types=Desk%2C%20Hot&amenities=Tea%2C%20Coffee,parking");

        let decoded = parse_query_string(&encoded, 9, &map, KeyPolicy::Permissive).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_bad_percent_encoding() {
        let map = AmenityMap::default();
        assert_eq!(
            parse_query_string("area=%FF", 9, &map, KeyPolicy::Strict),
            Err(QueryError::Encoding("area=%FF".to_string()))
        );

        let params = parse_query_string("area=%FF&city=Mumbai", 9, &map, KeyPolicy::Permissive).unwrap();
        assert!(!params.equality_filters.contains_key("area"));
        assert_eq!(
            params.equality_filters.get("city"),
            Some(&EqualityValue::Is("Mumbai".to_string()))
        );
    }

    #[test]
    fn test_one_of_and_services_keys() {
        let params = parse("status_in=Paid,Pending&services=Mail%20Handling&status=Paid");
        assert_eq!(
            params.one_of_filters.get("status"),
            Some(&vec!["Paid".to_string(), "Pending".to_string()])
        );
        assert_eq!(
            params.set_filters.get("services"),
            Some(&vec!["Mail Handling".to_string()])
        );
        assert_eq!(
            params.equality_filters.get("status"),
            Some(&EqualityValue::Is("Paid".to_string()))
        );
        assert_eq!(
            to_query_string(&params, &AmenityMap::default()),
            "status=Paid&status_in=Paid,Pending&services=Mail%20Handling"
        );
    }

    #[test]
    fn test_defaults_encode_to_nothing() {
        assert_eq!(to_query_string(&QueryParams::new(10), &AmenityMap::default()), "");
    }
}
