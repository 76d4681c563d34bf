//! Filter, sort and paginate over an in-memory collection.
//!
//! Every operation here is total and read-only. No matches means an empty
//! page, never an error.

use crate::models::badge_priority;
use crate::query::params::{EqualityValue, KeyPolicy, QueryParams, SortKey};
use crate::query::Listable;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// One page of a listing plus the totals the pagination control needs
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct QueryPage<'a, T> {
    pub items: Vec<&'a T>,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> QueryPage<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Run the full pipeline: filter, then sort, then cut out the requested page.
pub fn run<'a, T: Listable>(collection: &'a [T], params: &QueryParams) -> QueryPage<'a, T> {
    let filtered = filter(collection, params);
    let sorted = sort(&filtered, params.sort_key);
    let page = paginate(&sorted, params.page, params.page_size);

    debug!(
        "Query matched {} of {} records, page {}/{} ({:?})",
        page.total_count,
        collection.len(),
        params.page,
        page.total_pages,
        params.sort_key
    );

    page
}

/// Keep the records that satisfy every active filter, in their original order.
pub fn filter<'a, T: Listable>(collection: &'a [T], params: &QueryParams) -> Vec<&'a T> {
    collection
        .iter()
        .filter(|record| matches(*record, params))
        .collect()
}

fn matches<T: Listable>(record: &T, params: &QueryParams) -> bool {
    let policy = params.key_policy;

    let equality_ok = params
        .equality_filters
        .iter()
        .all(|(attribute, expected)| match expected {
            EqualityValue::All => true,
            EqualityValue::Is(value) => match record.category(attribute) {
                Some(actual) => actual == value,
                None => missing_attribute(policy),
            },
        });
    if !equality_ok {
        return false;
    }

    let one_of_ok = params
        .one_of_filters
        .iter()
        .filter(|(_, allowed)| !allowed.is_empty())
        .all(|(attribute, allowed)| match record.category(attribute) {
            Some(actual) => allowed.iter().any(|value| value == actual),
            None => missing_attribute(policy),
        });
    if !one_of_ok {
        return false;
    }

    let set_ok = params
        .set_filters
        .iter()
        .filter(|(_, required)| !required.is_empty())
        .all(|(attribute, required)| match record.tags(attribute) {
            Some(present) => required.iter().all(|wanted| present.contains(wanted)),
            None => missing_attribute(policy),
        });
    if !set_ok {
        return false;
    }

    params
        .range_filters
        .iter()
        .all(|(attribute, range)| match record.numeric(attribute) {
            Some(value) => range.contains(value),
            None => missing_attribute(policy),
        })
}

/// Outcome of a filter whose attribute the record doesn't expose
fn missing_attribute(policy: KeyPolicy) -> bool {
    match policy {
        KeyPolicy::Permissive => true,
        KeyPolicy::Strict => false,
    }
}

/// Return a reordered copy. The sort is stable, so records that compare equal
/// keep their relative order.
pub fn sort<'a, T: Listable>(filtered: &[&'a T], sort_key: SortKey) -> Vec<&'a T> {
    let mut sorted = filtered.to_vec();
    match sort_key {
        SortKey::PriceLow => sorted.sort_by(|a, b| by_numeric(*a, *b, "price")),
        SortKey::PriceHigh => sorted.sort_by(|a, b| by_numeric(*b, *a, "price")),
        SortKey::RatingHigh => sorted.sort_by(|a, b| by_numeric(*b, *a, "rating")),
        SortKey::Recommended => sorted.sort_by(|a, b| {
            badge_priority(b.badge())
                .cmp(&badge_priority(a.badge()))
                .then_with(|| by_numeric(*b, *a, "rating"))
        }),
    }
    sorted
}

// Missing values sort as zero
fn by_numeric<T: Listable>(a: &T, b: &T, attribute: &str) -> Ordering {
    let a = a.numeric(attribute).unwrap_or(0.0);
    let b = b.numeric(attribute).unwrap_or(0.0);
    a.total_cmp(&b)
}

/// Cut out a 1-based page. Pages past the end, and page 0, come back empty.
pub fn paginate<'a, T>(sorted: &[&'a T], page: usize, page_size: usize) -> QueryPage<'a, T> {
    let total_count = sorted.len();
    if page_size == 0 {
        return QueryPage {
            items: Vec::new(),
            total_count,
            total_pages: 0,
        };
    }

    let total_pages = total_count.div_ceil(page_size);
    let items: Vec<&T> = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .and_then(|start| sorted.get(start..))
        .map(|rest| rest.iter().take(page_size).copied().collect())
        .unwrap_or_default();

    QueryPage {
        items,
        total_count,
        total_pages,
    }
}

/// Distinct values of an attribute in first-seen order.
pub fn distinct_facet_values<T: Listable>(collection: &[T], attribute: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    collection
        .iter()
        .filter_map(|record| record.category(attribute))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Distinct values with how many records carry each, in first-seen order.
pub fn facet_counts<T: Listable>(collection: &[T], attribute: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in collection.iter().filter_map(|record| record.category(attribute)) {
        match counts.iter_mut().find(|(known, _)| known == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}
