//! Client-side ordering of a fetched product batch.
//!
//! All orderings are stable. Products missing the sort attribute (no price,
//! no parseable `created_at`) go after every product that has it, whichever
//! the direction.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use storefront_core::SortOption;

use crate::price::cheapest_amount;
use crate::types::StoreProduct;

pub fn sort_products(products: &mut [StoreProduct], sort: SortOption) {
    match sort {
        SortOption::PriceAsc => products.sort_by(|a, b| {
            missing_last(cheapest_amount(a), cheapest_amount(b), |x, y| x.total_cmp(y))
        }),
        SortOption::PriceDesc => products.sort_by(|a, b| {
            missing_last(cheapest_amount(a), cheapest_amount(b), |x, y| y.total_cmp(x))
        }),
        SortOption::Title => {
            products.sort_by_cached_key(|p| p.title.to_lowercase());
        }
        SortOption::CreatedAt => products.sort_by(|a, b| {
            missing_last(created_at(a), created_at(b), |x, y| y.cmp(x))
        }),
    }
}

fn created_at(product: &StoreProduct) -> Option<DateTime<FixedOffset>> {
    product
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
}

fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
