//! Product listing: region resolution, one backend fetch, pagination metadata.
//!
//! Two strategies share this module:
//! - [`list_products`] trusts the backend's ordering and paging.
//! - [`list_products_with_sort`] fetches a fixed batch from the first page,
//!   sorts it locally and slices the requested page out of that batch. Items
//!   beyond the batch are never seen, while `count` still reports the
//!   backend total.
//!
//! Both report `next_page` as a page number.

use serde::Serialize;

use crate::client::StorefrontClient;
use crate::error::StoreError;
use crate::query::{PageRequest, ProductQuery};
use crate::regions::RegionResolver;
use crate::sorting::sort_products;
use crate::types::{StoreProduct, StoreRegion};

/// Number of products fetched for client-side sorting.
pub const SORT_BATCH_LIMIT: u32 = 100;

/// One page of products with pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageResult {
    pub products: Vec<StoreProduct>,
    /// Total matching products as reported by the backend.
    pub count: u64,
    pub next_page: Option<u32>,
}

/// What a lister produced.
///
/// A non-2xx backend response is not an outcome; it is returned as
/// [`StoreError::UpstreamFetch`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    Found(PageResult),
    /// No region matched the request's country code or region id.
    RegionNotFound,
    /// Transport or decode failure while fetching; already logged.
    FetchFailed { reason: String },
}

impl ListOutcome {
    /// The page to render: the found page, or an empty page for the
    /// recovered outcomes.
    #[must_use]
    pub fn into_page(self) -> PageResult {
        match self {
            ListOutcome::Found(page) => page,
            ListOutcome::RegionNotFound | ListOutcome::FetchFailed { .. } => PageResult::default(),
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, ListOutcome::Found(_))
    }
}

/// Which lister a caller wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingStrategy {
    /// Backend ordering and paging ([`list_products`]).
    #[default]
    Backend,
    /// Local re-sort of a fixed batch ([`list_products_with_sort`]).
    LocalSort,
}

/// Resolves the request's region; `Ok(None)` when nothing matches.
///
/// # Errors
///
/// Returns [`StoreError::InvalidRequest`] when neither a country code nor a
/// region id is present.
pub async fn resolve_region<R: RegionResolver>(
    regions: &R,
    request: &PageRequest,
) -> Result<Option<StoreRegion>, StoreError> {
    let country_code = request.country_code.as_deref().filter(|c| !c.is_empty());
    let region_id = request.region_id.as_deref().filter(|r| !r.is_empty());

    let region = match (country_code, region_id) {
        (Some(country_code), _) => regions.get_region(country_code).await,
        (None, Some(region_id)) => regions.retrieve_region(region_id).await,
        (None, None) => {
            return Err(StoreError::InvalidRequest(
                "country code or region id is required".to_owned(),
            ))
        }
    };

    if region.is_none() {
        tracing::warn!(
            country_code = country_code.unwrap_or_default(),
            region_id = region_id.unwrap_or_default(),
            "no region found for listing request"
        );
    }
    Ok(region)
}

/// Lists one page of products in the backend's order.
///
/// # Errors
///
/// - [`StoreError::InvalidRequest`] when the request names no region or country.
/// - [`StoreError::UpstreamFetch`] when the backend answers non-2xx.
pub async fn list_products<R: RegionResolver>(
    client: &StorefrontClient,
    regions: &R,
    request: &PageRequest,
) -> Result<ListOutcome, StoreError> {
    match resolve_region(regions, request).await? {
        Some(region) => list_products_in_region(client, &region, request).await,
        None => Ok(ListOutcome::RegionNotFound),
    }
}

/// [`list_products`] for an already-resolved region.
///
/// # Errors
///
/// Returns [`StoreError::UpstreamFetch`] when the backend answers non-2xx.
pub async fn list_products_in_region(
    client: &StorefrontClient,
    region: &StoreRegion,
    request: &PageRequest,
) -> Result<ListOutcome, StoreError> {
    let query = ProductQuery::build(request, Some(&region.id));

    match client.fetch_products(&query).await {
        Ok(response) => {
            let next_page = (response.count > query.offset + u64::from(query.limit))
                .then(|| request.effective_page() + 1);
            Ok(ListOutcome::Found(PageResult {
                products: response.products,
                count: response.count,
                next_page,
            }))
        }
        Err(e @ StoreError::UpstreamFetch { .. }) => Err(e),
        Err(e) => {
            tracing::error!(region_id = %region.id, error = %e, "error fetching products");
            Ok(ListOutcome::FetchFailed {
                reason: e.to_string(),
            })
        }
    }
}

/// Lists one page of a locally sorted batch of [`SORT_BATCH_LIMIT`] products.
///
/// # Errors
///
/// Same as [`list_products`].
pub async fn list_products_with_sort<R: RegionResolver>(
    client: &StorefrontClient,
    regions: &R,
    request: &PageRequest,
) -> Result<ListOutcome, StoreError> {
    match resolve_region(regions, request).await? {
        Some(region) => list_products_with_sort_in_region(client, &region, request).await,
        None => Ok(ListOutcome::RegionNotFound),
    }
}

/// [`list_products_with_sort`] for an already-resolved region.
///
/// # Errors
///
/// Returns [`StoreError::UpstreamFetch`] when the backend answers non-2xx.
pub async fn list_products_with_sort_in_region(
    client: &StorefrontClient,
    region: &StoreRegion,
    request: &PageRequest,
) -> Result<ListOutcome, StoreError> {
    let batch_request = request
        .clone()
        .with_page(1)
        .with_page_size(SORT_BATCH_LIMIT);

    let batch = match list_products_in_region(client, region, &batch_request).await? {
        ListOutcome::Found(batch) => batch,
        other => return Ok(other),
    };

    Ok(ListOutcome::Found(paginate_sorted(batch, request)))
}

fn paginate_sorted(batch: PageResult, request: &PageRequest) -> PageResult {
    let mut products = batch.products;
    sort_products(&mut products, request.sort);

    let page = request.effective_page();
    let limit = request.effective_page_size();
    let start = u64::from(page - 1) * u64::from(limit);
    let end = start + u64::from(limit);

    let len = products.len();
    let slice_start = usize::try_from(start).unwrap_or(usize::MAX).min(len);
    let slice_end = usize::try_from(end).unwrap_or(usize::MAX).min(len);
    let products = products.drain(slice_start..slice_end).collect();

    PageResult {
        products,
        count: batch.count,
        next_page: (batch.count > end).then(|| page + 1),
    }
}

/// Dispatches to the lister selected by `strategy`.
///
/// # Errors
///
/// Same as [`list_products`].
pub async fn list<R: RegionResolver>(
    strategy: ListingStrategy,
    client: &StorefrontClient,
    regions: &R,
    request: &PageRequest,
) -> Result<ListOutcome, StoreError> {
    match strategy {
        ListingStrategy::Backend => list_products(client, regions, request).await,
        ListingStrategy::LocalSort => list_products_with_sort(client, regions, request).await,
    }
}

/// [`list`] for an already-resolved region.
///
/// # Errors
///
/// Returns [`StoreError::UpstreamFetch`] when the backend answers non-2xx.
pub async fn list_in_region(
    strategy: ListingStrategy,
    client: &StorefrontClient,
    region: &StoreRegion,
    request: &PageRequest,
) -> Result<ListOutcome, StoreError> {
    match strategy {
        ListingStrategy::Backend => list_products_in_region(client, region, request).await,
        ListingStrategy::LocalSort => {
            list_products_with_sort_in_region(client, region, request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use storefront_core::SortOption;

    use super::*;

    fn priced(id: &str, price: f64) -> StoreProduct {
        StoreProduct {
            id: id.to_owned(),
            title: id.to_owned(),
            handle: None,
            thumbnail: None,
            created_at: None,
            variants: Vec::new(),
            min_price: Some(price),
            currency_code: None,
        }
    }

    fn batch(n: usize, count: u64) -> PageResult {
        // Descending prices so an ascending sort reverses the batch.
        let products = (0..n)
            .map(|i| priced(&format!("p{i}"), (n - i) as f64))
            .collect();
        PageResult {
            products,
            count,
            next_page: None,
        }
    }

    #[test]
    fn into_page_degrades_recovered_outcomes_to_empty() {
        assert_eq!(ListOutcome::RegionNotFound.into_page(), PageResult::default());
        let failed = ListOutcome::FetchFailed {
            reason: "connection reset".to_owned(),
        };
        assert!(!failed.is_found());
        assert_eq!(failed.into_page(), PageResult::default());
    }

    #[test]
    fn paginate_sorted_slices_requested_page_and_reports_upstream_count() {
        let request = PageRequest::for_country("us")
            .with_page(2)
            .with_page_size(12)
            .with_sort(SortOption::PriceAsc);
        let page = paginate_sorted(batch(100, 150), &request);

        assert_eq!(page.count, 150);
        assert_eq!(page.products.len(), 12);
        // Ascending by price: p99 (price 1) first, so page 2 starts at p87.
        assert_eq!(page.products[0].id, "p87");
        assert_eq!(page.products[11].id, "p76");
        assert_eq!(page.next_page, Some(3));
    }

    #[test]
    fn paginate_sorted_past_the_batch_is_empty() {
        let request = PageRequest::for_country("us").with_page(10).with_page_size(12);
        let page = paginate_sorted(batch(100, 150), &request);
        assert!(page.products.is_empty());
        assert_eq!(page.count, 150);
        assert_eq!(page.next_page, Some(11));
    }

    #[test]
    fn paginate_sorted_handles_the_largest_page_number() {
        let request = PageRequest::for_country("us").with_page(u32::MAX);
        let page = paginate_sorted(batch(0, 5), &request);
        assert!(page.products.is_empty());
        assert_eq!(page.count, 5);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn paginate_sorted_last_page_has_no_next() {
        let request = PageRequest::for_country("us").with_page(3).with_page_size(10);
        let page = paginate_sorted(batch(25, 25), &request);
        assert_eq!(page.products.len(), 5);
        assert_eq!(page.next_page, None);
    }
}
