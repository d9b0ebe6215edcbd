//! Render-ready listing page: product cards plus a pagination descriptor.

use serde::Serialize;
use storefront_core::SortOption;

use crate::client::StorefrontClient;
use crate::error::StoreError;
use crate::listing::{list_in_region, ListingStrategy};
use crate::price::{select_price, PriceInfo};
use crate::query::PageRequest;
use crate::regions::RegionResolver;
use crate::types::{StoreProduct, StoreRegion};

/// Inputs of a listing page, as taken from the storefront URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub sort: SortOption,
    pub page: u32,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub handle: Option<String>,
    pub thumbnail: Option<String>,
    pub region_id: String,
    pub price: Option<PriceInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage {
    pub items: Vec<ProductCard>,
    pub page: u32,
    pub count: u64,
    pub total_pages: u64,
    /// `None` when everything fits on one page.
    pub pagination: Option<Pagination>,
}

/// Number of pages needed for `count` items at `page_size` per page.
#[must_use]
pub fn total_pages(count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(u64::from(page_size))
}

/// Pagination control for `page` of `total_pages`; `None` for a single page.
#[must_use]
pub fn pagination(page: u32, total_pages: u64) -> Option<Pagination> {
    (total_pages > 1).then(|| Pagination {
        page,
        total_pages,
        has_previous: page > 1,
        has_next: u64::from(page) < total_pages,
    })
}

/// Maps one product into a card priced for `region`.
///
/// # Errors
///
/// Propagates [`StoreError::MissingProduct`] from price selection.
pub fn product_card(
    product: &StoreProduct,
    region: &StoreRegion,
    locale: &str,
) -> Result<ProductCard, StoreError> {
    Ok(ProductCard {
        id: product.id.clone(),
        title: product.title.clone(),
        handle: product.handle.clone(),
        thumbnail: product.thumbnail.clone(),
        region_id: region.id.clone(),
        price: select_price(Some(product), None, locale)?,
    })
}

/// Builds a listing page for `request`.
///
/// Returns `Ok(None)` when no region serves the country code; there is
/// nothing to render in that case.
///
/// # Errors
///
/// Returns [`StoreError::UpstreamFetch`] when the backend answers non-2xx.
pub async fn render_listing<R: RegionResolver>(
    client: &StorefrontClient,
    regions: &R,
    strategy: ListingStrategy,
    request: &ListingRequest,
    page_size: u32,
    locale: &str,
) -> Result<Option<ListingPage>, StoreError> {
    let Some(region) = regions.get_region(&request.country_code).await else {
        tracing::warn!(country_code = %request.country_code, "no region for listing page");
        return Ok(None);
    };

    let page_request = PageRequest::for_region(region.id.clone())
        .with_page(request.page)
        .with_page_size(page_size)
        .with_sort(request.sort);

    let result = list_in_region(strategy, client, &region, &page_request)
        .await?
        .into_page();

    let items = result
        .products
        .iter()
        .map(|p| product_card(p, &region, locale))
        .collect::<Result<Vec<_>, _>>()?;

    let page = page_request.effective_page();
    let total_pages = total_pages(result.count, page_request.effective_page_size());

    Ok(Some(ListingPage {
        items,
        page,
        count: result.count,
        total_pages,
        pagination: pagination(page, total_pages),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(150, 12), 13);
    }

    #[test]
    fn no_pagination_for_single_page() {
        assert!(pagination(1, 0).is_none());
        assert!(pagination(1, 1).is_none());
    }

    #[test]
    fn pagination_links_follow_position() {
        let first = pagination(1, 3).unwrap();
        assert!(!first.has_previous);
        assert!(first.has_next);

        let last = pagination(3, 3).unwrap();
        assert!(last.has_previous);
        assert!(!last.has_next);
    }

    #[test]
    fn product_card_carries_region_and_cheapest_price() {
        let product = StoreProduct {
            id: "prod_1".to_owned(),
            title: "Canvas Tote".to_owned(),
            handle: Some("canvas-tote".to_owned()),
            thumbnail: Some("https://cdn.example/tote.png".to_owned()),
            created_at: None,
            variants: Vec::new(),
            min_price: Some(18.0),
            currency_code: Some("eur".to_owned()),
        };
        let region = StoreRegion {
            id: "reg_eu".to_owned(),
            name: "Europe".to_owned(),
            currency_code: "eur".to_owned(),
            countries: Vec::new(),
        };
        let card = product_card(&product, &region, "de-DE").unwrap();
        assert_eq!(card.region_id, "reg_eu");
        assert_eq!(card.handle.as_deref(), Some("canvas-tote"));
        assert_eq!(card.price.unwrap().calculated_price, "18,00 €");
    }
}
