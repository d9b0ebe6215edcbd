//! Page requests and the backend query they translate to.

use storefront_core::SortOption;

/// Page size used when the caller does not ask for one (or asks for zero).
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// One listing request as issued by a caller.
///
/// At least one of `country_code` / `region_id` must be set; the listers
/// reject the request otherwise. When both are set the country code wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number. Values below 1 are treated as 1.
    pub page: u32,
    pub page_size: u32,
    pub sort: SortOption,
    pub country_code: Option<String>,
    pub region_id: Option<String>,
}

impl PageRequest {
    #[must_use]
    pub fn for_country(country_code: impl Into<String>) -> Self {
        Self {
            country_code: Some(country_code.into()),
            ..Self::unscoped()
        }
    }

    #[must_use]
    pub fn for_region(region_id: impl Into<String>) -> Self {
        Self {
            region_id: Some(region_id.into()),
            ..Self::unscoped()
        }
    }

    /// A request with neither region nor country; listers reject it.
    #[must_use]
    pub fn unscoped() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortOption::default(),
            country_code: None,
            region_id: None,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Page number clamped to 1.
    #[must_use]
    pub fn effective_page(&self) -> u32 {
        self.page.max(1)
    }

    /// Page size with the zero case mapped to [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn effective_page_size(&self) -> u32 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}

/// Query parameters for `GET /store/meilisearch-products`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub limit: u32,
    pub offset: u64,
    pub order: SortOption,
    pub region_id: Option<String>,
}

impl ProductQuery {
    /// Builds the backend query for `request`.
    ///
    /// `region_id` is the id of the region resolved for this request, if any;
    /// it is the only source of the `region_id` parameter.
    #[must_use]
    pub fn build(request: &PageRequest, region_id: Option<&str>) -> Self {
        let limit = request.effective_page_size();
        Self {
            limit,
            offset: page_offset(request.effective_page(), limit),
            order: request.sort,
            region_id: region_id.map(str::to_owned),
        }
    }

    /// Query pairs in the order they are sent.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("order", self.order.to_string()),
        ];
        if let Some(region_id) = &self.region_id {
            pairs.push(("region_id", region_id.clone()));
        }
        pairs
    }
}

/// Zero-based offset of `page` (1-based) for pages of `limit` items.
#[must_use]
pub fn page_offset(page: u32, limit: u32) -> u64 {
    if page <= 1 {
        0
    } else {
        u64::from(page - 1) * u64::from(limit)
    }
}
