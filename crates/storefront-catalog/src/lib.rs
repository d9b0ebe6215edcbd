pub mod client;
pub mod error;
pub mod listing;
pub mod price;
pub mod query;
pub mod regions;
pub mod sorting;
pub mod template;
pub mod types;

pub use client::{SortedProducts, StorefrontClient};
pub use error::StoreError;
pub use listing::{
    list, list_in_region, list_products, list_products_with_sort, ListOutcome, ListingStrategy,
    PageResult, SORT_BATCH_LIMIT,
};
pub use price::{get_product_price, select_price, PriceInfo, ProductPrice};
pub use query::{PageRequest, ProductQuery, DEFAULT_PAGE_SIZE};
pub use regions::RegionResolver;
pub use template::{render_listing, ListingPage, ListingRequest, Pagination, ProductCard};
pub use types::{CalculatedPrice, CalculatedPriceSet, StoreProduct, StoreRegion, StoreVariant};
