//! Region lookup seam used by the listers.

use std::future::Future;

use crate::types::StoreRegion;

/// Resolves the region a listing request is priced in.
///
/// Implementations report lookup failures as `None` and log them; the
/// listers treat an unresolved region as "nothing to show", not as an error.
pub trait RegionResolver {
    /// Finds the region serving `country_code` (ISO 3166-1 alpha-2, any case).
    fn get_region(&self, country_code: &str) -> impl Future<Output = Option<StoreRegion>> + Send;

    /// Fetches a region by its backend id.
    fn retrieve_region(&self, region_id: &str)
        -> impl Future<Output = Option<StoreRegion>> + Send;
}
