//! [`RegionResolver`] backed by the store API's region endpoints.

use crate::error::StoreError;
use crate::regions::RegionResolver;
use crate::types::{RegionResponse, RegionsResponse, StoreRegion};

use super::StorefrontClient;

impl StorefrontClient {
    /// Lists every region the store sells in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request fails or the body cannot be parsed.
    pub async fn list_regions(&self) -> Result<Vec<StoreRegion>, StoreError> {
        let url = self.endpoint(&["store", "regions"])?;
        let body = self.get_body(&url).await?;
        let parsed: RegionsResponse =
            serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
                context: "region list".to_owned(),
                source: e,
            })?;
        Ok(parsed.regions)
    }

    /// Fetches one region by id; `Ok(None)` when the backend answers 404.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] for any other failure.
    pub async fn fetch_region(&self, region_id: &str) -> Result<Option<StoreRegion>, StoreError> {
        let url = self.endpoint(&["store", "regions", region_id])?;
        let body = match self.get_body(&url).await {
            Ok(body) => body,
            Err(e) if Self::is_not_found(&e) => return Ok(None),
            Err(e) => return Err(e),
        };
        let parsed: RegionResponse =
            serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
                context: format!("region {region_id}"),
                source: e,
            })?;
        Ok(Some(parsed.region))
    }
}

impl RegionResolver for StorefrontClient {
    async fn get_region(&self, country_code: &str) -> Option<StoreRegion> {
        match self.list_regions().await {
            Ok(regions) => regions.into_iter().find(|r| r.serves_country(country_code)),
            Err(e) => {
                tracing::warn!(country_code, error = %e, "region lookup failed");
                None
            }
        }
    }

    async fn retrieve_region(&self, region_id: &str) -> Option<StoreRegion> {
        match self.fetch_region(region_id).await {
            Ok(region) => region,
            Err(e) => {
                tracing::warn!(region_id, error = %e, "region retrieval failed");
                None
            }
        }
    }
}
