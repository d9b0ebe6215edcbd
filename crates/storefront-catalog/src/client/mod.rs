//! HTTP client for the commerce backend's store API.

mod regions;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use storefront_core::{AppConfig, SortOption};

use crate::error::StoreError;
use crate::query::{page_offset, ProductQuery};
use crate::types::{ProductsResponse, StoreProduct};

const PUBLISHABLE_KEY_HEADER: &str = "x-publishable-api-key";

/// Client for the store API.
///
/// Every request carries the publishable key and asks intermediaries not to
/// cache. There are no retries: a failed request is reported once.
pub struct StorefrontClient {
    client: Client,
    base_url: Url,
    publishable_key: String,
}

/// Result of [`StorefrontClient::get_sorted_products`].
#[derive(Debug, Clone, PartialEq)]
pub struct SortedProducts {
    pub products: Vec<StoreProduct>,
    pub total: u64,
}

impl StorefrontClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// URL, or [`StoreError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        base_url: &str,
        publishable_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StoreError> {
        let parsed = Url::parse(base_url).map_err(|e| StoreError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(StoreError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
            publishable_key: publishable_key.to_owned(),
        })
    }

    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`StorefrontClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        Self::new(
            &config.backend_url,
            &config.publishable_key,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Issues one `GET /store/meilisearch-products` request.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UpstreamFetch`] on any non-2xx status (logged with the body).
    /// - [`StoreError::Http`] on network or TLS failure.
    /// - [`StoreError::Deserialize`] if the body is not a products envelope.
    pub async fn fetch_products(&self, query: &ProductQuery) -> Result<ProductsResponse, StoreError> {
        let mut url = self.endpoint(&["store", "meilisearch-products"])?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.to_pairs() {
                pairs.append_pair(key, &value);
            }
        }

        let body = self.get_body(&url).await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
            context: format!("products page from {url}"),
            source: e,
        })
    }

    /// Fetches one page straight from the backend, without region resolution
    /// and without recovering transport failures.
    ///
    /// # Errors
    ///
    /// Propagates every error of [`Self::fetch_products`].
    pub async fn get_sorted_products(
        &self,
        region_id: Option<&str>,
        sort: SortOption,
        page: u32,
        per_page: u32,
    ) -> Result<SortedProducts, StoreError> {
        let query = ProductQuery {
            limit: per_page,
            offset: page_offset(page.max(1), per_page),
            order: sort,
            region_id: region_id.map(str::to_owned),
        };
        let response = self.fetch_products(&query).await?;
        Ok(SortedProducts {
            products: response.products,
            total: response.count,
        })
    }

    /// Appends `segments` to the base URL path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET and returns the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UpstreamFetch`] for non-2xx statuses and
    /// [`StoreError::Http`] for transport failures.
    async fn get_body(&self, url: &Url) -> Result<String, StoreError> {
        let response = self
            .client
            .get(url.clone())
            .header(PUBLISHABLE_KEY_HEADER, &self.publishable_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                reason = status.canonical_reason().unwrap_or("unknown"),
                url = %url,
                body = %body,
                "backend returned an error response"
            );
            return Err(StoreError::UpstreamFetch {
                status: status.as_u16(),
                body,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    fn is_not_found(err: &StoreError) -> bool {
        matches!(err, StoreError::UpstreamFetch { status, .. } if *status == StatusCode::NOT_FOUND.as_u16())
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
