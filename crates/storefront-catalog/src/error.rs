use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither a region id nor a country code was supplied.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Price selection was asked to price a product that does not exist.
    #[error("no product provided")]
    MissingProduct,

    /// The backend answered with a non-2xx status. Never retried.
    #[error("failed to fetch {url}: HTTP {status}: {body}")]
    UpstreamFetch {
        status: u16,
        body: String,
        url: String,
    },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid backend URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
