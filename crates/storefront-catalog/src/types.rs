//! Response types for the commerce backend's store API.
//!
//! ## Observed shapes
//!
//! ### `calculated_price` on variants
//! Usually an object carrying `calculated_amount`, `original_amount`,
//! `currency_code` and a nested `calculated_price.price_list_type`. Search
//! indexes that flatten documents store the bare amount instead, so the field
//! is modelled as [`CalculatedPrice`], an untagged sum of both forms.
//!
//! ### `minPrice` on products
//! Camel-cased, unlike every other field. Present only on products served from
//! the search index; when set it is the cheapest variant amount in the
//! product's `currency_code`.
//!
//! ### Amounts
//! Major currency units as JSON numbers (`12.5` is twelve and a half dollars).

use serde::{Deserialize, Serialize};

/// Top-level response from `GET /store/meilisearch-products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<StoreProduct>,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreProduct {
    /// Backend product id, e.g. `prod_01HX...`.
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,

    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub variants: Vec<StoreVariant>,

    /// Precomputed cheapest amount, see module docs.
    #[serde(default, rename = "minPrice")]
    pub min_price: Option<f64>,

    #[serde(default)]
    pub currency_code: Option<String>,
}

/// A purchasable option of a [`StoreProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreVariant {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub sku: Option<String>,

    #[serde(default)]
    pub currency_code: Option<String>,

    #[serde(default)]
    pub calculated_price: Option<CalculatedPrice>,
}

/// Region-specific price of a variant as computed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculatedPrice {
    /// Flattened form: the calculated amount only.
    Amount(f64),
    Detailed(CalculatedPriceSet),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedPriceSet {
    #[serde(default)]
    pub calculated_amount: Option<f64>,

    #[serde(default)]
    pub original_amount: Option<f64>,

    #[serde(default)]
    pub currency_code: Option<String>,

    /// Price-list metadata for the winning calculated price.
    #[serde(default)]
    pub calculated_price: Option<PriceListInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListInfo {
    /// `sale` or `override` when a price list applied.
    #[serde(default)]
    pub price_list_type: Option<String>,
}

/// A market grouping with its own currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRegion {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub currency_code: String,

    #[serde(default)]
    pub countries: Vec<RegionCountry>,
}

impl StoreRegion {
    /// Whether `country_code` (ISO 3166-1 alpha-2, any case) belongs to this region.
    #[must_use]
    pub fn serves_country(&self, country_code: &str) -> bool {
        self.countries.iter().any(|c| {
            c.iso_2
                .as_deref()
                .is_some_and(|iso| iso.eq_ignore_ascii_case(country_code))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCountry {
    #[serde(default)]
    pub iso_2: Option<String>,
}

/// Response from `GET /store/regions`.
#[derive(Debug, Deserialize)]
pub struct RegionsResponse {
    #[serde(default)]
    pub regions: Vec<StoreRegion>,
}

/// Response from `GET /store/regions/{id}`.
#[derive(Debug, Deserialize)]
pub struct RegionResponse {
    pub region: StoreRegion,
}
