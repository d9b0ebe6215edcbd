//! Display-price selection for products and variants.
//!
//! Selection order for a product:
//! 1. the requested variant, matched by id or SKU;
//! 2. the product's precomputed `minPrice`;
//! 3. the variant with the lowest calculated amount (first one wins ties).

use serde::Serialize;
use storefront_core::convert_to_locale;

use crate::error::StoreError;
use crate::types::{CalculatedPrice, StoreProduct, StoreVariant};

const DEFAULT_CURRENCY: &str = "USD";

/// A price ready for display, with the numbers it was formatted from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceInfo {
    pub calculated_price_number: f64,
    pub calculated_price: String,
    /// Absent when the price came from the product's `minPrice` shortcut.
    pub original_price_number: Option<f64>,
    pub original_price: Option<String>,
    pub currency_code: String,
    /// Price-list type (`sale`, `override`) when one applied.
    pub price_type: Option<String>,
    /// `(original - calculated) / original * 100`; `None` when original is zero.
    pub percentage_diff: Option<f64>,
}

/// Both price slots of a product; at most one is filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductPrice {
    pub cheapest_price: Option<PriceInfo>,
    pub variant_price: Option<PriceInfo>,
}

/// Percentage saved relative to `original`.
#[must_use]
pub fn percentage_diff(original: f64, calculated: f64) -> Option<f64> {
    if original == 0.0 || !original.is_finite() {
        return None;
    }
    Some((original - calculated) / original * 100.0)
}

/// Calculated amount of a variant, if it has usable price data.
#[must_use]
pub fn variant_amount(variant: &StoreVariant) -> Option<f64> {
    match variant.calculated_price.as_ref()? {
        CalculatedPrice::Amount(amount) => Some(*amount),
        CalculatedPrice::Detailed(set) => set.calculated_amount,
    }
}

/// Amount the product would be listed at when no variant is selected.
#[must_use]
pub fn cheapest_amount(product: &StoreProduct) -> Option<f64> {
    product
        .min_price
        .or_else(|| cheapest_variant(product).and_then(variant_amount))
}

fn cheapest_variant(product: &StoreProduct) -> Option<&StoreVariant> {
    let mut best: Option<(&StoreVariant, f64)> = None;
    for variant in &product.variants {
        // A bare zero amount is treated as unpriced; a detailed record at zero is not.
        if matches!(variant.calculated_price, Some(CalculatedPrice::Amount(a)) if a == 0.0) {
            continue;
        }
        let Some(amount) = variant_amount(variant) else {
            continue;
        };
        if best.is_none_or(|(_, best_amount)| amount < best_amount) {
            best = Some((variant, amount));
        }
    }
    best.map(|(variant, _)| variant)
}

/// Computes the display price of one variant.
///
/// Returns `None` when the variant carries no calculated price.
#[must_use]
pub fn prices_for_variant(variant: &StoreVariant, locale: &str) -> Option<PriceInfo> {
    let (calculated, original, currency, price_type) = match variant.calculated_price.as_ref()? {
        CalculatedPrice::Amount(amount) => (*amount, *amount, variant.currency_code.clone(), None),
        CalculatedPrice::Detailed(set) => {
            let calculated = set.calculated_amount?;
            (
                calculated,
                set.original_amount.unwrap_or(calculated),
                set.currency_code
                    .clone()
                    .or_else(|| variant.currency_code.clone()),
                set.calculated_price
                    .as_ref()
                    .and_then(|p| p.price_list_type.clone()),
            )
        }
    };
    let currency_code = currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());

    Some(PriceInfo {
        calculated_price_number: calculated,
        calculated_price: convert_to_locale(calculated, &currency_code, locale),
        original_price_number: Some(original),
        original_price: Some(convert_to_locale(original, &currency_code, locale)),
        currency_code,
        price_type,
        percentage_diff: percentage_diff(original, calculated),
    })
}

/// Computes the price slots for `product`.
///
/// `variant_id` matches a variant's id or SKU; an unknown id falls through to
/// the cheapest price.
///
/// # Errors
///
/// Returns [`StoreError::MissingProduct`] when `product` is `None`.
pub fn get_product_price(
    product: Option<&StoreProduct>,
    variant_id: Option<&str>,
    locale: &str,
) -> Result<ProductPrice, StoreError> {
    let product = product.ok_or(StoreError::MissingProduct)?;

    if let Some(wanted) = variant_id.filter(|id| !id.is_empty()) {
        let matched = product
            .variants
            .iter()
            .find(|v| v.id == wanted || v.sku.as_deref() == Some(wanted));
        if let Some(variant) = matched {
            return Ok(ProductPrice {
                cheapest_price: None,
                variant_price: prices_for_variant(variant, locale),
            });
        }
    }

    if let Some(min) = product.min_price {
        let currency_code = product
            .currency_code
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());
        return Ok(ProductPrice {
            cheapest_price: Some(PriceInfo {
                calculated_price_number: min,
                calculated_price: convert_to_locale(min, &currency_code, locale),
                original_price_number: None,
                original_price: None,
                currency_code,
                price_type: None,
                percentage_diff: None,
            }),
            variant_price: None,
        });
    }

    Ok(ProductPrice {
        cheapest_price: cheapest_variant(product).and_then(|v| prices_for_variant(v, locale)),
        variant_price: None,
    })
}

/// The single price to show for `product`: the variant price when a variant
/// was selected, the cheapest price otherwise.
///
/// # Errors
///
/// Returns [`StoreError::MissingProduct`] when `product` is `None`.
pub fn select_price(
    product: Option<&StoreProduct>,
    variant_id: Option<&str>,
    locale: &str,
) -> Result<Option<PriceInfo>, StoreError> {
    let prices = get_product_price(product, variant_id, locale)?;
    Ok(prices.variant_price.or(prices.cheapest_price))
}

#[cfg(test)]
#[path = "price_test.rs"]
mod tests;
