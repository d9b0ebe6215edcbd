//! Plain-text rendering of listing results.

use storefront_catalog::{ListingPage, PageResult};

pub(crate) fn listing_text(listing: &ListingPage) -> String {
    let mut out = String::new();
    for card in &listing.items {
        let price = card
            .price
            .as_ref()
            .map_or("n/a", |p| p.calculated_price.as_str());
        out.push_str(&format!("{:<40} {price}\n", card.title));
    }
    let footer = match listing.pagination {
        Some(p) => format!(
            "page {} of {} ({} products)\n",
            p.page, p.total_pages, listing.count
        ),
        None => format!("{} products\n", listing.count),
    };
    out.push_str(&footer);
    out
}

pub(crate) fn page_result_text(result: &PageResult) -> String {
    let mut out: String = result
        .products
        .iter()
        .map(|product| format!("{}\t{}\n", product.id, product.title))
        .collect();
    let next = result
        .next_page
        .map_or_else(|| "none".to_owned(), |n| n.to_string());
    out.push_str(&format!("count: {}, next page: {next}\n", result.count));
    out
}
