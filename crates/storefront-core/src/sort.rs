//! Sort keys accepted by the product listing endpoints.
//!
//! The wire form (`created_at`, `price_asc`, ...) is passed verbatim to the
//! backend as the `order` query parameter and is also what the CLI accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Newest products first.
    #[default]
    CreatedAt,
    PriceAsc,
    PriceDesc,
    /// Case-insensitive alphabetical by title.
    Title,
}

impl SortOption {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOption::CreatedAt => "created_at",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::Title => "title",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option \"{0}\" (expected created_at, price_asc, price_desc or title)")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "created_at" => Ok(SortOption::CreatedAt),
            "price_asc" => Ok(SortOption::PriceAsc),
            "price_desc" => Ok(SortOption::PriceDesc),
            "title" => Ok(SortOption::Title),
            other => Err(UnknownSortOption(other.to_string())),
        }
    }
}
