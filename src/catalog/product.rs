use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical product identifier.
///
/// Parsed once at the boundary (routes, CLI arguments, JSON) and compared
/// as an integer everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ProductId)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId(value)
    }
}

/// Average review score and number of reviews.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u32,
}

/// A catalog item as returned by the products API.
///
/// Every field except `id` falls back to its default when missing, so
/// partially written favorites from older sessions still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Description length shown on list rows before truncation.
pub const SUMMARY_CHARS: usize = 80;

impl Product {
    /// Price formatted with two decimals and a dollar sign.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Description cut to [`SUMMARY_CHARS`] characters, with an ellipsis
    /// when something was cut.
    pub fn summary(&self) -> String {
        if self.description.chars().count() > SUMMARY_CHARS {
            let head: String = self.description.chars().take(SUMMARY_CHARS).collect();
            format!("{head}...")
        } else {
            self.description.clone()
        }
    }

    /// Reward points earned on purchase (2% of price).
    pub fn reward_points(&self) -> f64 {
        self.price * 0.02
    }
}
