//! Screen addresses.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::ProductId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route '{0}'")]
    Unknown(String),

    #[error("Invalid product id '{0}'")]
    InvalidId(String),
}

/// One of the three screens: `/`, `/product/:id` or `/favorites`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Product(ProductId),
    Favorites,
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Route::List),
            ["favorites"] => Ok(Route::Favorites),
            ["product", id] => id
                .parse::<ProductId>()
                .map(Route::Product)
                .map_err(|_| RouteError::InvalidId((*id).to_string())),
            _ => Err(RouteError::Unknown(trimmed.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Product(id) => format!("/product/{id}"),
            Route::Favorites => "/favorites".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::List => "Products",
            Route::Product(_) => "Product",
            Route::Favorites => "Favorites",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}
