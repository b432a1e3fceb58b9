//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::path::PathBuf;
use std::process::Command;

use storefront::api::CatalogClient;
use storefront::catalog::{Product, ProductId, Rating};
use storefront::config::ApiConfig;
use tempfile::TempDir;

pub use mock_api::{sample_products, MockApi, MockResponse};

/// Client pointed at a mock server, with short timeouts.
pub fn client_for(mock: &MockApi) -> CatalogClient {
    CatalogClient::new(&ApiConfig {
        base_url: mock.base_url(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    })
    .expect("Failed to build client")
}

pub fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id: ProductId(id),
        title: title.to_string(),
        price,
        description: format!("{title} description"),
        category: category.to_string(),
        image: format!("https://example.com/{id}.png"),
        rating: Rating {
            rate: 4.0,
            count: 10,
        },
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// The binary, isolated from the user's config and storage.
pub fn storefront_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_storefront"));
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--storage")
        .arg(dir.path().join("storage.json"))
        .env_remove("RUST_LOG");
    cmd
}
