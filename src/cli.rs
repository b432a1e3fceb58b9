//! Command line interface and settings resolution.
//!
//! Flags override the config file, which overrides built-in defaults.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::catalog::{parse_category, FilterCriteria, ProductId, SortOrder};
use crate::config::Config;
use crate::logging::{default_log_path, LogTarget};
use crate::storage::{default_storage_path, FileStore, KeyValueStore, MemoryStore};
use crate::ui::Route;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Browse a product catalog and keep a list of favorites")]
pub struct Cli {
    /// Config file (default: {config_dir}/storefront/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the favorites storage file
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Keep favorites in memory only for this run
    #[arg(long, global = true, default_value_t = false)]
    pub ephemeral: bool,

    /// Log filter directive, e.g. "debug" or "storefront=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive browser (default)
    Browse {
        /// Screen to open first: "/", "/product/<id>" or "/favorites"
        #[arg(long, default_value = "/", value_parser = parse_route)]
        route: Route,
    },
    /// Print the filtered product list
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// Category name, or "all"
        #[arg(long)]
        category: Option<String>,
        /// price_asc, price_desc, rating or title
        #[arg(long)]
        sort: Option<String>,
    },
    /// Print one product
    Show { id: ProductId },
    /// Print the category list
    Categories,
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum FavoritesCommand {
    List,
    Add { id: ProductId },
    Remove { id: ProductId },
}

fn parse_route(raw: &str) -> Result<Route, String> {
    Route::parse(raw).map_err(|e| e.to_string())
}

impl Cli {
    /// Load the config file this invocation points at and apply flag
    /// overrides.
    pub fn resolve_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(storage) = &self.storage {
            config.storage.path = Some(storage.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Browse { route: Route::List })
    }

    /// The browser logs to a file; everything else logs to stderr.
    pub fn log_target(&self, config: &Config) -> LogTarget {
        match self.command() {
            Command::Browse { .. } => LogTarget::File(
                config.logging.file.clone().unwrap_or_else(default_log_path),
            ),
            _ => LogTarget::Stderr,
        }
    }

    pub fn key_value_store(&self, config: &Config) -> Arc<dyn KeyValueStore> {
        if self.ephemeral {
            return Arc::new(MemoryStore::new());
        }
        let path = config.storage.path.clone().unwrap_or_else(default_storage_path);
        Arc::new(FileStore::new(path))
    }
}

/// Criteria for `list`. Without `--sort` the configured default applies.
pub fn list_criteria(search: &str, category: Option<&str>, sort: Option<&str>, config: &Config) -> FilterCriteria {
    let sort = sort.map(SortOrder::parse).unwrap_or_else(|| config.ui.sort_order());
    FilterCriteria::new(search, category.and_then(parse_category), sort)
}
