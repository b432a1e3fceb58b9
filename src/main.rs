use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use storefront::api::{CatalogClient, ProductSource};
use storefront::catalog::{filter_products, Product, ProductId};
use storefront::cli::{list_criteria, Cli, Command, FavoritesCommand};
use storefront::config::Config;
use storefront::favorites::FavoritesStore;
use storefront::logging::init_tracing;
use storefront::repository::{LoadStatus, ProductRepository};
use storefront::storage::FavoritesPersistence;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config().context("Failed to load configuration")?;
    init_tracing(&config.logging.level, &cli.log_target(&config))?;

    let client = CatalogClient::new(&config.api)?;
    tracing::debug!(base_url = %client.base_url(), "Catalog client ready");
    let favorites = FavoritesStore::load(FavoritesPersistence::new(cli.key_value_store(&config)));

    match cli.command() {
        Command::Browse { route } => {
            storefront::ui::run(Arc::new(client), favorites, &config.ui, route)
                .context("Terminal UI failed")?;
            Ok(())
        }
        Command::List {
            search,
            category,
            sort,
        } => block_on(list_products(
            &client,
            &config,
            &search,
            category.as_deref(),
            sort.as_deref(),
        )),
        Command::Show { id } => block_on(show_product(&client, id)),
        Command::Categories => block_on(print_categories(&client)),
        Command::Favorites { command } => block_on(manage_favorites(&client, favorites, command)),
    }
}

fn block_on<F: std::future::Future<Output = Result<()>>>(future: F) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(future)
}

fn print_row(product: &Product) {
    println!(
        "{:>4}  {:>10}  ★ {:.1} ({:>4})  {}  [{}]",
        product.id,
        product.display_price(),
        product.rating.rate,
        product.rating.count,
        product.title,
        product.category
    );
}

async fn list_products(
    client: &CatalogClient,
    config: &Config,
    search: &str,
    category: Option<&str>,
    sort: Option<&str>,
) -> Result<()> {
    let criteria = list_criteria(search, category, sort, config);

    // A category narrows the request itself; the filter still runs after.
    let products = match &criteria.category {
        Some(category) => client
            .products_in_category(category)
            .await
            .with_context(|| format!("Failed to load products in '{category}'"))?,
        None => {
            let mut repository = ProductRepository::new();
            if repository.fetch(client).await == LoadStatus::Error {
                bail!(
                    "Failed to load products: {}",
                    repository.last_error().unwrap_or("unknown error")
                );
            }
            repository.products().to_vec()
        }
    };

    let visible = filter_products(&products, &criteria);
    if visible.is_empty() {
        println!("No products found. Try adjusting your search or filters.");
        return Ok(());
    }
    for product in visible {
        print_row(product);
    }
    Ok(())
}

async fn show_product(client: &CatalogClient, id: ProductId) -> Result<()> {
    let Some(product) = client.product(id).await? else {
        bail!("Product {id} not found");
    };

    println!("{}", product.title);
    println!("{}", product.category);
    println!(
        "{}  ★ {:.1} ({} reviews)",
        product.display_price(),
        product.rating.rate,
        product.rating.count
    );
    println!();
    println!("{}", product.description);
    println!();
    println!("Earn ${:.2} in Rewards points", product.reward_points());
    println!("Image: {}", product.image);
    Ok(())
}

async fn print_categories(client: &CatalogClient) -> Result<()> {
    for category in client.categories().await? {
        println!("{category}");
    }
    Ok(())
}

async fn manage_favorites(
    client: &CatalogClient,
    mut favorites: FavoritesStore,
    command: FavoritesCommand,
) -> Result<()> {
    match command {
        FavoritesCommand::List => {
            if favorites.is_empty() {
                println!("Your favorites list is empty");
                return Ok(());
            }
            let count = favorites.len();
            println!("{} {}", count, if count == 1 { "item" } else { "items" });
            for product in favorites.list() {
                print_row(product);
            }
        }
        FavoritesCommand::Add { id } => {
            if favorites.is_favorite(id) {
                println!("Product {id} is already a favorite");
                return Ok(());
            }
            let Some(product) = client.product(id).await? else {
                bail!("Product {id} not found");
            };
            let title = product.title.clone();
            favorites.add(product);
            println!("Added {title}");
        }
        FavoritesCommand::Remove { id } => {
            if favorites.remove(id) {
                println!("Removed product {id}");
            } else {
                println!("Product {id} is not a favorite");
            }
        }
    }
    Ok(())
}
