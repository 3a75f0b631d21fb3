//! Status command implementation

use anyhow::{Context, Result};
use console::style;
use tabemap_store::ports::{BuildingStore, RestaurantStore};
use tabemap_store::postgres::{PostgresConfig, PostgresStore};

use crate::cli::StatusArgs;

pub async fn execute(args: StatusArgs) -> Result<()> {
    let config = PostgresConfig::from_env().context("DATABASE_URL must be set")?;
    let store = PostgresStore::new(config).await?;

    store.health_check().await?;
    println!("{} store reachable", style("✓").green());

    match store.current_version().await? {
        Some(version) => println!("schema version: {}", version),
        None => println!("schema version: none (run `tabemap load` to apply migrations)"),
    }

    if args.verbose {
        let restaurants = RestaurantStore::get_all(&store).await?;
        let buildings = BuildingStore::get_all(&store).await?;
        println!("restaurants: {}", restaurants.len());
        println!("buildings:   {}", buildings.len());
    }

    Ok(())
}
