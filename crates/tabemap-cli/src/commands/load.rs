//! Load command implementation

use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tabemap_core::models::{Building, Restaurant};
use tabemap_core::validation::validate_coordinates;
use tabemap_store::ports::{BuildingStore, RestaurantStore};
use tabemap_store::postgres::{PostgresConfig, PostgresStore};

use crate::cli::LoadArgs;
use crate::import;

const BATCH_SIZE: usize = 100;

pub async fn execute(args: LoadArgs) -> Result<()> {
    if args.restaurants.is_none() && args.buildings.is_none() {
        bail!("nothing to load: pass --restaurants and/or --buildings");
    }

    let restaurants = read_restaurants(&args)?;
    let buildings = read_buildings(&args)?;

    if args.dry_run {
        println!("{} dry run, nothing written", style("-").dim());
        return Ok(());
    }

    let config = PostgresConfig::from_env()
        .context("DATABASE_URL must be set to load data")?;
    let store = PostgresStore::with_migrations(config).await?;
    tracing::info!("connected to store, writing datasets");

    let progress = ProgressBar::new((restaurants.len() + buildings.len()) as u64);
    progress.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);

    progress.set_message("restaurants");
    for chunk in restaurants.chunks(BATCH_SIZE) {
        store.put_restaurants(chunk).await?;
        progress.inc(chunk.len() as u64);
    }

    progress.set_message("buildings");
    for chunk in buildings.chunks(BATCH_SIZE) {
        store.put_buildings(chunk).await?;
        progress.inc(chunk.len() as u64);
    }

    progress.finish_and_clear();

    println!(
        "{} loaded {} restaurants and {} buildings",
        style("✓").green(),
        restaurants.len(),
        buildings.len()
    );

    Ok(())
}

fn read_restaurants(args: &LoadArgs) -> Result<Vec<Restaurant>> {
    let Some(path) = &args.restaurants else {
        return Ok(Vec::new());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let restaurants = import::parse_restaurants(&raw)?;

    println!(
        "{} parsed {} restaurants from {}",
        style("✓").green(),
        restaurants.len(),
        path.display()
    );

    let outside = restaurants
        .iter()
        .filter(|r| !validate_coordinates(r.lat, r.lng).is_valid)
        .count();
    if outside > 0 {
        println!(
            "{} {} restaurants have coordinates outside the supported region",
            style("!").yellow(),
            outside
        );
    }

    Ok(restaurants)
}

fn read_buildings(args: &LoadArgs) -> Result<Vec<Building>> {
    let Some(path) = &args.buildings else {
        return Ok(Vec::new());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (buildings, skipped) = import::parse_buildings(&raw)?;

    println!(
        "{} parsed {} building footprints from {}",
        style("✓").green(),
        buildings.len(),
        path.display()
    );
    if skipped > 0 {
        println!(
            "{} skipped {} features without an id or polygon geometry",
            style("!").yellow(),
            skipped
        );
    }

    Ok(buildings)
}
