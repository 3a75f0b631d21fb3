use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tabemap - restaurant and building lookup service
#[derive(Parser, Debug)]
#[command(name = "tabemap")]
#[command(about = "Data loading and diagnostics for the tabemap store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load restaurant and building datasets into the store
    Load(LoadArgs),

    /// Show store health, schema version, and row counts
    Status(StatusArgs),
}

#[derive(Parser, Debug)]
pub struct LoadArgs {
    /// Path to a JSON array of restaurants
    #[arg(long)]
    pub restaurants: Option<PathBuf>,

    /// Path to a GeoJSON FeatureCollection of building footprints
    #[arg(long)]
    pub buildings: Option<PathBuf>,

    /// Parse and validate the datasets without writing to the store
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Also count rows per table
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
