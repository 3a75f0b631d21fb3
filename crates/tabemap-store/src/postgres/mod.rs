//! PostgreSQL/PostGIS storage adapter implementation

pub mod config;
pub mod migrations;

mod building;
mod restaurant;

pub use config::{ConfigError, PoolConfig, PostgresConfig};
pub use migrations::{MigrationError, MigrationManager};

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tabemap_core::error::{Result, TabemapError};

use crate::ports::StoreHealth;

/// PostgreSQL storage adapter backed by PostGIS.
///
/// Implements both storage ports; each port method borrows one pooled
/// connection for the duration of a single query and the pool reclaims it
/// on every exit path.
pub struct PostgresStore {
    pool: PgPool,
    config: PostgresConfig,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given configuration
    pub async fn new(config: PostgresConfig) -> Result<Self> {
        config.validate().map_err(|e| TabemapError::ConfigInvalid {
            key: "database_url".to_string(),
            reason: e.to_string(),
        })?;

        let pool = PgPoolOptions::new()
            .min_connections(config.pool.min_connections)
            .max_connections(config.pool.max_connections)
            .acquire_timeout(config.pool.acquire_timeout)
            .idle_timeout(config.pool.idle_timeout)
            .max_lifetime(config.pool.max_lifetime)
            .connect(&config.database_url)
            .await
            .map_err(|e| TabemapError::unavailable(format!("failed to connect: {}", e)))?;

        // Test connection by executing a simple query
        sqlx::query("SELECT 1")
            .fetch_one(&pool)
            .await
            .map_err(|e| TabemapError::unavailable(format!("connection test failed: {}", e)))?;

        Ok(Self { pool, config })
    }

    /// Create a new PostgreSQL store and run migrations
    pub async fn with_migrations(config: PostgresConfig) -> Result<Self> {
        let store = Self::new(config).await?;
        store.run_migrations().await?;
        Ok(store)
    }

    /// Run all pending migrations
    pub async fn run_migrations(&self) -> Result<()> {
        let manager = MigrationManager::new(self.pool.clone());
        manager
            .run_migrations()
            .await
            .map_err(|e| TabemapError::unavailable(format!("migration failed: {}", e)))?;
        Ok(())
    }

    /// Get the current schema version
    pub async fn current_version(&self) -> Result<Option<i64>> {
        let manager = MigrationManager::new(self.pool.clone());
        manager
            .current_version()
            .await
            .map_err(|e| TabemapError::unavailable(format!("failed to get current version: {}", e)))
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &PostgresConfig {
        &self.config
    }

    /// Perform a health check on the database connection
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TabemapError::unavailable(format!("health check failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for PostgresStore {
    async fn health_check(&self) -> Result<()> {
        PostgresStore::health_check(self).await
    }
}

/// Map a query failure to the store-unavailable error the boundary expects.
pub(crate) fn query_failed(e: sqlx::Error) -> TabemapError {
    TabemapError::unavailable(e.to_string())
}
