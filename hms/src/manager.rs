use std::time::Duration;

use abi::{DbConfig, DeletePolicy, Error};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{error, info};

use crate::HmsManager;

impl HmsManager {
    pub fn new(pool: PgPool, policy: DeletePolicy) -> Self {
        Self { pool, policy }
    }

    /// Open a bounded pool. Callers wait at most `acquire_timeout_secs` for a
    /// free connection and then get `Error::StorageUnavailable`.
    pub async fn from_config(config: &DbConfig, policy: DeletePolicy) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.to_url())
            .await
            .map_err(|e| {
                error!(
                    "failed to connect to postgres at {}:{}/{} as {}: {}",
                    config.host, config.port, config.dbname, config.user, e
                );
                Error::from(e)
            })?;
        info!(
            "connected to postgres at {}:{}/{} (max {} connections)",
            config.host, config.port, config.dbname, config.max_connections
        );
        Ok(Self::new(pool, policy))
    }

    pub async fn migrate(&self) -> Result<(), Error> {
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::DbError(sqlx::Error::Migrate(Box::new(e))))
    }

    /// round trip to the store, logs pool usage when it fails
    pub async fn ping(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    "storage ping failed ({} connections, {} idle): {}",
                    self.pool.size(),
                    self.pool.num_idle(),
                    e
                );
                Error::from(e)
            })?;
        Ok(())
    }

    pub fn policy(&self) -> DeletePolicy {
        self.policy
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("connection pool closed");
    }
}
