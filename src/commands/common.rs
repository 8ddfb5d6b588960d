//! Shared setup and output helpers for command handlers.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::core::cache::ApiCache;
use crate::storage::FantasyDatabase;
use crate::yahoo::{ClientConfig, YahooClient};

/// Open the local database at its configured path.
pub fn open_database() -> Result<FantasyDatabase> {
    FantasyDatabase::new().context("failed to open local database")
}

/// Build a client from the environment. The response cache lives in the
/// same SQLite file as the local database.
pub fn open_client() -> Result<YahooClient> {
    let config = ClientConfig::from_env();
    if !config.cache_enabled {
        return Ok(YahooClient::new(config)?);
    }

    let path = FantasyDatabase::database_path()?;
    debug!(path = %path.display(), "Using response cache");
    let cache = ApiCache::open(&path).context("failed to open response cache")?;
    Ok(YahooClient::with_cache(config, cache)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Comma-joined list, or `-` when empty.
pub fn join_or_dash<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}
