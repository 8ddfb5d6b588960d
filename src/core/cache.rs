//! Two-tier response cache.
//!
//! - L1: in-memory LRU keyed by cache key
//! - L2: the `yahoo_api_cache` SQLite table, rows carry an absolute expiry
//!
//! Values are stored as JSON text. A row whose expiry has passed is deleted
//! the first time it is read.

use anyhow::{anyhow, Result};
use lru::LruCache;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

#[cfg(test)]
mod tests;

pub const DEFAULT_MEMORY_CAPACITY: usize = 256;

/// Typed cache keys for the responses the client caches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    UserLeagues { game_key: String },
    LeagueTeams { league_key: String },
    TeamRoster { team_key: String },
}

impl CacheKey {
    pub fn as_key(&self) -> String {
        match self {
            CacheKey::UserLeagues { game_key } => format!("user:leagues:{}", game_key),
            CacheKey::LeagueTeams { league_key } => format!("league:{}:teams", league_key),
            CacheKey::TeamRoster { team_key } => format!("team:{}:roster", team_key),
        }
    }

    pub fn ttl(&self) -> Duration {
        match self {
            CacheKey::UserLeagues { .. } => Duration::from_secs(24 * 60 * 60),
            CacheKey::LeagueTeams { .. } => Duration::from_secs(6 * 60 * 60),
            CacheKey::TeamRoster { .. } => Duration::from_secs(60 * 60),
        }
    }
}

pub(crate) fn unix_now() -> Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: i64,
}

pub struct ApiCache {
    conn: Mutex<Connection>,
    memory: Mutex<LruCache<String, MemoryEntry>>,
    memory_capacity: usize,
}

impl ApiCache {
    /// Open (or create) the cache table in the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS yahoo_api_cache (
                cache_key TEXT PRIMARY KEY,
                cache_value TEXT NOT NULL,
                expires_at INTEGER NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_yahoo_api_cache_expires
             ON yahoo_api_cache(expires_at)",
            [],
        )?;

        let capacity = NonZeroUsize::new(DEFAULT_MEMORY_CAPACITY)
            .ok_or_else(|| anyhow!("cache capacity must be non-zero"))?;
        Ok(Self {
            conn: Mutex::new(conn),
            memory: Mutex::new(LruCache::new(capacity)),
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| anyhow!("cache connection lock poisoned"))
    }

    fn memory(&self) -> Result<MutexGuard<'_, LruCache<String, MemoryEntry>>> {
        self.memory.lock().map_err(|_| anyhow!("cache memory lock poisoned"))
    }

    /// Cached JSON text for `key`, or `None` on a miss or an expired row.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let now = unix_now()?;

        {
            let mut memory = self.memory()?;
            if let Some(entry) = memory.get(key) {
                if entry.expires_at > now {
                    debug!(key, "cache hit (memory)");
                    return Ok(Some(entry.value.clone()));
                }
                memory.pop(key);
            }
        }

        let conn = self.conn()?;
        let row: Option<(String, i64)> = conn
            .query_row(
                "SELECT cache_value, expires_at FROM yahoo_api_cache WHERE cache_key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((value, expires_at)) if expires_at > now => {
                debug!(key, "cache hit (sqlite)");
                self.memory()?.put(
                    key.to_string(),
                    MemoryEntry {
                        value: value.clone(),
                        expires_at,
                    },
                );
                Ok(Some(value))
            }
            Some(_) => {
                debug!(key, "cache entry expired");
                conn.execute("DELETE FROM yahoo_api_cache WHERE cache_key = ?1", params![key])?;
                Ok(None)
            }
            None => {
                debug!(key, "cache miss");
                Ok(None)
            }
        }
    }

    /// Typed variant of [`ApiCache::get`]. A value that no longer decodes is a miss.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        Ok(self
            .get(key)?
            .and_then(|text| serde_json::from_str(&text).ok()))
    }

    /// Store `value` under `key` for `ttl` seconds. Non-positive TTLs store an
    /// already-expired row.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl_secs: i64) -> Result<()> {
        let text = serde_json::to_string(value)?;
        let expires_at = unix_now()? + ttl_secs;

        self.conn()?.execute(
            "INSERT OR REPLACE INTO yahoo_api_cache (cache_key, cache_value, expires_at)
             VALUES (?1, ?2, ?3)",
            params![key, text, expires_at],
        )?;
        self.memory()?.put(
            key.to_string(),
            MemoryEntry {
                value: text,
                expires_at,
            },
        );
        Ok(())
    }

    pub fn set_keyed<T: Serialize + ?Sized>(&self, key: &CacheKey, value: &T) -> Result<()> {
        self.set(&key.as_key(), value, key.ttl().as_secs() as i64)
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        self.memory()?.pop(key);
        self.conn()?
            .execute("DELETE FROM yahoo_api_cache WHERE cache_key = ?1", params![key])?;
        Ok(())
    }

    /// Remove every expired row. Returns how many rows were deleted.
    pub fn clean_expired(&self) -> Result<usize> {
        let now = unix_now()?;
        let removed = self
            .conn()?
            .execute("DELETE FROM yahoo_api_cache WHERE expires_at <= ?1", params![now])?;

        let mut memory = self.memory()?;
        let stale: Vec<String> = memory
            .iter()
            .filter(|(_, entry)| entry.expires_at <= now)
            .map(|(key, _)| key.clone())
            .collect();
        for key in stale {
            memory.pop(&key);
        }

        debug!(removed, "cleaned expired cache rows");
        Ok(removed)
    }

    /// Memory tier usage as `(entries, capacity)`.
    pub fn memory_stats(&self) -> (usize, usize) {
        let used = self.memory.lock().map(|m| m.len()).unwrap_or(0);
        (used, self.memory_capacity)
    }
}
