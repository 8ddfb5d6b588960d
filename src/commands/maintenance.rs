//! Cache maintenance and game key lookup.

use anyhow::{Context, Result};

use crate::cli::types::{GameCode, Season};
use crate::core::cache::ApiCache;
use crate::storage::FantasyDatabase;
use crate::yahoo::games::game_key_for;

pub fn handle_cache_clean() -> Result<()> {
    let path = FantasyDatabase::database_path()?;
    let cache = ApiCache::open(&path).context("failed to open response cache")?;
    let removed = cache.clean_expired()?;
    println!("✓ Removed {} expired cache entries", removed);
    Ok(())
}

pub fn handle_game_key(game: GameCode, season: Season) -> Result<()> {
    println!("{}", game_key_for(game, season.as_u16())?);
    Ok(())
}
