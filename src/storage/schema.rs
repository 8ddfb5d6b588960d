//! Database schema and connection management

use anyhow::{anyhow, Result};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "YAHOO_FANTASY_DB";

/// Connection to the local fantasy mirror.
pub struct FantasyDatabase {
    pub(crate) conn: Connection,
}

impl FantasyDatabase {
    /// Open the database at the configured path and ensure tables exist.
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// `$YAHOO_FANTASY_DB`, else `<cache_dir>/yahoo-fantasy/fantasy.db`.
    pub fn database_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(DB_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let cache_dir = cache_dir().ok_or_else(|| anyhow!("Could not determine cache directory"))?;
        Ok(cache_dir.join("yahoo-fantasy").join("fantasy.db"))
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS yahoo_api_cache (
                cache_key TEXT PRIMARY KEY,
                cache_value TEXT NOT NULL,
                expires_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS fantasy_leagues (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                yahoo_league_id TEXT NOT NULL UNIQUE,
                yahoo_game_key TEXT NOT NULL,
                league_name TEXT NOT NULL,
                season_year INTEGER NOT NULL,
                scoring_type TEXT NOT NULL DEFAULT '',
                scoring_settings TEXT NOT NULL DEFAULT '{}',
                num_teams INTEGER NOT NULL DEFAULT 0,
                current_week INTEGER NOT NULL DEFAULT 0,
                last_synced_at INTEGER,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS fantasy_teams (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                league_id INTEGER NOT NULL REFERENCES fantasy_leagues(id) ON DELETE CASCADE,
                yahoo_team_id TEXT NOT NULL,
                yahoo_team_key TEXT NOT NULL,
                team_name TEXT NOT NULL,
                manager_name TEXT NOT NULL DEFAULT '',
                is_user_team INTEGER NOT NULL DEFAULT 0,
                wins INTEGER NOT NULL DEFAULT 0,
                losses INTEGER NOT NULL DEFAULT 0,
                ties INTEGER NOT NULL DEFAULT 0,
                rank INTEGER NOT NULL DEFAULT 0,
                points_for REAL NOT NULL DEFAULT 0,
                points_against REAL NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                UNIQUE (league_id, yahoo_team_key)
            );

            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                yahoo_player_key TEXT NOT NULL UNIQUE,
                full_name TEXT NOT NULL,
                primary_position TEXT,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS player_season_stats (
                player_id INTEGER NOT NULL REFERENCES players(id) ON DELETE CASCADE,
                season TEXT NOT NULL,
                games_played INTEGER NOT NULL DEFAULT 0,
                points_per_game REAL NOT NULL DEFAULT 0,
                rebounds_per_game REAL NOT NULL DEFAULT 0,
                assists_per_game REAL NOT NULL DEFAULT 0,
                steals_per_game REAL NOT NULL DEFAULT 0,
                blocks_per_game REAL NOT NULL DEFAULT 0,
                turnovers_per_game REAL NOT NULL DEFAULT 0,
                field_goal_percentage REAL NOT NULL DEFAULT 0,
                free_throw_percentage REAL NOT NULL DEFAULT 0,
                three_pointers_made REAL NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, season)
            );

            CREATE TABLE IF NOT EXISTS fantasy_rosters (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                team_id INTEGER NOT NULL REFERENCES fantasy_teams(id) ON DELETE CASCADE,
                player_id INTEGER NOT NULL REFERENCES players(id),
                roster_position TEXT NOT NULL DEFAULT '',
                selected_position TEXT NOT NULL DEFAULT '',
                is_starting INTEGER NOT NULL DEFAULT 0,
                added_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS player_projections (
                player_id INTEGER NOT NULL REFERENCES players(id) ON DELETE CASCADE,
                league_id INTEGER NOT NULL REFERENCES fantasy_leagues(id) ON DELETE CASCADE,
                fpg REAL NOT NULL,
                proj_pts REAL NOT NULL,
                proj_reb REAL NOT NULL,
                proj_ast REAL NOT NULL,
                proj_stl REAL NOT NULL,
                proj_blk REAL NOT NULL,
                proj_to REAL NOT NULL,
                proj_fg_pct REAL NOT NULL,
                proj_ft_pct REAL NOT NULL,
                proj_3pm REAL NOT NULL,
                z_score REAL NOT NULL,
                overall_rank INTEGER NOT NULL,
                position_rank INTEGER NOT NULL,
                scarcity_multiplier REAL NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, league_id)
            );

            CREATE TABLE IF NOT EXISTS team_analysis (
                team_id INTEGER PRIMARY KEY REFERENCES fantasy_teams(id) ON DELETE CASCADE,
                pts_zscore REAL NOT NULL,
                reb_zscore REAL NOT NULL,
                ast_zscore REAL NOT NULL,
                stl_zscore REAL NOT NULL,
                blk_zscore REAL NOT NULL,
                to_zscore REAL NOT NULL,
                fg_pct_zscore REAL NOT NULL,
                ft_pct_zscore REAL NOT NULL,
                tpm_zscore REAL NOT NULL,
                weakest_cat_1 TEXT,
                weakest_cat_2 TEXT,
                weakest_cat_3 TEXT,
                strongest_cat_1 TEXT,
                strongest_cat_2 TEXT,
                strongest_cat_3 TEXT,
                needs_pg INTEGER NOT NULL DEFAULT 0,
                needs_sg INTEGER NOT NULL DEFAULT 0,
                needs_sf INTEGER NOT NULL DEFAULT 0,
                needs_pf INTEGER NOT NULL DEFAULT 0,
                needs_c INTEGER NOT NULL DEFAULT 0,
                analyzed_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS trade_proposals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                league_id INTEGER NOT NULL REFERENCES fantasy_leagues(id) ON DELETE CASCADE,
                team_a_id INTEGER NOT NULL REFERENCES fantasy_teams(id) ON DELETE CASCADE,
                team_b_id INTEGER NOT NULL REFERENCES fantasy_teams(id) ON DELETE CASCADE,
                trade_details TEXT NOT NULL,
                fairness_score REAL NOT NULL,
                team_a_value_change REAL NOT NULL DEFAULT 0,
                team_b_value_change REAL NOT NULL DEFAULT 0,
                team_a_benefits TEXT NOT NULL DEFAULT '',
                team_b_benefits TEXT NOT NULL DEFAULT '',
                source TEXT NOT NULL DEFAULT 'manual',
                status TEXT NOT NULL DEFAULT 'pending',
                suggested_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS sync_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                league_id INTEGER NOT NULL REFERENCES fantasy_leagues(id) ON DELETE CASCADE,
                sync_type TEXT NOT NULL,
                sync_status TEXT NOT NULL,
                items_synced INTEGER NOT NULL DEFAULT 0,
                error_message TEXT,
                completed_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_fantasy_teams_league ON fantasy_teams(league_id);
            CREATE INDEX IF NOT EXISTS idx_fantasy_rosters_team ON fantasy_rosters(team_id);
            CREATE INDEX IF NOT EXISTS idx_player_projections_league ON player_projections(league_id);
            CREATE INDEX IF NOT EXISTS idx_trade_proposals_teams ON trade_proposals(team_a_id, team_b_id);",
        )?;
        Ok(())
    }
}
