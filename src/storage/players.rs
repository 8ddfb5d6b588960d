//! Player rows and season stats

use super::{
    models::{CategoryLine, PlayerRecord, PlayerSeasonLine, SeasonStats},
    schema::FantasyDatabase,
};
use crate::core::cache::unix_now;
use anyhow::Result;
use rusqlite::{params, OptionalExtension};

/// Position reported for players without a stored primary position.
pub const UNKNOWN_POSITION: &str = "F";

impl FantasyDatabase {
    /// Insert or update a player by Yahoo key. Returns the row id.
    pub fn upsert_player(
        &mut self,
        yahoo_player_key: &str,
        full_name: &str,
        primary_position: Option<&str>,
        is_active: bool,
    ) -> Result<i64> {
        let now = unix_now()?;
        let id = self.conn.query_row(
            "INSERT INTO players (yahoo_player_key, full_name, primary_position, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             ON CONFLICT (yahoo_player_key) DO UPDATE SET
                full_name = excluded.full_name,
                primary_position = excluded.primary_position,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at
             RETURNING id",
            params![yahoo_player_key, full_name, primary_position, is_active, now],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    pub fn get_player(&self, player_id: i64) -> Result<Option<PlayerRecord>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, yahoo_player_key, full_name, primary_position, is_active
                 FROM players WHERE id = ?1",
                params![player_id],
                |row| {
                    Ok(PlayerRecord {
                        id: row.get(0)?,
                        yahoo_player_key: row.get(1)?,
                        full_name: row.get(2)?,
                        primary_position: row.get(3)?,
                        is_active: row.get(4)?,
                    })
                },
            )
            .optional()?)
    }

    pub fn upsert_season_stats(&mut self, stats: &SeasonStats) -> Result<()> {
        let now = unix_now()?;
        self.conn.execute(
            "INSERT OR REPLACE INTO player_season_stats
             (player_id, season, games_played, points_per_game, rebounds_per_game,
              assists_per_game, steals_per_game, blocks_per_game, turnovers_per_game,
              field_goal_percentage, free_throw_percentage, three_pointers_made, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                stats.player_id,
                stats.season,
                stats.games_played,
                stats.points_per_game,
                stats.rebounds_per_game,
                stats.assists_per_game,
                stats.steals_per_game,
                stats.blocks_per_game,
                stats.turnovers_per_game,
                stats.field_goal_percentage,
                stats.free_throw_percentage,
                stats.three_pointers_made,
                now
            ],
        )?;
        Ok(())
    }

    /// Active players with their averages for `season`. Players without a
    /// stat row get zeros.
    pub fn get_active_players_with_stats(&self, season: &str) -> Result<Vec<PlayerSeasonLine>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, COALESCE(p.primary_position, ?2),
                    COALESCE(s.points_per_game, 0), COALESCE(s.rebounds_per_game, 0),
                    COALESCE(s.assists_per_game, 0), COALESCE(s.steals_per_game, 0),
                    COALESCE(s.blocks_per_game, 0), COALESCE(s.turnovers_per_game, 0),
                    COALESCE(s.field_goal_percentage, 0), COALESCE(s.free_throw_percentage, 0),
                    COALESCE(s.three_pointers_made, 0)
             FROM players p
             LEFT JOIN player_season_stats s ON p.id = s.player_id AND s.season = ?1
             WHERE p.is_active = 1
             ORDER BY p.id",
        )?;
        let players = stmt
            .query_map(params![season, UNKNOWN_POSITION], |row| {
                Ok(PlayerSeasonLine {
                    player_id: row.get(0)?,
                    primary_position: row.get(1)?,
                    line: CategoryLine {
                        pts: row.get(2)?,
                        reb: row.get(3)?,
                        ast: row.get(4)?,
                        stl: row.get(5)?,
                        blk: row.get(6)?,
                        to: row.get(7)?,
                        fg_pct: row.get(8)?,
                        ft_pct: row.get(9)?,
                        tpm: row.get(10)?,
                    },
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(players)
    }

    pub fn get_player_id_by_yahoo_key(&self, yahoo_player_key: &str) -> Result<Option<i64>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id FROM players WHERE yahoo_player_key = ?1",
                params![yahoo_player_key],
                |row| row.get(0),
            )
            .optional()?)
    }

    /// Primary position, or `F` when unknown.
    pub fn get_player_position(&self, player_id: i64) -> Result<String> {
        let position: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT primary_position FROM players WHERE id = ?1",
                params![player_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(position
            .flatten()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| UNKNOWN_POSITION.to_string()))
    }
}
