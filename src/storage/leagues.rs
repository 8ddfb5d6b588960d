//! League rows

use super::{models::FantasyLeague, schema::FantasyDatabase};
use crate::core::cache::unix_now;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

const LEAGUE_COLUMNS: &str = "id, yahoo_league_id, yahoo_game_key, league_name, season_year,
    scoring_type, scoring_settings, num_teams, current_week, last_synced_at,
    created_at, updated_at";

fn league_from_row(row: &Row<'_>) -> rusqlite::Result<FantasyLeague> {
    Ok(FantasyLeague {
        id: row.get(0)?,
        yahoo_league_id: row.get(1)?,
        yahoo_game_key: row.get(2)?,
        league_name: row.get(3)?,
        season_year: row.get(4)?,
        scoring_type: row.get(5)?,
        scoring_settings: row.get(6)?,
        num_teams: row.get(7)?,
        current_week: row.get(8)?,
        last_synced_at: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

impl FantasyDatabase {
    /// Insert a league and return its row id. `id` and timestamps on the input are ignored.
    pub fn create_league(&mut self, league: &FantasyLeague) -> Result<i64> {
        let now = unix_now()?;
        self.conn.execute(
            "INSERT INTO fantasy_leagues
             (yahoo_league_id, yahoo_game_key, league_name, season_year, scoring_type,
              scoring_settings, num_teams, current_week, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
            params![
                league.yahoo_league_id,
                league.yahoo_game_key,
                league.league_name,
                league.season_year,
                league.scoring_type,
                league.scoring_settings,
                league.num_teams,
                league.current_week,
                now
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_league(&self, league_id: i64) -> Result<Option<FantasyLeague>> {
        let sql = format!("SELECT {} FROM fantasy_leagues WHERE id = ?1", LEAGUE_COLUMNS);
        Ok(self
            .conn
            .query_row(&sql, params![league_id], league_from_row)
            .optional()?)
    }

    pub fn get_league_by_yahoo_id(&self, yahoo_league_id: &str) -> Result<Option<FantasyLeague>> {
        let sql = format!(
            "SELECT {} FROM fantasy_leagues WHERE yahoo_league_id = ?1",
            LEAGUE_COLUMNS
        );
        Ok(self
            .conn
            .query_row(&sql, params![yahoo_league_id], league_from_row)
            .optional()?)
    }

    /// Every imported league, newest first.
    pub fn get_all_leagues(&self) -> Result<Vec<FantasyLeague>> {
        let sql = format!(
            "SELECT {} FROM fantasy_leagues ORDER BY created_at DESC, id DESC",
            LEAGUE_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let leagues = stmt
            .query_map([], league_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(leagues)
    }

    pub fn update_league_sync_time(&mut self, league_id: i64) -> Result<()> {
        let now = unix_now()?;
        self.conn.execute(
            "UPDATE fantasy_leagues SET last_synced_at = ?1, updated_at = ?1 WHERE id = ?2",
            params![now, league_id],
        )?;
        Ok(())
    }

    pub fn update_scoring_settings(&mut self, league_id: i64, settings_json: &str) -> Result<()> {
        let now = unix_now()?;
        self.conn.execute(
            "UPDATE fantasy_leagues SET scoring_settings = ?1, updated_at = ?2 WHERE id = ?3",
            params![settings_json, now, league_id],
        )?;
        Ok(())
    }

    /// Delete a league; teams, rosters, projections and proposals cascade.
    pub fn delete_league(&mut self, league_id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM fantasy_leagues WHERE id = ?1", params![league_id])?;
        Ok(())
    }
}
