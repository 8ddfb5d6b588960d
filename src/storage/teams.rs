//! Fantasy team rows

use super::{models::FantasyTeam, schema::FantasyDatabase};
use crate::core::cache::unix_now;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

const TEAM_COLUMNS: &str = "id, league_id, yahoo_team_id, yahoo_team_key, team_name,
    manager_name, is_user_team, wins, losses, ties, rank, points_for, points_against";

fn team_from_row(row: &Row<'_>) -> rusqlite::Result<FantasyTeam> {
    Ok(FantasyTeam {
        id: row.get(0)?,
        league_id: row.get(1)?,
        yahoo_team_id: row.get(2)?,
        yahoo_team_key: row.get(3)?,
        team_name: row.get(4)?,
        manager_name: row.get(5)?,
        is_user_team: row.get(6)?,
        wins: row.get(7)?,
        losses: row.get(8)?,
        ties: row.get(9)?,
        rank: row.get(10)?,
        points_for: row.get(11)?,
        points_against: row.get(12)?,
    })
}

impl FantasyDatabase {
    pub fn create_team(&mut self, team: &FantasyTeam) -> Result<i64> {
        let now = unix_now()?;
        self.conn.execute(
            "INSERT INTO fantasy_teams
             (league_id, yahoo_team_id, yahoo_team_key, team_name, manager_name, is_user_team,
              wins, losses, ties, rank, points_for, points_against, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)",
            params![
                team.league_id,
                team.yahoo_team_id,
                team.yahoo_team_key,
                team.team_name,
                team.manager_name,
                team.is_user_team,
                team.wins,
                team.losses,
                team.ties,
                team.rank,
                team.points_for,
                team.points_against,
                now
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert or refresh a team keyed by (league, Yahoo team key). Returns the row id.
    pub fn upsert_team(&mut self, team: &FantasyTeam) -> Result<i64> {
        let now = unix_now()?;
        let id = self.conn.query_row(
            "INSERT INTO fantasy_teams
             (league_id, yahoo_team_id, yahoo_team_key, team_name, manager_name, is_user_team,
              wins, losses, ties, rank, points_for, points_against, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)
             ON CONFLICT (league_id, yahoo_team_key) DO UPDATE SET
                yahoo_team_id = excluded.yahoo_team_id,
                team_name = excluded.team_name,
                manager_name = excluded.manager_name,
                is_user_team = excluded.is_user_team,
                wins = excluded.wins,
                losses = excluded.losses,
                ties = excluded.ties,
                rank = excluded.rank,
                points_for = excluded.points_for,
                points_against = excluded.points_against,
                updated_at = excluded.updated_at
             RETURNING id",
            params![
                team.league_id,
                team.yahoo_team_id,
                team.yahoo_team_key,
                team.team_name,
                team.manager_name,
                team.is_user_team,
                team.wins,
                team.losses,
                team.ties,
                team.rank,
                team.points_for,
                team.points_against,
                now
            ],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Teams in a league ordered by standing.
    pub fn get_teams_by_league(&self, league_id: i64) -> Result<Vec<FantasyTeam>> {
        let sql = format!(
            "SELECT {} FROM fantasy_teams WHERE league_id = ?1 ORDER BY rank, id",
            TEAM_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let teams = stmt
            .query_map(params![league_id], team_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(teams)
    }

    pub fn get_user_team(&self, league_id: i64) -> Result<Option<FantasyTeam>> {
        let sql = format!(
            "SELECT {} FROM fantasy_teams WHERE league_id = ?1 AND is_user_team = 1",
            TEAM_COLUMNS
        );
        Ok(self
            .conn
            .query_row(&sql, params![league_id], team_from_row)
            .optional()?)
    }

    pub fn get_team(&self, team_id: i64) -> Result<Option<FantasyTeam>> {
        let sql = format!("SELECT {} FROM fantasy_teams WHERE id = ?1", TEAM_COLUMNS);
        Ok(self
            .conn
            .query_row(&sql, params![team_id], team_from_row)
            .optional()?)
    }

    pub fn update_team(&mut self, team: &FantasyTeam) -> Result<()> {
        let now = unix_now()?;
        self.conn.execute(
            "UPDATE fantasy_teams
             SET team_name = ?1, manager_name = ?2, wins = ?3, losses = ?4, ties = ?5,
                 rank = ?6, points_for = ?7, points_against = ?8, updated_at = ?9
             WHERE id = ?10",
            params![
                team.team_name,
                team.manager_name,
                team.wins,
                team.losses,
                team.ties,
                team.rank,
                team.points_for,
                team.points_against,
                now,
                team.id
            ],
        )?;
        Ok(())
    }

    /// Every team in the league except `exclude_team_id`.
    pub fn get_other_teams(&self, league_id: i64, exclude_team_id: i64) -> Result<Vec<FantasyTeam>> {
        let sql = format!(
            "SELECT {} FROM fantasy_teams WHERE league_id = ?1 AND id != ?2 ORDER BY id",
            TEAM_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let teams = stmt
            .query_map(params![league_id, exclude_team_id], team_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(teams)
    }
}
