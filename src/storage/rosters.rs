//! Roster entries

use super::{models::RosterEntry, schema::FantasyDatabase};
use crate::core::cache::unix_now;
use anyhow::Result;
use rusqlite::params;

impl FantasyDatabase {
    pub fn create_roster_entry(&mut self, entry: &RosterEntry) -> Result<i64> {
        let now = unix_now()?;
        self.conn.execute(
            "INSERT INTO fantasy_rosters
             (team_id, player_id, roster_position, selected_position, is_starting, added_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                entry.team_id,
                entry.player_id,
                entry.roster_position,
                entry.selected_position,
                entry.is_starting,
                now
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Starters first, then by roster position.
    pub fn get_roster_by_team(&self, team_id: i64) -> Result<Vec<RosterEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, team_id, player_id, roster_position, selected_position, is_starting
             FROM fantasy_rosters
             WHERE team_id = ?1
             ORDER BY is_starting DESC, roster_position, id",
        )?;
        let entries = stmt
            .query_map(params![team_id], |row| {
                Ok(RosterEntry {
                    id: row.get(0)?,
                    team_id: row.get(1)?,
                    player_id: row.get(2)?,
                    roster_position: row.get(3)?,
                    selected_position: row.get(4)?,
                    is_starting: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Swap a team's roster for `entries` in one transaction. Returns the number inserted.
    pub fn replace_roster(&mut self, team_id: i64, entries: &[RosterEntry]) -> Result<usize> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM fantasy_rosters WHERE team_id = ?1", params![team_id])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO fantasy_rosters
                 (team_id, player_id, roster_position, selected_position, is_starting, added_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            )?;
            for entry in entries {
                stmt.execute(params![
                    team_id,
                    entry.player_id,
                    entry.roster_position,
                    entry.selected_position,
                    entry.is_starting,
                    now
                ])?;
            }
        }
        tx.commit()?;
        Ok(entries.len())
    }

    pub fn delete_roster_by_team(&mut self, team_id: i64) -> Result<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM fantasy_rosters WHERE team_id = ?1", params![team_id])?)
    }
}
