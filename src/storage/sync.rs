//! Sync history

use super::schema::FantasyDatabase;
use crate::core::cache::unix_now;
use anyhow::Result;
use rusqlite::params;

impl FantasyDatabase {
    pub fn record_sync(
        &mut self,
        league_id: i64,
        sync_type: &str,
        status: &str,
        items_synced: usize,
        error_message: Option<&str>,
    ) -> Result<i64> {
        let now = unix_now()?;
        self.conn.execute(
            "INSERT INTO sync_history (league_id, sync_type, sync_status, items_synced, error_message, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![league_id, sync_type, status, items_synced as i64, error_message, now],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Number of sync runs recorded for a league.
    pub fn sync_count(&self, league_id: i64) -> Result<u32> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM sync_history WHERE league_id = ?1",
            params![league_id],
            |row| row.get(0),
        )?)
    }
}
