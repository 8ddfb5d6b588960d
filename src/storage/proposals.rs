//! Trade proposal rows

use super::{
    models::{TradeDetails, TradeProposalRecord},
    schema::FantasyDatabase,
};
use crate::core::cache::unix_now;
use anyhow::{Context, Result};
use rusqlite::params;

impl FantasyDatabase {
    /// Store a proposal. `id` and `suggested_at` on the input are ignored; the new id is returned.
    pub fn save_trade_proposal(&mut self, proposal: &TradeProposalRecord) -> Result<i64> {
        let now = unix_now()?;
        let details = serde_json::to_string(&TradeDetails {
            team_a_gives: proposal.team_a_gives.clone(),
            team_b_gives: proposal.team_b_gives.clone(),
        })?;
        self.conn
            .execute(
                "INSERT INTO trade_proposals
                 (league_id, team_a_id, team_b_id, trade_details, fairness_score,
                  team_a_value_change, team_b_value_change, team_a_benefits, team_b_benefits,
                  source, status, suggested_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
                params![
                    proposal.league_id,
                    proposal.team_a_id,
                    proposal.team_b_id,
                    details,
                    proposal.fairness_score,
                    proposal.team_a_value_change,
                    proposal.team_b_value_change,
                    proposal.team_a_benefits,
                    proposal.team_b_benefits,
                    proposal.source,
                    proposal.status,
                    now
                ],
            )
            .context("failed to save proposal")?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Proposals involving `team_id` on either side, excluding rejected ones, newest first.
    pub fn get_proposals_by_team(&self, team_id: i64) -> Result<Vec<TradeProposalRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, league_id, team_a_id, team_b_id, trade_details, fairness_score,
                    team_a_value_change, team_b_value_change, team_a_benefits, team_b_benefits,
                    source, status, suggested_at
             FROM trade_proposals
             WHERE (team_a_id = ?1 OR team_b_id = ?1) AND status != 'rejected'
             ORDER BY suggested_at DESC, id DESC",
        )?;
        let rows = stmt
            .query_map(params![team_id], |row| {
                let details: String = row.get(4)?;
                Ok((
                    details,
                    TradeProposalRecord {
                        id: row.get(0)?,
                        league_id: row.get(1)?,
                        team_a_id: row.get(2)?,
                        team_b_id: row.get(3)?,
                        team_a_gives: Vec::new(),
                        team_b_gives: Vec::new(),
                        fairness_score: row.get(5)?,
                        team_a_value_change: row.get(6)?,
                        team_b_value_change: row.get(7)?,
                        team_a_benefits: row.get(8)?,
                        team_b_benefits: row.get(9)?,
                        source: row.get(10)?,
                        status: row.get(11)?,
                        suggested_at: row.get(12)?,
                    },
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(details, mut proposal)| {
                let details: TradeDetails = serde_json::from_str(&details)
                    .with_context(|| format!("invalid trade details on proposal {}", proposal.id))?;
                proposal.team_a_gives = details.team_a_gives;
                proposal.team_b_gives = details.team_b_gives;
                Ok(proposal)
            })
            .collect()
    }

    pub fn update_proposal_status(&mut self, proposal_id: i64, status: &str) -> Result<bool> {
        let now = unix_now()?;
        let changed = self.conn.execute(
            "UPDATE trade_proposals SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status, now, proposal_id],
        )?;
        Ok(changed > 0)
    }
}
