//! Player projections and the team-level aggregates built on them

use super::{
    models::{CategoryLine, PlayerProjection, RosterPlayer},
    players::UNKNOWN_POSITION,
    schema::FantasyDatabase,
};
use crate::core::cache::unix_now;
use anyhow::Result;
use rusqlite::{params, params_from_iter, types::Value};
use std::collections::BTreeMap;

impl FantasyDatabase {
    /// Replace every projection stored for `league_id` in one transaction.
    pub fn replace_projections(&mut self, league_id: i64, values: &[PlayerProjection]) -> Result<()> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM player_projections WHERE league_id = ?1",
            params![league_id],
        )?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO player_projections
                 (player_id, league_id, fpg, proj_pts, proj_reb, proj_ast, proj_stl, proj_blk,
                  proj_to, proj_fg_pct, proj_ft_pct, proj_3pm, z_score, overall_rank,
                  position_rank, scarcity_multiplier, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
            )?;
            for p in values {
                stmt.execute(params![
                    p.player_id,
                    league_id,
                    p.fpg,
                    p.line.pts,
                    p.line.reb,
                    p.line.ast,
                    p.line.stl,
                    p.line.blk,
                    p.line.to,
                    p.line.fg_pct,
                    p.line.ft_pct,
                    p.line.tpm,
                    p.z_score,
                    p.overall_rank,
                    p.position_rank,
                    p.scarcity_multiplier,
                    now
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Projections for the given players in a league. Unknown ids are skipped.
    pub fn get_projections(&self, league_id: i64, player_ids: &[i64]) -> Result<Vec<PlayerProjection>> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; player_ids.len()].join(",");
        let sql = format!(
            "SELECT pp.player_id, pp.league_id, pp.fpg, pp.proj_pts, pp.proj_reb, pp.proj_ast,
                    pp.proj_stl, pp.proj_blk, pp.proj_to, pp.proj_fg_pct, pp.proj_ft_pct,
                    pp.proj_3pm, pp.z_score, pp.overall_rank, pp.position_rank,
                    pp.scarcity_multiplier, COALESCE(p.primary_position, '{}')
             FROM player_projections pp
             JOIN players p ON pp.player_id = p.id
             WHERE pp.league_id = ? AND pp.player_id IN ({})
             ORDER BY pp.player_id",
            UNKNOWN_POSITION, placeholders
        );

        let args: Vec<Value> = std::iter::once(Value::Integer(league_id))
            .chain(player_ids.iter().map(|id| Value::Integer(*id)))
            .collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let projections = stmt
            .query_map(params_from_iter(args), |row| {
                Ok(PlayerProjection {
                    player_id: row.get(0)?,
                    league_id: row.get(1)?,
                    fpg: row.get(2)?,
                    line: CategoryLine {
                        pts: row.get(3)?,
                        reb: row.get(4)?,
                        ast: row.get(5)?,
                        stl: row.get(6)?,
                        blk: row.get(7)?,
                        to: row.get(8)?,
                        fg_pct: row.get(9)?,
                        ft_pct: row.get(10)?,
                        tpm: row.get(11)?,
                    },
                    z_score: row.get(12)?,
                    overall_rank: row.get(13)?,
                    position_rank: row.get(14)?,
                    scarcity_multiplier: row.get(15)?,
                    position: row.get(16)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projections)
    }

    /// Category totals over a team's starters: counting stats summed,
    /// FG% and FT% averaged. A team without projected starters is all zeros.
    pub fn team_category_totals(&self, league_id: i64, team_id: i64) -> Result<CategoryLine> {
        let totals = self.conn.query_row(
            "SELECT COALESCE(SUM(pp.proj_pts), 0), COALESCE(SUM(pp.proj_reb), 0),
                    COALESCE(SUM(pp.proj_ast), 0), COALESCE(SUM(pp.proj_stl), 0),
                    COALESCE(SUM(pp.proj_blk), 0), COALESCE(SUM(pp.proj_to), 0),
                    COALESCE(AVG(pp.proj_fg_pct), 0), COALESCE(AVG(pp.proj_ft_pct), 0),
                    COALESCE(SUM(pp.proj_3pm), 0)
             FROM fantasy_rosters fr
             JOIN player_projections pp ON fr.player_id = pp.player_id AND pp.league_id = ?1
             WHERE fr.team_id = ?2 AND fr.is_starting = 1",
            params![league_id, team_id],
            |row| {
                Ok(CategoryLine {
                    pts: row.get(0)?,
                    reb: row.get(1)?,
                    ast: row.get(2)?,
                    stl: row.get(3)?,
                    blk: row.get(4)?,
                    to: row.get(5)?,
                    fg_pct: row.get(6)?,
                    ft_pct: row.get(7)?,
                    tpm: row.get(8)?,
                })
            },
        )?;
        Ok(totals)
    }

    /// A team's starters joined with their projections in `league_id`.
    pub fn get_roster_with_projections(&self, league_id: i64, team_id: i64) -> Result<Vec<RosterPlayer>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.full_name, COALESCE(p.primary_position, ?3), pp.fpg, fr.is_starting
             FROM fantasy_rosters fr
             JOIN players p ON fr.player_id = p.id
             JOIN player_projections pp ON p.id = pp.player_id AND pp.league_id = ?1
             WHERE fr.team_id = ?2 AND fr.is_starting = 1
             ORDER BY pp.fpg DESC, p.id",
        )?;
        let players = stmt
            .query_map(params![league_id, team_id, UNKNOWN_POSITION], |row| {
                Ok(RosterPlayer {
                    player_id: row.get(0)?,
                    player_name: row.get(1)?,
                    position: row.get(2)?,
                    fpg: row.get(3)?,
                    is_starting: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(players)
    }

    /// Number of starters per primary position.
    pub fn starting_position_counts(&self, team_id: i64) -> Result<BTreeMap<String, u32>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.primary_position, COUNT(*)
             FROM fantasy_rosters fr
             JOIN players p ON fr.player_id = p.id
             WHERE fr.team_id = ?1 AND fr.is_starting = 1 AND p.primary_position IS NOT NULL
             GROUP BY p.primary_position",
        )?;
        let counts = stmt
            .query_map(params![team_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<BTreeMap<String, u32>>>()?;
        Ok(counts)
    }
}
