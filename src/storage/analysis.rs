//! Stored per-team category analysis

use super::{
    models::{Category, CategoryLine, TeamAnalysisRecord},
    schema::FantasyDatabase,
};
use crate::core::cache::unix_now;
use anyhow::Result;
use rusqlite::{params, OptionalExtension};

const NEED_POSITIONS: [&str; 5] = ["PG", "SG", "SF", "PF", "C"];

fn category_at(cats: &[Category], i: usize) -> Option<&'static str> {
    cats.get(i).map(|c| c.as_str())
}

impl FantasyDatabase {
    /// Insert or replace the analysis row for `analysis.team_id`.
    pub fn save_team_analysis(&mut self, analysis: &TeamAnalysisRecord) -> Result<()> {
        let now = unix_now()?;
        let needs = |pos: &str| analysis.position_needs.iter().any(|p| p == pos);
        let s = &analysis.scores;
        self.conn.execute(
            "INSERT OR REPLACE INTO team_analysis
             (team_id, pts_zscore, reb_zscore, ast_zscore, stl_zscore, blk_zscore, to_zscore,
              fg_pct_zscore, ft_pct_zscore, tpm_zscore,
              weakest_cat_1, weakest_cat_2, weakest_cat_3,
              strongest_cat_1, strongest_cat_2, strongest_cat_3,
              needs_pg, needs_sg, needs_sf, needs_pf, needs_c, analyzed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                     ?17, ?18, ?19, ?20, ?21, ?22)",
            params![
                analysis.team_id,
                s.pts,
                s.reb,
                s.ast,
                s.stl,
                s.blk,
                s.to,
                s.fg_pct,
                s.ft_pct,
                s.tpm,
                category_at(&analysis.weakest, 0),
                category_at(&analysis.weakest, 1),
                category_at(&analysis.weakest, 2),
                category_at(&analysis.strongest, 0),
                category_at(&analysis.strongest, 1),
                category_at(&analysis.strongest, 2),
                needs("PG"),
                needs("SG"),
                needs("SF"),
                needs("PF"),
                needs("C"),
                now
            ],
        )?;
        Ok(())
    }

    pub fn get_team_analysis(&self, team_id: i64) -> Result<Option<TeamAnalysisRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT pts_zscore, reb_zscore, ast_zscore, stl_zscore, blk_zscore, to_zscore,
                        fg_pct_zscore, ft_pct_zscore, tpm_zscore,
                        weakest_cat_1, weakest_cat_2, weakest_cat_3,
                        strongest_cat_1, strongest_cat_2, strongest_cat_3,
                        needs_pg, needs_sg, needs_sf, needs_pf, needs_c
                 FROM team_analysis WHERE team_id = ?1",
                params![team_id],
                |row| {
                    let scores = CategoryLine {
                        pts: row.get(0)?,
                        reb: row.get(1)?,
                        ast: row.get(2)?,
                        stl: row.get(3)?,
                        blk: row.get(4)?,
                        to: row.get(5)?,
                        fg_pct: row.get(6)?,
                        ft_pct: row.get(7)?,
                        tpm: row.get(8)?,
                    };
                    let weakest: Vec<Option<String>> =
                        vec![row.get(9)?, row.get(10)?, row.get(11)?];
                    let strongest: Vec<Option<String>> =
                        vec![row.get(12)?, row.get(13)?, row.get(14)?];
                    let mut needs = Vec::new();
                    for (i, pos) in NEED_POSITIONS.iter().enumerate() {
                        if row.get::<_, bool>(15 + i)? {
                            needs.push(pos.to_string());
                        }
                    }
                    Ok((scores, weakest, strongest, needs))
                },
            )
            .optional()?;

        Ok(row.map(|(scores, weakest, strongest, position_needs)| {
            let parse = |names: Vec<Option<String>>| -> Vec<Category> {
                names
                    .into_iter()
                    .flatten()
                    .filter_map(|n| n.parse().ok())
                    .collect()
            };
            TeamAnalysisRecord {
                team_id,
                scores,
                weakest: parse(weakest),
                strongest: parse(strongest),
                position_needs,
            }
        }))
    }
}
