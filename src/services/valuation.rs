//! Per-league player valuation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::stats::{mean, std_dev};
use crate::cli::types::Position;
use crate::error::YahooError;
use crate::storage::{Category, CategoryLine, FantasyDatabase, PlayerProjection, PlayerSeasonLine};

/// Season whose averages feed the valuation unless overridden.
pub const DEFAULT_STATS_SEASON: &str = "2024-25";

/// Fantasy-point weight per category, as stored on a league.
///
/// Categories missing from the stored JSON weigh zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    #[serde(rename = "PTS")]
    pub pts: f64,
    #[serde(rename = "REB")]
    pub reb: f64,
    #[serde(rename = "AST")]
    pub ast: f64,
    #[serde(rename = "STL")]
    pub stl: f64,
    #[serde(rename = "BLK")]
    pub blk: f64,
    #[serde(rename = "TO")]
    pub to: f64,
    #[serde(rename = "3PM")]
    pub tpm: f64,
    #[serde(rename = "FG%", skip_serializing_if = "is_zero")]
    pub fg_pct: f64,
    #[serde(rename = "FT%", skip_serializing_if = "is_zero")]
    pub ft_pct: f64,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl ScoringSettings {
    /// Weights given to newly imported leagues.
    pub fn league_default() -> Self {
        Self {
            pts: 1.0,
            reb: 1.2,
            ast: 1.5,
            stl: 3.0,
            blk: 3.0,
            to: -1.0,
            tpm: 1.0,
            fg_pct: 0.0,
            ft_pct: 0.0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| YahooError::InvalidScoringSettings(e.to_string()))
            .context("failed to parse scoring settings")
    }

    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Pts => self.pts,
            Category::Reb => self.reb,
            Category::Ast => self.ast,
            Category::Stl => self.stl,
            Category::Blk => self.blk,
            Category::To => self.to,
            Category::FgPct => self.fg_pct,
            Category::FtPct => self.ft_pct,
            Category::Tpm => self.tpm,
        }
    }

    /// Fantasy points per game over the counting categories.
    pub fn fpg(&self, line: &CategoryLine) -> f64 {
        Category::COUNTING
            .iter()
            .map(|&c| line.get(c) * self.weight(c))
            .sum()
    }
}

/// Value every player in the pool.
///
/// Ranks count strictly greater FPG, so tied players share a rank. Position
/// rank compares only players with the same primary position.
pub fn value_players(
    league_id: i64,
    players: &[PlayerSeasonLine],
    settings: &ScoringSettings,
) -> Vec<PlayerProjection> {
    let fpgs: Vec<f64> = players.iter().map(|p| settings.fpg(&p.line)).collect();
    let pool_mean = mean(&fpgs);
    let pool_sd = std_dev(&fpgs);

    players
        .iter()
        .zip(&fpgs)
        .map(|(player, &fpg)| {
            let overall_rank = 1 + fpgs.iter().filter(|&&other| other > fpg).count() as u32;
            let position_rank = 1 + players
                .iter()
                .zip(&fpgs)
                .filter(|&(other, &other_fpg)| {
                    other.primary_position == player.primary_position && other_fpg > fpg
                })
                .count() as u32;
            let scarcity_multiplier = player
                .primary_position
                .parse::<Position>()
                .map(|p| p.scarcity_multiplier())
                .unwrap_or(1.0);
            let z_score = if pool_sd > 0.0 {
                (fpg - pool_mean) / pool_sd
            } else {
                0.0
            };

            PlayerProjection {
                player_id: player.player_id,
                league_id,
                fpg,
                line: player.line,
                z_score,
                overall_rank,
                position_rank,
                scarcity_multiplier,
                position: player.primary_position.clone(),
            }
        })
        .collect()
}

pub struct ValuationService<'a> {
    db: &'a mut FantasyDatabase,
    season: String,
}

impl<'a> ValuationService<'a> {
    pub fn new(db: &'a mut FantasyDatabase) -> Self {
        Self {
            db,
            season: DEFAULT_STATS_SEASON.to_string(),
        }
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    /// Recompute and store projections for every active player in a league.
    pub fn calculate_all_player_values(&mut self, league_id: i64) -> Result<Vec<PlayerProjection>> {
        let league = self
            .db
            .get_league(league_id)
            .context("failed to get league")?
            .ok_or_else(|| anyhow!("league {} not found", league_id))?;
        let settings = ScoringSettings::from_json(&league.scoring_settings)?;

        let players = self
            .db
            .get_active_players_with_stats(&self.season)
            .context("failed to get players")?;
        let values = value_players(league_id, &players, &settings);

        self.db
            .replace_projections(league_id, &values)
            .context("failed to save projections")?;
        info!(league_id, players = values.len(), season = %self.season, "Player values calculated");
        Ok(values)
    }
}
