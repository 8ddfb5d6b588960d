//! League-relative category strengths and positional needs per team.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::info;

use super::stats::z_score;
use crate::cli::types::Position;
use crate::storage::{Category, CategoryLine, FantasyDatabase, TeamAnalysisRecord};

/// Starters a team should carry at each primary position.
pub const MIN_STARTERS_PER_POSITION: u32 = 2;

/// Z-score of each category against the league. Turnovers are negated so a
/// higher score is always better.
pub fn category_z_scores(totals: &CategoryLine, league: &[CategoryLine]) -> CategoryLine {
    let mut scores = CategoryLine::default();
    for category in Category::ALL {
        let population: Vec<f64> = league.iter().map(|t| t.get(category)).collect();
        let z = z_score(totals.get(category), &population);
        scores.set(category, if category.is_inverted() { -z } else { z });
    }
    scores
}

/// Three weakest categories (weakest first) and three strongest (strongest first).
pub fn rank_categories(scores: &CategoryLine) -> (Vec<Category>, Vec<Category>) {
    let mut ordered: Vec<Category> = Category::ALL.to_vec();
    ordered.sort_by(|a, b| scores.get(*a).total_cmp(&scores.get(*b)));

    let weakest = ordered.iter().take(3).copied().collect();
    let strongest = ordered.iter().rev().take(3).copied().collect();
    (weakest, strongest)
}

pub fn position_needs(starters: &BTreeMap<String, u32>) -> Vec<String> {
    Position::PRIMARY
        .iter()
        .map(|p| p.to_string())
        .filter(|p| starters.get(p).copied().unwrap_or(0) < MIN_STARTERS_PER_POSITION)
        .collect()
}

pub struct AnalysisService<'a> {
    db: &'a mut FantasyDatabase,
}

impl<'a> AnalysisService<'a> {
    pub fn new(db: &'a mut FantasyDatabase) -> Self {
        Self { db }
    }

    /// Analyze and store every team in a league.
    pub fn analyze_all_teams(&mut self, league_id: i64) -> Result<Vec<TeamAnalysisRecord>> {
        let teams = self
            .db
            .get_teams_by_league(league_id)
            .context("failed to get teams")?;

        let mut totals = Vec::with_capacity(teams.len());
        for team in &teams {
            let line = self
                .db
                .team_category_totals(league_id, team.id)
                .with_context(|| format!("failed to calculate totals for team {}", team.id))?;
            totals.push(line);
        }

        let mut analyses = Vec::with_capacity(teams.len());
        for (team, line) in teams.iter().zip(&totals) {
            let scores = category_z_scores(line, &totals);
            let (weakest, strongest) = rank_categories(&scores);
            let starters = self
                .db
                .starting_position_counts(team.id)
                .context("failed to analyze position needs")?;

            let analysis = TeamAnalysisRecord {
                team_id: team.id,
                scores,
                weakest,
                strongest,
                position_needs: position_needs(&starters),
            };
            self.db
                .save_team_analysis(&analysis)
                .with_context(|| format!("failed to save analysis for team {}", team.id))?;
            analyses.push(analysis);
        }

        info!(league_id, teams = analyses.len(), "Team analysis complete");
        Ok(analyses)
    }
}
