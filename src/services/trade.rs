//! Trade suggestions built on team analysis and trade evaluation.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use super::evaluation::{EvaluationService, TradeEvaluation, TradeImpact, NEUTRAL_POSITION_IMPACT};
use super::stats::percent_difference;
use crate::error::YahooError;
use crate::storage::{FantasyDatabase, RosterPlayer, TeamAnalysisRecord, TradeProposalRecord};

/// Matched weaknesses and strengths a partner team needs before we look at players.
pub const MIN_COMPLEMENTARY_SCORE: usize = 2;

/// Largest FPG gap, in percent of the pair's average, for a 1-for-1 swap.
pub const MAX_VALUE_GAP_PCT: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradePlayer {
    pub player_id: i64,
    pub player_name: String,
    pub position: String,
    pub fpg: f64,
}

impl From<&RosterPlayer> for TradePlayer {
    fn from(p: &RosterPlayer) -> Self {
        Self {
            player_id: p.player_id,
            player_name: p.player_name.clone(),
            position: p.position.clone(),
            fpg: p.fpg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeSuggestion {
    pub league_id: i64,
    pub team_a_id: i64,
    pub team_a_name: String,
    pub team_a_gives: Vec<TradePlayer>,
    pub team_b_id: i64,
    pub team_b_name: String,
    pub team_b_gives: Vec<TradePlayer>,
    pub fairness_score: f64,
    pub team_a_benefit: String,
    pub team_b_benefit: String,
    pub recommendation: String,
}

/// A trade to persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeProposal {
    pub league_id: i64,
    pub team_a_id: i64,
    pub team_b_id: i64,
    pub team_a_gives: Vec<i64>,
    pub team_b_gives: Vec<i64>,
    pub fairness_score: f64,
    pub team_a_value_change: f64,
    pub team_b_value_change: f64,
    pub team_a_benefits: String,
    pub team_b_benefits: String,
    pub source: String,
    pub status: String,
}

impl TradeProposal {
    /// A pending proposal from an evaluated trade.
    pub fn from_evaluation(
        league_id: i64,
        team_a_gives: &[i64],
        team_b_gives: &[i64],
        evaluation: &TradeEvaluation,
        source: &str,
    ) -> Self {
        Self {
            league_id,
            team_a_id: evaluation.team_a_impact.team_id,
            team_b_id: evaluation.team_b_impact.team_id,
            team_a_gives: team_a_gives.to_vec(),
            team_b_gives: team_b_gives.to_vec(),
            fairness_score: evaluation.fairness_score,
            team_a_value_change: evaluation.team_a_impact.value_change,
            team_b_value_change: evaluation.team_b_impact.value_change,
            team_a_benefits: format_benefit(&evaluation.team_a_impact),
            team_b_benefits: format_benefit(&evaluation.team_b_impact),
            source: source.to_string(),
            status: "pending".to_string(),
        }
    }

    fn to_record(&self) -> TradeProposalRecord {
        TradeProposalRecord {
            id: 0,
            league_id: self.league_id,
            team_a_id: self.team_a_id,
            team_b_id: self.team_b_id,
            team_a_gives: self.team_a_gives.clone(),
            team_b_gives: self.team_b_gives.clone(),
            fairness_score: self.fairness_score,
            team_a_value_change: self.team_a_value_change,
            team_b_value_change: self.team_b_value_change,
            team_a_benefits: self.team_a_benefits.clone(),
            team_b_benefits: self.team_b_benefits.clone(),
            source: self.source.clone(),
            status: self.status.clone(),
            suggested_at: 0,
        }
    }
}

/// How many of B's weak categories A is strong in, plus the reverse.
pub fn complementary_score(a: &TeamAnalysisRecord, b: &TeamAnalysisRecord) -> usize {
    let a_weak: HashSet<_> = a.weakest.iter().collect();
    let a_strong: HashSet<_> = a.strongest.iter().collect();
    let b_weak_hits = b.weakest.iter().filter(|c| a_strong.contains(c)).count();
    let b_strong_hits = b.strongest.iter().filter(|c| a_weak.contains(c)).count();
    b_weak_hits + b_strong_hits
}

/// Two players are swappable when their FPG is within 15% of the pair's average.
pub fn is_good_fit(a: &RosterPlayer, b: &RosterPlayer) -> bool {
    if (a.fpg + b.fpg) / 2.0 == 0.0 {
        return false;
    }
    percent_difference(a.fpg, b.fpg).abs() <= MAX_VALUE_GAP_PCT
}

/// e.g. `Improves: REB (+2.0), BLK (+0.8) | Fills C need`
pub fn format_benefit(impact: &TradeImpact) -> String {
    if impact.improvements.is_empty() {
        return "No significant benefit".to_string();
    }

    let improved: Vec<String> = impact
        .improvements
        .iter()
        .take(3)
        .map(|c| format!("{} ({:+.1})", c.category, c.change))
        .collect();
    let mut text = format!("Improves: {}", improved.join(", "));

    if !impact.position_impact.is_empty() && impact.position_impact != NEUTRAL_POSITION_IMPACT {
        text.push_str(" | ");
        text.push_str(&impact.position_impact);
    }
    text
}

pub struct TradeService<'a> {
    db: &'a mut FantasyDatabase,
}

impl<'a> TradeService<'a> {
    pub fn new(db: &'a mut FantasyDatabase) -> Self {
        Self { db }
    }

    /// Up to `limit` fair 1-for-1 trades for `team_id`, fairest first.
    ///
    /// Requires a stored analysis for the team. Partner teams without one are skipped.
    pub fn generate_suggestions(&self, team_id: i64, limit: usize) -> Result<Vec<TradeSuggestion>> {
        let team = self
            .db
            .get_team(team_id)?
            .ok_or(YahooError::TeamNotFound { team_id })?;
        let own_analysis = self
            .db
            .get_team_analysis(team_id)
            .context("failed to get user team analysis")?
            .ok_or_else(|| anyhow!("team {} has not been analyzed yet", team_id))?;
        let others = self
            .db
            .get_other_teams(team.league_id, team_id)
            .context("failed to get other teams")?;
        let own_roster = self.db.get_roster_with_projections(team.league_id, team_id)?;
        let evaluator = EvaluationService::new(&*self.db);

        let mut suggestions = Vec::new();
        for other in &others {
            let Some(other_analysis) = self.db.get_team_analysis(other.id)? else {
                debug!(team_id = other.id, "no analysis stored, skipping");
                continue;
            };
            let score = complementary_score(&own_analysis, &other_analysis);
            if score < MIN_COMPLEMENTARY_SCORE {
                continue;
            }

            let other_roster = self.db.get_roster_with_projections(team.league_id, other.id)?;
            for mine in &own_roster {
                for theirs in &other_roster {
                    if !is_good_fit(mine, theirs) {
                        continue;
                    }
                    let evaluation = evaluator.evaluate_trade(
                        team.league_id,
                        team_id,
                        &[mine.player_id],
                        other.id,
                        &[theirs.player_id],
                    )?;
                    if !evaluation.is_fair {
                        continue;
                    }

                    suggestions.push(TradeSuggestion {
                        league_id: team.league_id,
                        team_a_id: team_id,
                        team_a_name: team.team_name.clone(),
                        team_a_gives: vec![TradePlayer::from(mine)],
                        team_b_id: other.id,
                        team_b_name: other.team_name.clone(),
                        team_b_gives: vec![TradePlayer::from(theirs)],
                        fairness_score: evaluation.fairness_score,
                        team_a_benefit: format_benefit(&evaluation.team_a_impact),
                        team_b_benefit: format_benefit(&evaluation.team_b_impact),
                        recommendation: evaluation.recommendation,
                    });
                }
            }
        }

        suggestions.sort_by(|a, b| b.fairness_score.total_cmp(&a.fairness_score));
        suggestions.truncate(limit);
        Ok(suggestions)
    }

    pub fn save_proposal(&mut self, proposal: &TradeProposal) -> Result<i64> {
        self.db.save_trade_proposal(&proposal.to_record())
    }

    pub fn get_proposals_by_team(&self, team_id: i64) -> Result<Vec<TradeProposalRecord>> {
        self.db.get_proposals_by_team(team_id)
    }
}
