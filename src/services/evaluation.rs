//! Trade evaluation: fairness and per-team category impact.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::storage::{Category, CategoryLine, FantasyDatabase, PlayerProjection};

/// Minimum fairness score for a trade to count as fair.
pub const FAIRNESS_THRESHOLD: f64 = 75.0;

pub const NEUTRAL_POSITION_IMPACT: &str = "Neutral position impact";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChange {
    pub category: Category,
    pub change: f64,
    /// Change relative to the pre-trade total. Zero when that total is zero.
    pub percent_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeImpact {
    pub team_id: i64,
    pub value_change: f64,
    pub improvements: Vec<CategoryChange>,
    pub declines: Vec<CategoryChange>,
    pub position_impact: String,
    pub net_benefit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeEvaluation {
    pub team_a_impact: TradeImpact,
    pub team_b_impact: TradeImpact,
    pub fairness_score: f64,
    pub is_fair: bool,
    pub recommendation: String,
}

fn sum_fpg(players: &[PlayerProjection]) -> f64 {
    players.iter().map(|p| p.fpg).sum()
}

/// 100 for equal sides, falling with the value gap relative to the average.
pub fn fairness_score(a_value: f64, b_value: f64) -> f64 {
    if a_value == 0.0 && b_value == 0.0 {
        return 100.0;
    }
    let avg = (a_value + b_value) / 2.0;
    if avg == 0.0 {
        return 0.0;
    }
    (100.0 - (a_value - b_value).abs() / avg * 100.0).clamp(0.0, 100.0)
}

/// Team totals after `players_out` leave and `players_in` arrive.
/// Percentages are left untouched.
pub fn simulate_trade(
    current: CategoryLine,
    players_in: &[PlayerProjection],
    players_out: &[PlayerProjection],
) -> CategoryLine {
    let mut result = current;
    for category in Category::COUNTING {
        let out: f64 = players_out.iter().map(|p| p.line.get(category)).sum();
        let incoming: f64 = players_in.iter().map(|p| p.line.get(category)).sum();
        result.set(category, result.get(category) - out + incoming);
    }
    result
}

pub fn category_changes(before: &CategoryLine, after: &CategoryLine) -> Vec<CategoryChange> {
    Category::COUNTING
        .iter()
        .map(|&category| {
            let was = before.get(category);
            let change = after.get(category) - was;
            let percent_change = if was != 0.0 { change / was * 100.0 } else { 0.0 };
            CategoryChange {
                category,
                change,
                percent_change,
            }
        })
        .collect()
}

/// Describe the first position the trade leaves short, else the first it adds to.
pub fn position_impact(players_in: &[PlayerProjection], players_out: &[PlayerProjection]) -> String {
    let mut incoming: BTreeMap<&str, u32> = BTreeMap::new();
    let mut outgoing: BTreeMap<&str, u32> = BTreeMap::new();
    for p in players_in {
        *incoming.entry(p.position.as_str()).or_default() += 1;
    }
    for p in players_out {
        *outgoing.entry(p.position.as_str()).or_default() += 1;
    }

    for (pos, &count_out) in &outgoing {
        if incoming.get(pos).copied().unwrap_or(0) < count_out {
            return format!("Creates {} gap", pos);
        }
    }
    for (pos, &count_in) in &incoming {
        if count_in > outgoing.get(pos).copied().unwrap_or(0) {
            return format!("Fills {} need", pos);
        }
    }
    NEUTRAL_POSITION_IMPACT.to_string()
}

pub fn net_benefit(value_change: f64, improvements: &[CategoryChange], declines: &[CategoryChange]) -> f64 {
    let gained: f64 = improvements.iter().map(|c| c.change.abs() * 0.5).sum();
    let lost: f64 = declines.iter().map(|c| c.change.abs() * 0.5).sum();
    value_change + gained - lost
}

pub fn recommendation(is_fair: bool, a_net: f64, b_net: f64) -> &'static str {
    if !is_fair {
        "Trade is imbalanced. Value difference too large."
    } else if a_net > 2.0 && b_net > 2.0 {
        "Strong mutual benefit. Both teams improve."
    } else if a_net > 0.0 && b_net > 0.0 {
        "Fair trade with mutual benefit."
    } else if a_net < 0.0 || b_net < 0.0 {
        "One team may not benefit sufficiently."
    } else {
        "Even trade with minimal impact."
    }
}

/// Split changes into improvements and declines. Turnovers improve by going down.
fn split_changes(changes: Vec<CategoryChange>) -> (Vec<CategoryChange>, Vec<CategoryChange>) {
    let mut improvements = Vec::new();
    let mut declines = Vec::new();
    for change in changes {
        let signed = if change.category.is_inverted() {
            -change.change
        } else {
            change.change
        };
        if signed > 0.0 {
            improvements.push(change);
        } else if signed < 0.0 {
            declines.push(change);
        }
    }
    (improvements, declines)
}

pub struct EvaluationService<'a> {
    db: &'a FantasyDatabase,
}

impl<'a> EvaluationService<'a> {
    pub fn new(db: &'a FantasyDatabase) -> Self {
        Self { db }
    }

    /// Evaluate team A sending `team_a_gives` to team B for `team_b_gives`.
    pub fn evaluate_trade(
        &self,
        league_id: i64,
        team_a_id: i64,
        team_a_gives: &[i64],
        team_b_id: i64,
        team_b_gives: &[i64],
    ) -> Result<TradeEvaluation> {
        let a_players = self
            .db
            .get_projections(league_id, team_a_gives)
            .context("failed to get team A projections")?;
        let b_players = self
            .db
            .get_projections(league_id, team_b_gives)
            .context("failed to get team B projections")?;

        let fairness_score = fairness_score(sum_fpg(&a_players), sum_fpg(&b_players));
        let team_a_impact = self
            .team_impact(league_id, team_a_id, &b_players, &a_players)
            .context("failed to calculate team A impact")?;
        let team_b_impact = self
            .team_impact(league_id, team_b_id, &a_players, &b_players)
            .context("failed to calculate team B impact")?;

        let is_fair = fairness_score >= FAIRNESS_THRESHOLD;
        let recommendation =
            recommendation(is_fair, team_a_impact.net_benefit, team_b_impact.net_benefit).to_string();

        Ok(TradeEvaluation {
            team_a_impact,
            team_b_impact,
            fairness_score,
            is_fair,
            recommendation,
        })
    }

    fn team_impact(
        &self,
        league_id: i64,
        team_id: i64,
        players_in: &[PlayerProjection],
        players_out: &[PlayerProjection],
    ) -> Result<TradeImpact> {
        let current = self.db.team_category_totals(league_id, team_id)?;
        let after = simulate_trade(current, players_in, players_out);
        let (improvements, declines) = split_changes(category_changes(&current, &after));

        let value_change = sum_fpg(players_in) - sum_fpg(players_out);
        let net_benefit = net_benefit(value_change, &improvements, &declines);

        Ok(TradeImpact {
            team_id,
            value_change,
            improvements,
            declines,
            position_impact: position_impact(players_in, players_out),
            net_benefit,
        })
    }
}
