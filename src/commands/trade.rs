//! `trade` subcommands.

use anyhow::Result;

use super::common::{open_database, print_json};
use crate::cli::TradeCmd;
use crate::services::{
    EvaluationService, TradeEvaluation, TradeImpact, TradePlayer, TradeProposal, TradeService,
    TradeSuggestion,
};
use crate::storage::TradeProposalRecord;

pub fn format_impact(label: &str, impact: &TradeImpact) -> String {
    let mut lines = vec![format!(
        "{} (team {}): value {:+.2}, net benefit {:+.2}, {}",
        label, impact.team_id, impact.value_change, impact.net_benefit, impact.position_impact
    )];
    for c in &impact.improvements {
        lines.push(format!("  + {} {:+.2} ({:+.1}%)", c.category, c.change, c.percent_change));
    }
    for c in &impact.declines {
        lines.push(format!("  - {} {:+.2} ({:+.1}%)", c.category, c.change, c.percent_change));
    }
    lines.join("\n")
}

fn print_evaluation(e: &TradeEvaluation) {
    let verdict = if e.is_fair { "fair" } else { "unfair" };
    println!("Fairness: {:.1} ({})", e.fairness_score, verdict);
    println!("{}", format_impact("Team A", &e.team_a_impact));
    println!("{}", format_impact("Team B", &e.team_b_impact));
    println!("{}", e.recommendation);
}

pub fn format_suggestion(s: &TradeSuggestion) -> String {
    let names = |players: &[TradePlayer]| {
        players
            .iter()
            .map(|p| format!("{} ({}, {:.1})", p.player_name, p.position, p.fpg))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "[{:.1}] {} gives {} to {} for {}\n  {}: {}\n  {}: {}",
        s.fairness_score,
        s.team_a_name,
        names(&s.team_a_gives),
        s.team_b_name,
        names(&s.team_b_gives),
        s.team_a_name,
        s.team_a_benefit,
        s.team_b_name,
        s.team_b_benefit
    )
}

pub fn format_proposal(p: &TradeProposalRecord) -> String {
    format!(
        "#{} [{}] team {} {:?} <-> team {} {:?}  fairness {:.1}  ({})",
        p.id, p.status, p.team_a_id, p.team_a_gives, p.team_b_id, p.team_b_gives, p.fairness_score, p.source
    )
}

fn total_fpg(players: &[TradePlayer]) -> f64 {
    players.iter().map(|p| p.fpg).sum()
}

pub fn suggestion_proposal(s: &TradeSuggestion) -> TradeProposal {
    let a_out = total_fpg(&s.team_a_gives);
    let b_out = total_fpg(&s.team_b_gives);
    TradeProposal {
        league_id: s.league_id,
        team_a_id: s.team_a_id,
        team_b_id: s.team_b_id,
        team_a_gives: s.team_a_gives.iter().map(|p| p.player_id).collect(),
        team_b_gives: s.team_b_gives.iter().map(|p| p.player_id).collect(),
        fairness_score: s.fairness_score,
        team_a_value_change: b_out - a_out,
        team_b_value_change: a_out - b_out,
        team_a_benefits: s.team_a_benefit.clone(),
        team_b_benefits: s.team_b_benefit.clone(),
        source: "suggested".to_string(),
        status: "pending".to_string(),
    }
}

/// Handle a `trade` subcommand.
pub fn handle_trade(cmd: TradeCmd) -> Result<()> {
    let mut db = open_database()?;

    match cmd {
        TradeCmd::Evaluate {
            league_id,
            team_a,
            a_gives,
            team_b,
            b_gives,
            save,
            json,
        } => {
            let evaluation =
                EvaluationService::new(&db).evaluate_trade(league_id, team_a, &a_gives, team_b, &b_gives)?;
            let saved = if save {
                let proposal =
                    TradeProposal::from_evaluation(league_id, &a_gives, &b_gives, &evaluation, "manual");
                Some(TradeService::new(&mut db).save_proposal(&proposal)?)
            } else {
                None
            };

            if json {
                return print_json(&evaluation);
            }
            print_evaluation(&evaluation);
            if let Some(id) = saved {
                println!("✓ Saved as proposal #{}", id);
            }
        }

        TradeCmd::Suggest {
            team_id,
            limit,
            save,
            json,
        } => {
            let mut service = TradeService::new(&mut db);
            let suggestions = service.generate_suggestions(team_id, limit)?;
            if save {
                for s in &suggestions {
                    service.save_proposal(&suggestion_proposal(s))?;
                }
            }

            if json {
                return print_json(&suggestions);
            }
            if suggestions.is_empty() {
                println!("No fair trades found for team {}", team_id);
            }
            for s in &suggestions {
                println!("{}", format_suggestion(s));
            }
        }

        TradeCmd::Proposals { team_id, json } => {
            let proposals = TradeService::new(&mut db).get_proposals_by_team(team_id)?;
            if json {
                return print_json(&proposals);
            }
            if proposals.is_empty() {
                println!("No open proposals for team {}", team_id);
            }
            for p in &proposals {
                println!("{}", format_proposal(p));
            }
        }
    }

    Ok(())
}
