use super::common::join_or_dash;
use super::get::{format_league, format_matchup, format_roster_slot, format_team, format_transaction};
use super::league::{format_analysis, top_projections};
use super::trade::{format_proposal, format_suggestion, suggestion_proposal};
use crate::cli::types::{GameCode, Season};
use crate::cli::GameArgs;
use crate::services::{TradePlayer, TradeSuggestion};
use crate::storage::{Category, CategoryLine, PlayerProjection, TeamAnalysisRecord, TradeProposalRecord};
use crate::yahoo::types::*;

fn projection(player_id: i64, overall_rank: u32) -> PlayerProjection {
    PlayerProjection {
        player_id,
        league_id: 1,
        fpg: 0.0,
        line: CategoryLine::default(),
        z_score: 0.0,
        overall_rank,
        position_rank: 1,
        scarcity_multiplier: 1.0,
        position: "PG".to_string(),
    }
}

fn trade_player(player_id: i64, name: &str, fpg: f64) -> TradePlayer {
    TradePlayer {
        player_id,
        player_name: name.to_string(),
        position: "PG".to_string(),
        fpg,
    }
}

#[test]
fn test_join_or_dash() {
    let empty: [String; 0] = [];
    assert_eq!(join_or_dash(&empty), "-");
    assert_eq!(join_or_dash(&["PG", "C"]), "PG, C");
    assert_eq!(join_or_dash(&[Category::Reb, Category::FgPct]), "REB, FG%");
}

#[test]
fn test_game_args_resolve() {
    let explicit = GameArgs {
        game: GameCode::Nba,
        season: Season::new(2024),
        game_key: Some("999".to_string()),
    };
    assert_eq!(explicit.resolve().unwrap(), "999");

    let lookup = GameArgs {
        game: GameCode::Nba,
        season: Season::new(2024),
        game_key: None,
    };
    assert_eq!(lookup.resolve().unwrap(), "454");
}

#[test]
fn test_format_league() {
    let league = League {
        yahoo_league_id: "12345".to_string(),
        yahoo_game_key: "454".to_string(),
        league_name: "Hoops".to_string(),
        season_year: 2024,
        scoring_type: "head".to_string(),
        num_teams: 12,
        current_week: 5,
    };
    assert_eq!(format_league(&league), "454.l.12345\tHoops\t2024\t12 teams\tweek 5");
}

#[test]
fn test_format_team() {
    let team = Team {
        yahoo_team_id: "3".to_string(),
        yahoo_team_key: "454.l.12345.t.3".to_string(),
        team_name: "Dunkers".to_string(),
        manager_name: "sam".to_string(),
        wins: 7,
        losses: 2,
        ties: 1,
        rank: 2,
    };
    assert_eq!(format_team(&team), "454.l.12345.t.3\tDunkers\tsam\t7-2-1\trank 2");
}

#[test]
fn test_format_roster_slot_marks_starters() {
    let mut slot = RosterSlot {
        player_id: "5471".to_string(),
        player_key: "454.p.5471".to_string(),
        position: "PG".to_string(),
        selected_position: "G".to_string(),
        is_starting: true,
    };
    assert_eq!(format_roster_slot(&slot), "* G    PG   454.p.5471");

    slot.is_starting = false;
    slot.selected_position = "BN".to_string();
    assert_eq!(format_roster_slot(&slot), "  BN   PG   454.p.5471");
}

#[test]
fn test_format_matchup() {
    let side = |name: &str, points: f64, is_winner: bool| MatchupTeam {
        team_key: String::new(),
        team_id: String::new(),
        name: name.to_string(),
        points,
        projected_points: 0.0,
        is_winner,
        stats: vec![],
    };
    let matchup = Matchup {
        week: 3,
        week_start: "2024-11-04".to_string(),
        week_end: "2024-11-10".to_string(),
        status: "postevent".to_string(),
        is_playoffs: false,
        is_consolation: false,
        is_tied: false,
        winner_team_key: String::new(),
        teams: vec![side("A", 101.5, true), side("B", 99.25, false)],
    };
    assert_eq!(
        format_matchup(&matchup),
        "week 3 [postevent] A 101.50 (W) vs B 99.25"
    );
}

#[test]
fn test_format_transaction_prefers_team_name() {
    let player = |name: &str, kind: &str, dest_type: &str, dest_team: &str| TransactionPlayer {
        player_key: String::new(),
        player_id: String::new(),
        name: PlayerName {
            full: name.to_string(),
            ..PlayerName::default()
        },
        data: TransactionData {
            kind: kind.to_string(),
            destination_type: dest_type.to_string(),
            destination_team_name: dest_team.to_string(),
            ..TransactionData::default()
        },
    };
    let tx = Transaction {
        transaction_key: String::new(),
        transaction_id: "7".to_string(),
        kind: "add/drop".to_string(),
        status: "successful".to_string(),
        timestamp: 1_700_000_000,
        faab_bid: 0,
        players: vec![
            player("Jane Doe", "add", "team", "Dunkers"),
            player("John Roe", "drop", "waivers", ""),
        ],
    };
    assert_eq!(
        format_transaction(&tx),
        "1700000000\tadd/drop\tsuccessful\tadd Jane Doe -> Dunkers; drop John Roe -> waivers"
    );
}

#[test]
fn test_top_projections_orders_by_rank_then_id() {
    let values = vec![projection(9, 3), projection(4, 1), projection(2, 3), projection(5, 2)];
    let ids: Vec<i64> = top_projections(values, 3).iter().map(|p| p.player_id).collect();
    assert_eq!(ids, vec![4, 5, 2]);
}

#[test]
fn test_format_analysis() {
    let analysis = TeamAnalysisRecord {
        team_id: 1,
        scores: CategoryLine::default(),
        weakest: vec![Category::Reb, Category::Blk, Category::To],
        strongest: vec![Category::Tpm, Category::FtPct, Category::Ast],
        position_needs: vec![],
    };
    assert_eq!(
        format_analysis("Dunkers", &analysis),
        "Dunkers\n  strong: 3PM, FT%, AST\n  weak:   REB, BLK, TO\n  needs:  -"
    );
}

#[test]
fn test_suggestion_proposal_value_changes() {
    let suggestion = TradeSuggestion {
        league_id: 1,
        team_a_id: 10,
        team_a_name: "A".to_string(),
        team_a_gives: vec![trade_player(100, "Guard", 40.0)],
        team_b_id: 20,
        team_b_name: "B".to_string(),
        team_b_gives: vec![trade_player(200, "Center", 38.0)],
        fairness_score: 94.87,
        team_a_benefit: "Improves: REB (+8.0)".to_string(),
        team_b_benefit: "No significant benefit".to_string(),
        recommendation: "Fair trade.".to_string(),
    };

    let proposal = suggestion_proposal(&suggestion);
    assert_eq!(proposal.team_a_gives, vec![100]);
    assert_eq!(proposal.team_b_gives, vec![200]);
    assert_eq!(proposal.team_a_value_change, -2.0);
    assert_eq!(proposal.team_b_value_change, 2.0);
    assert_eq!(proposal.source, "suggested");
    assert_eq!(proposal.status, "pending");

    let text = format_suggestion(&suggestion);
    assert!(text.starts_with("[94.9] A gives Guard (PG, 40.0) to B for Center (PG, 38.0)"));
    assert!(text.contains("A: Improves: REB (+8.0)"));
}

#[test]
fn test_format_proposal() {
    let record = TradeProposalRecord {
        id: 3,
        league_id: 1,
        team_a_id: 10,
        team_b_id: 20,
        team_a_gives: vec![100],
        team_b_gives: vec![200, 201],
        fairness_score: 88.0,
        team_a_value_change: 0.0,
        team_b_value_change: 0.0,
        team_a_benefits: String::new(),
        team_b_benefits: String::new(),
        source: "manual".to_string(),
        status: "pending".to_string(),
        suggested_at: 0,
    };
    assert_eq!(
        format_proposal(&record),
        "#3 [pending] team 10 [100] <-> team 20 [200, 201]  fairness 88.0  (manual)"
    );
}
