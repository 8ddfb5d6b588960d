//! Flat domain structs produced from Yahoo responses.
//!
//! These are what the client hands back to callers and what the response
//! cache stores, so everything here round-trips through serde.

use serde::{Deserialize, Serialize};

/// A fantasy league the logged-in user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub yahoo_league_id: String,
    pub yahoo_game_key: String,
    pub league_name: String,
    pub season_year: u16,
    pub scoring_type: String,
    pub num_teams: u32,
    pub current_week: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub yahoo_team_id: String,
    pub yahoo_team_key: String,
    pub team_name: String,
    /// First manager's nickname, empty when Yahoo lists none.
    pub manager_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub rank: u32,
}

/// One player on a team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub player_id: String,
    pub player_key: String,
    /// First eligible position.
    pub position: String,
    pub selected_position: String,
    pub is_starting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerName {
    pub full: String,
    pub first: String,
    pub last: String,
    pub ascii_first: String,
    pub ascii_last: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub stat_id: u32,
    /// Raw value as Yahoo reports it; may be a compound like `"12/25"`.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub coverage_type: String,
    pub week: u32,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPoints {
    pub coverage_type: String,
    pub week: u32,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_key: String,
    pub player_id: String,
    pub name: PlayerName,
    pub editorial_team_key: String,
    pub editorial_team_full_name: String,
    pub editorial_team_abbr: String,
    pub display_position: String,
    pub eligible_positions: Vec<String>,
    pub selected_position: Option<String>,
    pub player_stats: Option<PlayerStats>,
    pub player_points: Option<PlayerPoints>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub manager_id: String,
    pub nickname: String,
    pub guid: String,
    pub is_commissioner: bool,
    pub is_current_login: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeTotals {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    pub kind: String,
    pub value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStandings {
    pub rank: u32,
    pub playoff_seed: u32,
    pub outcome_totals: OutcomeTotals,
    pub points_for: f64,
    pub points_against: f64,
    pub games_back: f64,
    pub streak: Option<Streak>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsTeam {
    pub team_key: String,
    pub team_id: String,
    pub name: String,
    pub manager_nickname: String,
    pub managers: Vec<Manager>,
    pub standings: TeamStandings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub teams: Vec<StandingsTeam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupTeam {
    pub team_key: String,
    pub team_id: String,
    pub name: String,
    pub points: f64,
    pub projected_points: f64,
    pub is_winner: bool,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub week: u32,
    pub week_start: String,
    pub week_end: String,
    pub status: String,
    pub is_playoffs: bool,
    pub is_consolation: bool,
    pub is_tied: bool,
    pub winner_team_key: String,
    pub teams: Vec<MatchupTeam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResult {
    pub pick: u32,
    pub round: u32,
    pub team_key: String,
    pub player_key: String,
    pub player: Option<Player>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    pub kind: String,
    pub source_type: String,
    pub source_team_key: String,
    pub source_team_name: String,
    pub destination_type: String,
    pub destination_team_key: String,
    pub destination_team_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPlayer {
    pub player_key: String,
    pub player_id: String,
    pub name: PlayerName,
    pub data: TransactionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_key: String,
    pub transaction_id: String,
    pub kind: String,
    pub status: String,
    /// UNIX seconds.
    pub timestamp: i64,
    pub faab_bid: u32,
    pub players: Vec<TransactionPlayer>,
}
