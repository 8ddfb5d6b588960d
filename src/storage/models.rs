//! Data models for the relational mirror

use crate::error::YahooError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An imported league row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FantasyLeague {
    pub id: i64,
    pub yahoo_league_id: String,
    pub yahoo_game_key: String,
    pub league_name: String,
    pub season_year: u16,
    pub scoring_type: String,
    /// JSON object of category weights.
    pub scoring_settings: String,
    pub num_teams: u32,
    pub current_week: u32,
    pub last_synced_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FantasyTeam {
    pub id: i64,
    pub league_id: i64,
    pub yahoo_team_id: String,
    pub yahoo_team_key: String,
    pub team_name: String,
    pub manager_name: String,
    pub is_user_team: bool,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub rank: u32,
    pub points_for: f64,
    pub points_against: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: i64,
    pub yahoo_player_key: String,
    pub full_name: String,
    pub primary_position: Option<String>,
    pub is_active: bool,
}

/// Per-game season averages for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub player_id: i64,
    pub season: String,
    pub games_played: u32,
    pub points_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
    pub steals_per_game: f64,
    pub blocks_per_game: f64,
    pub turnovers_per_game: f64,
    pub field_goal_percentage: f64,
    pub free_throw_percentage: f64,
    pub three_pointers_made: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: i64,
    pub team_id: i64,
    pub player_id: i64,
    pub roster_position: String,
    pub selected_position: String,
    pub is_starting: bool,
}

/// The nine head-to-head categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "PTS")]
    Pts,
    #[serde(rename = "REB")]
    Reb,
    #[serde(rename = "AST")]
    Ast,
    #[serde(rename = "STL")]
    Stl,
    #[serde(rename = "BLK")]
    Blk,
    #[serde(rename = "TO")]
    To,
    #[serde(rename = "FG%")]
    FgPct,
    #[serde(rename = "FT%")]
    FtPct,
    #[serde(rename = "3PM")]
    Tpm,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Pts,
        Category::Reb,
        Category::Ast,
        Category::Stl,
        Category::Blk,
        Category::To,
        Category::FgPct,
        Category::FtPct,
        Category::Tpm,
    ];

    /// Counting categories a trade moves directly (percentages excluded).
    pub const COUNTING: [Category; 7] = [
        Category::Pts,
        Category::Reb,
        Category::Ast,
        Category::Stl,
        Category::Blk,
        Category::To,
        Category::Tpm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pts => "PTS",
            Category::Reb => "REB",
            Category::Ast => "AST",
            Category::Stl => "STL",
            Category::Blk => "BLK",
            Category::To => "TO",
            Category::FgPct => "FG%",
            Category::FtPct => "FT%",
            Category::Tpm => "3PM",
        }
    }

    /// Lower is better.
    pub fn is_inverted(&self) -> bool {
        matches!(self, Category::To)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| YahooError::InvalidValue(format!("category '{}'", s)))
    }
}

/// One value per category: per-game projections, team totals or z-scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryLine {
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub to: f64,
    pub fg_pct: f64,
    pub ft_pct: f64,
    pub tpm: f64,
}

impl CategoryLine {
    pub fn get(&self, category: Category) -> f64 {
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

    pub fn set(&mut self, category: Category, value: f64) {
        match category {
            Category::Pts => self.pts = value,
            Category::Reb => self.reb = value,
            Category::Ast => self.ast = value,
            Category::Stl => self.stl = value,
            Category::Blk => self.blk = value,
            Category::To => self.to = value,
            Category::FgPct => self.fg_pct = value,
            Category::FtPct => self.ft_pct = value,
            Category::Tpm => self.tpm = value,
        }
    }
}

/// A player's season line joined with their primary position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonLine {
    pub player_id: i64,
    pub primary_position: String,
    pub line: CategoryLine,
}

/// A stored valuation for one player in one league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProjection {
    pub player_id: i64,
    pub league_id: i64,
    pub fpg: f64,
    pub line: CategoryLine,
    pub z_score: f64,
    pub overall_rank: u32,
    pub position_rank: u32,
    pub scarcity_multiplier: f64,
    /// Primary position, `F` when unknown.
    pub position: String,
}

/// A starter on a team roster with their league valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub player_id: i64,
    pub player_name: String,
    pub position: String,
    pub fpg: f64,
    pub is_starting: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalysisRecord {
    pub team_id: i64,
    pub scores: CategoryLine,
    /// Three weakest categories, weakest first.
    pub weakest: Vec<Category>,
    /// Three strongest categories, strongest first.
    pub strongest: Vec<Category>,
    pub position_needs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeProposalRecord {
    pub id: i64,
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
    pub suggested_at: i64,
}

/// `trade_details` column payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeDetails {
    pub team_a_gives: Vec<i64>,
    pub team_b_gives: Vec<i64>,
}
