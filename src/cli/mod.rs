//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{GameCode, LeagueKey, PlayerStatus, Season, TeamKey, Week};

use crate::error::Result;
use crate::yahoo::games::game_key_for;

/// Which Yahoo game (sport + season) a command targets.
#[derive(Debug, Args)]
pub struct GameArgs {
    /// Sport code.
    #[clap(long, short, value_enum, default_value_t = GameCode::Nba)]
    pub game: GameCode,

    /// Season year (e.g. 2024).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Explicit game key, overriding `--game`/`--season`.
    #[clap(long)]
    pub game_key: Option<String>,
}

impl GameArgs {
    pub fn resolve(&self) -> Result<String> {
        match &self.game_key {
            Some(key) => Ok(key.clone()),
            None => game_key_for(self.game, self.season.as_u16()),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Leagues the logged-in user belongs to.
    Leagues {
        #[clap(flatten)]
        game: GameArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Teams in a league.
    Teams {
        /// League key (e.g. `454.l.12345`).
        #[clap(long, short)]
        league: LeagueKey,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// A team's current roster.
    Roster {
        /// Team key (e.g. `454.l.12345.t.3`).
        #[clap(long, short)]
        team: TeamKey,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// League standings.
    Standings {
        #[clap(long, short)]
        league: LeagueKey,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Scoreboard matchups for one week.
    Matchups {
        #[clap(long, short)]
        league: LeagueKey,

        #[clap(long, short, default_value_t = Week::new(1))]
        week: Week,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Players in a league's player pool.
    Players {
        #[clap(long, short)]
        league: LeagueKey,

        /// Availability filter.
        #[clap(long, value_enum, default_value_t = PlayerStatus::default())]
        status: PlayerStatus,

        /// Offset into the player list.
        #[clap(long, default_value_t = 0)]
        start: u32,

        /// Players per page (Yahoo caps this at 25).
        #[clap(long, default_value_t = 25)]
        count: u32,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Stats for one player, season totals unless `--week` is given.
    PlayerStats {
        #[clap(long, short)]
        league: LeagueKey,

        /// Player key (e.g. `454.p.5471`).
        #[clap(long, short)]
        player: String,

        /// Week number; 0 for the season.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Draft results for a league, or for one team when `--team` is given.
    DraftResults {
        #[clap(long, short, required_unless_present = "team")]
        league: Option<LeagueKey>,

        #[clap(long, short)]
        team: Option<TeamKey>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Recent league transactions.
    Transactions {
        #[clap(long, short)]
        league: LeagueKey,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TradeCmd {
    /// Evaluate a trade between two local teams.
    Evaluate {
        /// Local league id.
        #[clap(long)]
        league_id: i64,

        /// Local id of the proposing team.
        #[clap(long)]
        team_a: i64,

        /// Player ids team A sends (comma separated).
        #[clap(long, value_delimiter = ',')]
        a_gives: Vec<i64>,

        /// Local id of the receiving team.
        #[clap(long)]
        team_b: i64,

        /// Player ids team B sends (comma separated).
        #[clap(long, value_delimiter = ',')]
        b_gives: Vec<i64>,

        /// Store the trade as a pending proposal.
        #[clap(long)]
        save: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Suggest fair 1-for-1 trades for a team.
    Suggest {
        /// Local team id.
        #[clap(long)]
        team_id: i64,

        /// Maximum number of suggestions.
        #[clap(long, default_value_t = 10)]
        limit: usize,

        /// Store every suggestion as a pending proposal.
        #[clap(long)]
        save: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Stored proposals involving a team.
    Proposals {
        /// Local team id.
        #[clap(long)]
        team_id: i64,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CacheCmd {
    /// Delete expired cache entries.
    Clean,
}

#[derive(Debug, Parser)]
#[clap(name = "yahoo-fantasy", about = "Yahoo Fantasy Sports CLI")]
pub struct Yahoo {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Yahoo Fantasy API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Import one of your leagues into the local database.
    ImportLeague {
        #[clap(flatten)]
        game: GameArgs,

        /// Yahoo league id (the number in the league URL).
        #[clap(long, short)]
        league_id: String,

        /// Your Yahoo team id within the league.
        #[clap(long, short)]
        team_id: String,
    },

    /// Compute player values for an imported league.
    ValuePlayers {
        /// Local league id.
        #[clap(long)]
        league_id: i64,

        /// Season whose per-game averages are used (e.g. 2024-25).
        #[clap(long)]
        stats_season: Option<String>,

        /// Show at most this many players.
        #[clap(long, default_value_t = 25)]
        top: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Score every team in a league by category.
    AnalyzeTeams {
        /// Local league id.
        #[clap(long)]
        league_id: i64,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Evaluate, suggest and list trades.
    Trade {
        #[clap(subcommand)]
        cmd: TradeCmd,
    },

    /// Manage the response cache.
    Cache {
        #[clap(subcommand)]
        cmd: CacheCmd,
    },

    /// Print the Yahoo game key for a sport and season.
    GameKey {
        #[clap(long, short, value_enum, default_value_t = GameCode::Nba)]
        game: GameCode,

        #[clap(long, short, default_value_t = Season::default())]
        season: Season,
    },
}
