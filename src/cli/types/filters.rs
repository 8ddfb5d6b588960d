//! Filter and selector enums for CLI commands.

use std::fmt;

/// Sport codes Yahoo publishes game keys for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum GameCode {
    Mlb,
    Nfl,
    Nba,
    Nhl,
}

impl GameCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCode::Mlb => "mlb",
            GameCode::Nfl => "nfl",
            GameCode::Nba => "nba",
            GameCode::Nhl => "nhl",
        }
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter for player availability in a league's player collection.
///
/// Yahoo applies this server side through the `status=` matrix parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlayerStatus {
    /// Every player
    #[default]
    All,
    /// Free agents only
    FreeAgents,
    /// Players on waivers
    Waivers,
    /// Players on a fantasy roster
    Taken,
    /// Keepers
    Keepers,
}

impl PlayerStatus {
    /// The value Yahoo expects in the `status=` parameter.
    pub fn code(&self) -> &'static str {
        match self {
            PlayerStatus::All => "A",
            PlayerStatus::FreeAgents => "FA",
            PlayerStatus::Waivers => "W",
            PlayerStatus::Taken => "T",
            PlayerStatus::Keepers => "K",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
