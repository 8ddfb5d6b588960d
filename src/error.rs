//! Error types for the Yahoo Fantasy client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, YahooError>;

#[derive(Error, Debug)]
pub enum YahooError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Yahoo access token not configured - set YAHOO_ACCESS_TOKEN environment variable")]
    MissingAccessToken,

    #[error("No refresh token available")]
    MissingRefreshToken,

    #[error("Token refresh failed (status {status}): {body}")]
    TokenRefresh { status: u16, body: String },

    #[error("Yahoo API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unknown game: {code} {season}")]
    UnknownGame { code: String, season: u16 },

    #[error("Stat ID {stat_id} not found")]
    StatNotFound { stat_id: u32 },

    #[error("Invalid stat value for ID {stat_id}: {value}")]
    InvalidStatValue { stat_id: u32, value: String },

    #[error("Invalid compound stat format: {value}")]
    InvalidCompoundStat { value: String },

    #[error("League {league_id} not found in user's leagues")]
    LeagueNotFound { league_id: String },

    #[error("League {league_id} already imported")]
    LeagueAlreadyImported { league_id: String },

    #[error("Team not found: {team_id}")]
    TeamNotFound { team_id: i64 },

    #[error("Invalid scoring settings: {0}")]
    InvalidScoringSettings(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
