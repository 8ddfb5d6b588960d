//! Yahoo Fantasy Sports client and league analysis toolkit
//!
//! A Rust library for the Yahoo Fantasy Sports API v2 with a local SQLite
//! mirror of your leagues and a set of analysis services on top of it.
//!
//! ## Features
//!
//! - **API Client**: OAuth2 bearer requests with automatic token refresh on 401
//! - **Flat Models**: Yahoo's nested JSON arrays mapped to plain structs
//! - **Response Cache**: in-memory LRU backed by a SQLite table with per-key TTLs
//! - **League Mirror**: leagues, teams, rosters and player stats stored locally
//! - **Valuation**: fantasy points per game, z-scores and positional ranks
//! - **Trade Tools**: fairness scoring, category impact and 1-for-1 suggestions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yahoo_fantasy::{ClientConfig, LeagueKey, YahooClient};
//!
//! # async fn example() -> yahoo_fantasy::Result<()> {
//! let client = YahooClient::new(ClientConfig::from_env())?;
//! let teams = client.get_league_teams(&LeagueKey::new("454", "12345")).await?;
//! for team in teams {
//!     println!("{} ({})", team.team_name, team.manager_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export YAHOO_CONSUMER_KEY=...
//! export YAHOO_CONSUMER_SECRET=...
//! export YAHOO_ACCESS_TOKEN=...
//! export YAHOO_REFRESH_TOKEN=...
//! export YAHOO_ENABLE_CACHE=true
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod services;
pub mod storage;
pub mod yahoo;

// Re-export commonly used types
pub use cli::types::{GameCode, LeagueKey, PlayerStatus, Position, Season, TeamKey, Week};
pub use error::{Result, YahooError};
pub use storage::FantasyDatabase;
pub use yahoo::{ClientConfig, YahooClient};
