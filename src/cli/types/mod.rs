//! Type-safe wrappers and enums for Yahoo Fantasy data.

pub mod filters;
pub mod ids;
pub mod position;
pub mod time;

pub use filters::{GameCode, PlayerStatus};
pub use ids::{LeagueKey, TeamKey};
pub use position::Position;
pub use time::{Season, Week};
