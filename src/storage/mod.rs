//! Storage layer: the local SQLite mirror of imported leagues
//!
//! - `models`: row structs and category types
//! - `schema`: connection and schema management
//! - `leagues`, `teams`, `players`, `rosters`: basic CRUD
//! - `projections`: valuations and the team aggregates built on them
//! - `analysis`, `proposals`, `sync`: service outputs and bookkeeping

pub mod analysis;
pub mod leagues;
pub mod models;
pub mod players;
pub mod projections;
pub mod proposals;
pub mod rosters;
pub mod schema;
pub mod sync;
pub mod teams;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::FantasyDatabase;
