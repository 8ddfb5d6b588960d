//! Yahoo Fantasy Sports API client
//!
//! - `config`: environment-driven client settings
//! - `auth`: token pair and the refresh-token grant
//! - `client`: `YahooClient` and every endpoint it wraps
//! - `wire` / `types` / `convert`: raw JSON shapes, flat domain structs, and the mapping between them
//! - `games`: game ids per sport and season
//! - `stats`: stat id lookups and NBA stat lines

pub mod auth;
pub mod client;
pub mod config;
pub mod convert;
pub mod games;
pub mod stats;
pub mod types;
pub mod wire;

pub use client::YahooClient;
pub use config::ClientConfig;
