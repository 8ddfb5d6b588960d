//! Core utilities shared by the client and the command layer
//!
//! - `cache`: two-tier (LRU + SQLite) response cache

pub mod cache;

pub use cache::{ApiCache, CacheKey};
