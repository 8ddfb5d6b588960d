//! Command implementations for the Yahoo Fantasy CLI

pub mod common;
pub mod get;
pub mod league;
pub mod maintenance;
pub mod trade;

#[cfg(test)]
mod tests;
