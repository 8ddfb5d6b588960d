//! Arithmetic services over the local mirror
//!
//! Valuation turns season averages into per-league player values; analysis
//! and evaluation read those values back to score teams and trades; the
//! trade service combines both to suggest swaps. The league service is the
//! only one that talks to Yahoo.

pub mod analysis;
pub mod evaluation;
pub mod league;
pub mod stats;
pub mod trade;
pub mod valuation;


pub use analysis::AnalysisService;
pub use evaluation::{CategoryChange, EvaluationService, TradeEvaluation, TradeImpact};
pub use league::LeagueService;
pub use trade::{TradePlayer, TradeProposal, TradeService, TradeSuggestion};
pub use valuation::{ScoringSettings, ValuationService};
