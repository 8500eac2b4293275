//! milspot-core: Military flight classification, scoring, and intelligence summaries.
//!
//! No async, no network. The scan-cycle binary (`milspot-bot`) feeds decoded
//! flight records in and hands the resulting message to a notifier.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod feed;
pub mod insight;
pub mod message;
pub mod score;
pub mod select;
pub mod types;

// Re-export commonly used types at crate root
pub use catalog::{AircraftCategory, PatternCatalog};
pub use classify::{Classifier, MilitarySignal};
pub use insight::{Insight, InsightGenerator, InsightKind, InterestTier};
pub use score::{ScoreBreakdown, ScoreResult, Scorer};
pub use select::CandidateSelector;
pub use types::*;
