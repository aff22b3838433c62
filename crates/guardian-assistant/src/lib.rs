//! ClimateGuardian assistant core.
//!
//! Classifies free-text climate questions by ordered keyword rules, answers
//! them from a static mock dataset, and records every successful exchange in
//! an append-only history log.

pub mod assistant;
pub mod classifier;
pub mod dataset;
pub mod history;
pub mod response;

pub use assistant::{ClimateGuardian, ERROR_ANSWER};
pub use classifier::{IntentClassifier, IntentRule, INTENT_RULES};
pub use dataset::{
    FloodRiskRecord, FundingOpportunity, MockClimateDataset, PolicyPriority,
    PolicyRecommendationRecord,
};
pub use history::HistoryLog;
pub use response::ResponseGenerator;
