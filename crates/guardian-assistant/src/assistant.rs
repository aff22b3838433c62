//! Top-level query entry point.
//!
//! Wires the classifier, response generator and history log together. Every
//! failure inside a query is caught here and turned into the apology result.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use guardian_core::{Intent, QueryRecord, QueryResult, Result};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::classifier::IntentClassifier;
use crate::dataset::MockClimateDataset;
use crate::history::HistoryLog;
use crate::response::ResponseGenerator;

/// Answer returned when a query cannot be processed.
pub const ERROR_ANSWER: &str =
    "I apologize, but I encountered an error processing your query. Please try again.";

/// The ClimateGuardian assistant.
#[derive(Debug)]
pub struct ClimateGuardian {
    classifier: IntentClassifier,
    generator: ResponseGenerator,
    history: Arc<HistoryLog>,
}

impl Default for ClimateGuardian {
    fn default() -> Self {
        Self::builtin(Arc::new(HistoryLog::new()))
    }
}

impl ClimateGuardian {
    pub fn new(dataset: Arc<MockClimateDataset>, history: Arc<HistoryLog>) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            generator: ResponseGenerator::new(dataset),
            history,
        }
    }

    /// Assistant over the built-in mock dataset.
    pub fn builtin(history: Arc<HistoryLog>) -> Self {
        Self::new(Arc::new(MockClimateDataset::builtin()), history)
    }

    /// Answer a question and record it.
    ///
    /// Never fails: errors are logged and replaced by a result with intent
    /// `error`, zero confidence and no sources. Such results are not added to
    /// the history log.
    pub fn query(&self, question: &str) -> QueryResult {
        let id = Uuid::new_v4();
        let timestamp = Utc::now();

        match self.try_query(id, timestamp, question) {
            Ok(result) => result,
            Err(e) => {
                error!(%id, error = %e, "Query processing failed");
                let response = ResponseGenerator::error_response();
                QueryResult {
                    id,
                    answer: response.answer,
                    sources: response.sources,
                    confidence: response.confidence,
                    intent: Intent::Error,
                    timestamp,
                }
            }
        }
    }

    fn try_query(
        &self,
        id: Uuid,
        timestamp: DateTime<Utc>,
        question: &str,
    ) -> Result<QueryResult> {
        let intent = self.classifier.classify(question);
        debug!(%id, %intent, "Classified query");

        let response = self.generator.generate(intent, question)?;
        let record = QueryRecord {
            id,
            timestamp,
            question: question.to_string(),
            intent,
            response,
        };
        let result = QueryResult::from(&record);
        self.history.append(record)?;

        info!(%id, %intent, confidence = %result.confidence, "Query answered");
        Ok(result)
    }

    /// The shared history log.
    pub fn history(&self) -> &Arc<HistoryLog> {
        &self.history
    }

    /// The last `n` answered questions, oldest first.
    pub fn recent_history(&self, n: usize) -> Result<Vec<QueryRecord>> {
        self.history.recent(n)
    }
}

#[cfg(test)]
mod tests {
    use guardian_core::Confidence;

    use super::*;

    #[test]
    fn test_query_returns_classified_answer() {
        let guardian = ClimateGuardian::default();
        let result = guardian.query("What are the flood risks for Bangladesh?");
        assert_eq!(result.intent, Intent::RiskAssessment);
        assert_eq!(result.confidence.value(), 89);
        assert!(result.answer.contains("HIGH"));
        assert!(result.sources.contains(&"ND-GAIN Country Index 2023".to_string()));
    }

    #[test]
    fn test_query_appends_matching_record() {
        let history = Arc::new(HistoryLog::new());
        let guardian = ClimateGuardian::builtin(Arc::clone(&history));

        let result = guardian.query("climate funding opportunities");
        assert_eq!(history.len(), 1);

        let stored = &history.snapshot().unwrap()[0];
        assert_eq!(stored.id, result.id);
        assert_eq!(stored.question, "climate funding opportunities");
        assert_eq!(stored.intent, Intent::FundingIntelligence);
        assert_eq!(stored.response.answer, result.answer);
        assert_eq!(QueryResult::from(stored), result);
    }

    #[test]
    fn test_history_grows_in_order() {
        let guardian = ClimateGuardian::default();
        let questions = ["hello", "data trends", "grant money", "policy", "flood"];
        for q in questions {
            guardian.query(q);
        }
        assert_eq!(guardian.history().len(), questions.len());

        let recorded: Vec<String> = guardian
            .recent_history(10)
            .unwrap()
            .into_iter()
            .map(|r| r.question)
            .collect();
        assert_eq!(recorded, questions);
    }

    #[test]
    fn test_recent_history_limits_to_last_n() {
        let guardian = ClimateGuardian::default();
        for i in 0..12 {
            guardian.query(&format!("question {}", i));
        }
        let recent = guardian.recent_history(10).unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].question, "question 2");
        assert_eq!(recent[9].question, "question 11");
    }

    #[test]
    fn test_failing_query_degrades_and_is_not_recorded() {
        let history = Arc::new(HistoryLog::new());
        let guardian =
            ClimateGuardian::new(Arc::new(MockClimateDataset::empty()), Arc::clone(&history));

        let result = guardian.query("flood risk in Bangladesh");
        assert_eq!(result.intent, Intent::Error);
        assert_eq!(result.answer, ERROR_ANSWER);
        assert!(result.sources.is_empty());
        assert_eq!(result.confidence, Confidence::ZERO);
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_keeps_the_minted_timestamp() {
        let history = Arc::new(HistoryLog::new());
        let guardian = ClimateGuardian::builtin(Arc::clone(&history));
        let id = Uuid::new_v4();
        let minted = Utc::now() - chrono::Duration::hours(1);

        let result = guardian.try_query(id, minted, "climate data").unwrap();
        assert_eq!(result.id, id);
        assert_eq!(result.timestamp, minted);

        let stored = &history.snapshot().unwrap()[0];
        assert_eq!(stored.id, id);
        assert_eq!(stored.timestamp, minted);
    }

    #[test]
    fn test_each_query_gets_a_fresh_id() {
        let guardian = ClimateGuardian::default();
        let a = guardian.query("hello");
        let b = guardian.query("hello");
        assert_ne!(a.id, b.id);
        assert_eq!(a.answer, b.answer);
    }

    #[test]
    fn test_shared_history_between_instances() {
        let history = Arc::new(HistoryLog::new());
        let first = ClimateGuardian::builtin(Arc::clone(&history));
        let second = ClimateGuardian::builtin(Arc::clone(&history));
        first.query("one");
        second.query("two");
        assert_eq!(history.len(), 2);
    }
}
