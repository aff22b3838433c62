use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// The closed set of categories a question can be routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Flood, disaster and vulnerability questions.
    RiskAssessment,
    /// Requests for policy guidance or strategy.
    PolicyRecommendation,
    /// Grants, finance and funding opportunities.
    FundingIntelligence,
    /// Statistics, trends and data requests.
    DataAnalysis,
    /// Anything that matched no keyword rule.
    GeneralClimate,
    /// Synthesized only when processing a query failed internally.
    Error,
}

impl Intent {
    /// Wire label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::RiskAssessment => "risk_assessment",
            Intent::PolicyRecommendation => "policy_recommendation",
            Intent::FundingIntelligence => "funding_intelligence",
            Intent::DataAnalysis => "data_analysis",
            Intent::GeneralClimate => "general_climate",
            Intent::Error => "error",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Confidence
// =============================================================================

/// Hand-assigned confidence score, an integer percentage in `[0, 100]`.
///
/// Construction clamps, so a value outside the range cannot exist.
/// Deserialization rejects out-of-range input instead of clamping it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0);
    pub const MAX: Confidence = Confidence(100);

    /// Create a confidence score, clamping anything above 100.
    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Confidence(100)
        } else {
            Confidence(percent)
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Confidence {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            Err(format!("confidence {} is outside 0..=100", value))
        } else {
            Ok(Confidence(value))
        }
    }
}

impl From<Confidence> for u8 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Responses and records
// =============================================================================

/// Answer text, citations and confidence produced for one question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedResponse {
    pub answer: String,
    /// Citation strings in display order.
    pub sources: Vec<String>,
    pub confidence: Confidence,
}

/// One successfully answered question as kept in the history log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub question: String,
    pub intent: Intent,
    pub response: GeneratedResponse,
}

/// Flattened result handed back to callers of the query entry point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub id: Uuid,
    pub answer: String,
    pub sources: Vec<String>,
    pub confidence: Confidence,
    pub intent: Intent,
    pub timestamp: DateTime<Utc>,
}

impl From<&QueryRecord> for QueryResult {
    fn from(record: &QueryRecord) -> Self {
        Self {
            id: record.id,
            answer: record.response.answer.clone(),
            sources: record.response.sources.clone(),
            confidence: record.response.confidence,
            intent: record.intent,
            timestamp: record.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serializes_snake_case() {
        let json = serde_json::to_string(&Intent::PolicyRecommendation).unwrap();
        assert_eq!(json, "\"policy_recommendation\"");

        let parsed: Intent = serde_json::from_str("\"funding_intelligence\"").unwrap();
        assert_eq!(parsed, Intent::FundingIntelligence);
    }

    #[test]
    fn test_intent_display_matches_serde() {
        for intent in [
            Intent::RiskAssessment,
            Intent::PolicyRecommendation,
            Intent::FundingIntelligence,
            Intent::DataAnalysis,
            Intent::GeneralClimate,
            Intent::Error,
        ] {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent));
        }
    }

    #[test]
    fn test_confidence_clamps() {
        assert_eq!(Confidence::new(89).value(), 89);
        assert_eq!(Confidence::new(100).value(), 100);
        assert_eq!(Confidence::new(250).value(), 100);
        assert_eq!(Confidence::ZERO.value(), 0);
    }

    #[test]
    fn test_confidence_serializes_as_integer() {
        let json = serde_json::to_string(&Confidence::new(92)).unwrap();
        assert_eq!(json, "92");
    }

    #[test]
    fn test_confidence_rejects_out_of_range_input() {
        assert!(serde_json::from_str::<Confidence>("101").is_err());
        assert_eq!(
            serde_json::from_str::<Confidence>("100").unwrap(),
            Confidence::MAX
        );
    }

    #[test]
    fn test_query_result_from_record() {
        let record = QueryRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            question: "data trends?".to_string(),
            intent: Intent::DataAnalysis,
            response: GeneratedResponse {
                answer: "analysis".to_string(),
                sources: vec!["OpenAQ".to_string()],
                confidence: Confidence::new(90),
            },
        };

        let result = QueryResult::from(&record);
        assert_eq!(result.id, record.id);
        assert_eq!(result.timestamp, record.timestamp);
        assert_eq!(result.intent, Intent::DataAnalysis);
        assert_eq!(result.answer, "analysis");
        assert_eq!(result.sources, vec!["OpenAQ"]);
        assert_eq!(result.confidence.value(), 90);
    }

    #[test]
    fn test_query_record_json_shape() {
        let record = QueryRecord {
            id: Uuid::nil(),
            timestamp: Utc::now(),
            question: "q".to_string(),
            intent: Intent::GeneralClimate,
            response: GeneratedResponse {
                answer: "a".to_string(),
                sources: vec![],
                confidence: Confidence::new(95),
            },
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["intent"], "general_climate");
        assert_eq!(value["response"]["confidence"], 95);
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
    }
}
