//! Rule-based intent classification.
//!
//! A question is lowercased and checked against an ordered rule table; the
//! first rule with any keyword occurring as a substring wins. Nothing matching
//! falls back to [`Intent::GeneralClimate`].

use guardian_core::Intent;

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    /// Lowercase keywords, matched as substrings.
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    /// First keyword of this rule found in an already-lowercased question.
    fn find_keyword(&self, lowered: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|kw| lowered.contains(kw))
    }
}

/// Classification rules in priority order. Earlier rows win.
pub const INTENT_RULES: [IntentRule; 4] = [
    IntentRule {
        intent: Intent::RiskAssessment,
        keywords: &["flood", "risk", "vulnerability", "disaster"],
    },
    IntentRule {
        intent: Intent::PolicyRecommendation,
        keywords: &["policy", "recommend", "should", "strategy"],
    },
    IntentRule {
        intent: Intent::FundingIntelligence,
        keywords: &["funding", "grant", "money", "finance"],
    },
    IntentRule {
        intent: Intent::DataAnalysis,
        keywords: &["data", "statistics", "numbers", "trend"],
    },
];

/// Maps raw questions to an [`Intent`].
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: &'static [IntentRule],
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier over [`INTENT_RULES`].
    pub fn new() -> Self {
        Self {
            rules: &INTENT_RULES,
        }
    }

    /// Classify a question. Never returns [`Intent::Error`].
    pub fn classify(&self, question: &str) -> Intent {
        self.explain(question)
            .map(|(intent, _)| intent)
            .unwrap_or(Intent::GeneralClimate)
    }

    /// The winning rule's intent and the keyword that triggered it, or
    /// `None` when the question falls through to the general intent.
    pub fn explain(&self, question: &str) -> Option<(Intent, &'static str)> {
        let lowered = question.to_lowercase();
        self.rules
            .iter()
            .find_map(|rule| rule.find_keyword(&lowered).map(|kw| (rule.intent, kw)))
    }
}
