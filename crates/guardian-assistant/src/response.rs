//! Templated answer generation.
//!
//! Each intent has one handler. A handler answers from the mock dataset when
//! the question names a region or group it has records for, and otherwise
//! returns that intent's generic prompt. Confidence values are fixed per
//! branch.

use std::sync::Arc;

use guardian_core::{Confidence, GeneratedResponse, GuardianError, Intent, Result};

use crate::assistant::ERROR_ANSWER;
use crate::dataset::{MockClimateDataset, AFRICA_NGOS, BANGLADESH, SMALL_ISLAND_NATIONS};

const RISK_FALLBACK: &str = "Climate risk assessment requires specific location data. Please specify a country, \n\
region, or city for detailed risk analysis. I can provide information on flood risks, drought \n\
vulnerability, extreme weather patterns, and sea level rise impacts.";

const POLICY_FALLBACK: &str = "Policy recommendations depend on specific regional context, governance structure, \n\
and climate vulnerabilities. Please specify a region, country, or sector for targeted policy guidance. \n\
I can provide recommendations for adaptation, mitigation, financing, and implementation strategies.";

const FUNDING_FALLBACK: &str = "Climate funding opportunities vary by region, organization type, and project focus. \n\
Please specify your location, organization type (NGO, government, private sector), and project area \n\
for targeted funding recommendations. I can help identify grants, loans, and investment opportunities.";

const DATA_ANALYSIS_ANSWER: &str = "I can provide analysis of climate data including temperature trends, precipitation \n\
patterns, emissions data, and vulnerability indices. Please specify:\n\
• Geographic region of interest\n\
• Type of climate data (temperature, precipitation, emissions, etc.)\n\
• Time period for analysis\n\
• Specific metrics or indicators needed";

const GENERAL_ANSWER: &str = "I'm ClimateGuardian, your AI assistant for climate risk analysis and policy recommendations. \n\
I can help with:\n\
\n\
• Climate risk assessments for specific regions\n\
• Evidence-based policy recommendations\n\
• Climate funding and grant opportunities\n\
• Data analysis and trend interpretation\n\
• Adaptation and mitigation strategies\n\
\n\
Please ask me about specific climate challenges, locations, or policy areas for detailed assistance.";

const FUNDING_TIPS: &str = "Application tips:\n\
• Demonstrate clear community impact and local partnerships\n\
• Include measurable climate adaptation or mitigation outcomes\n\
• Provide detailed budget breakdown and sustainability plan";

/// Builds a [`GeneratedResponse`] for a classified question.
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    dataset: Arc<MockClimateDataset>,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new(Arc::new(MockClimateDataset::builtin()))
    }
}

impl ResponseGenerator {
    pub fn new(dataset: Arc<MockClimateDataset>) -> Self {
        Self { dataset }
    }

    /// Generate the response for `question` under `intent`.
    ///
    /// Fails only when a dataset branch is selected but the dataset lacks the
    /// record that branch renders.
    pub fn generate(&self, intent: Intent, question: &str) -> Result<GeneratedResponse> {
        let lowered = question.to_lowercase();
        match intent {
            Intent::RiskAssessment => self.risk_assessment(&lowered),
            Intent::PolicyRecommendation => self.policy_recommendation(&lowered),
            Intent::FundingIntelligence => self.funding_intelligence(&lowered),
            Intent::DataAnalysis => Ok(fixed(
                DATA_ANALYSIS_ANSWER,
                &["NOAA Climate Data", "Climate TRACE", "OpenAQ"],
                90,
            )),
            Intent::GeneralClimate => Ok(fixed(
                GENERAL_ANSWER,
                &["IPCC Reports", "UN Climate Database"],
                95,
            )),
            Intent::Error => Ok(Self::error_response()),
        }
    }

    /// The degraded response used when processing a query fails.
    pub fn error_response() -> GeneratedResponse {
        GeneratedResponse {
            answer: ERROR_ANSWER.to_string(),
            sources: Vec::new(),
            confidence: Confidence::ZERO,
        }
    }

    fn risk_assessment(&self, lowered: &str) -> Result<GeneratedResponse> {
        if !lowered.contains("bangladesh") {
            return Ok(fixed(
                RISK_FALLBACK,
                &["ND-GAIN Country Index", "NOAA Climate Data"],
                85,
            ));
        }

        let record = self
            .dataset
            .flood_risk(BANGLADESH)
            .ok_or_else(|| missing("flood risk", BANGLADESH))?;
        let factors = bullets(record.factors.iter().map(String::as_str));
        let answer = format!(
            "Based on ND-GAIN vulnerability data and NOAA precipitation forecasts, \n\
             Bangladesh faces {} flood risk (confidence: {}%) due to:\n\n\
             {}\n\n\
             This assessment is based on current climate models and historical data patterns.",
            record.risk_level, record.confidence, factors
        );

        Ok(GeneratedResponse {
            answer,
            sources: record.sources.clone(),
            confidence: record.confidence,
        })
    }

    fn policy_recommendation(&self, lowered: &str) -> Result<GeneratedResponse> {
        if !(lowered.contains("small island") || lowered.contains("island nation")) {
            return Ok(fixed(
                POLICY_FALLBACK,
                &["IPCC Policy Guidelines", "UN Climate Policy Database"],
                80,
            ));
        }

        let record = self
            .dataset
            .policy_recommendations(SMALL_ISLAND_NATIONS)
            .ok_or_else(|| missing("policy recommendations", SMALL_ISLAND_NATIONS))?;
        let policies = record
            .priorities
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {} ({})", i + 1, p.policy, p.funding))
            .collect::<Vec<_>>()
            .join("\n");
        let funding = record
            .funding_opportunities
            .iter()
            .map(|f| format!("• {}: {} (deadline: {})", f.name, f.amount, f.deadline))
            .collect::<Vec<_>>()
            .join("\n");
        let answer = format!(
            "For small island developing states, priority policies include:\n\n\
             {}\n\n\
             Funding Opportunities:\n\
             {}\n\n\
             These recommendations are based on IPCC guidelines and successful adaptation strategies from similar regions.",
            policies, funding
        );

        Ok(GeneratedResponse {
            answer,
            sources: record.sources.clone(),
            confidence: Confidence::new(92),
        })
    }

    fn funding_intelligence(&self, lowered: &str) -> Result<GeneratedResponse> {
        if !(lowered.contains("africa") && lowered.contains("ngo")) {
            return Ok(fixed(
                FUNDING_FALLBACK,
                &["Global Climate Finance Database", "Green Climate Fund"],
                85,
            ));
        }

        let opportunities = self
            .dataset
            .funding_opportunities(AFRICA_NGOS)
            .ok_or_else(|| missing("funding opportunities", AFRICA_NGOS))?;
        let listing = opportunities
            .iter()
            .map(|o| {
                format!(
                    "• {}: {} (deadline: {})\n  Focus: {}",
                    o.name,
                    o.amount,
                    o.deadline,
                    o.focus_label()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let answer = format!(
            "Current climate funding opportunities for African NGOs:\n\n{}\n\n{}",
            listing, FUNDING_TIPS
        );

        Ok(GeneratedResponse {
            answer,
            sources: vec![
                "Climate Finance Database".to_string(),
                "Adaptation Fund Project Database".to_string(),
            ],
            confidence: Confidence::new(88),
        })
    }
}

fn fixed(answer: &str, sources: &[&str], confidence: u8) -> GeneratedResponse {
    GeneratedResponse {
        answer: answer.to_string(),
        sources: sources.iter().map(|s| s.to_string()).collect(),
        confidence: Confidence::new(confidence),
    }
}

fn bullets<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn missing(category: &str, key: &str) -> GuardianError {
    GuardianError::Dataset(format!("no {} record for '{}'", category, key))
}
