//! Static mock climate records.
//!
//! Stands in for a real data backend: flood risk by country, policy
//! recommendations by group and funding opportunities by group. Built once at
//! startup and shared read-only.

use std::collections::HashMap;

use guardian_core::Confidence;
use serde::{Deserialize, Serialize};

/// Country key of the built-in flood risk record the assistant consults.
pub const BANGLADESH: &str = "Bangladesh";
/// Group key of the built-in policy recommendation record.
pub const SMALL_ISLAND_NATIONS: &str = "small_island_nations";
/// Group key of the built-in funding opportunity list.
pub const AFRICA_NGOS: &str = "africa_ngos";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodRiskRecord {
    /// Display label such as `HIGH` or `MEDIUM`.
    pub risk_level: String,
    pub confidence: Confidence,
    pub factors: Vec<String>,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyPriority {
    pub policy: String,
    /// Free-text funding note shown next to the policy.
    pub funding: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingOpportunity {
    pub name: String,
    pub amount: String,
    pub deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
}

impl FundingOpportunity {
    fn new(name: &str, amount: &str, deadline: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            deadline: deadline.to_string(),
            focus: None,
            eligibility: None,
        }
    }

    /// Focus area, else eligibility, else a generic label.
    pub fn focus_label(&self) -> &str {
        self.focus
            .as_deref()
            .or(self.eligibility.as_deref())
            .unwrap_or("General climate action")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecommendationRecord {
    pub priorities: Vec<PolicyPriority>,
    pub funding_opportunities: Vec<FundingOpportunity>,
    pub sources: Vec<String>,
}

/// Read-only lookup tables keyed by country or group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockClimateDataset {
    #[serde(default)]
    flood_risks: HashMap<String, FloodRiskRecord>,
    #[serde(default)]
    policy_recommendations: HashMap<String, PolicyRecommendationRecord>,
    #[serde(default)]
    funding_opportunities: HashMap<String, Vec<FundingOpportunity>>,
}

impl MockClimateDataset {
    /// A dataset with no records at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in demonstration records.
    pub fn builtin() -> Self {
        Self::empty()
            .with_flood_risk(
                BANGLADESH,
                FloodRiskRecord {
                    risk_level: "HIGH".to_string(),
                    confidence: Confidence::new(89),
                    factors: strings(&[
                        "Increased monsoon intensity (+23% by 2030)",
                        "Sea level rise of 15-20cm expected",
                        "40% of population in flood-prone areas",
                    ]),
                    sources: strings(&["ND-GAIN Country Index 2023", "NOAA Climate Projections"]),
                },
            )
            .with_flood_risk(
                "Netherlands",
                FloodRiskRecord {
                    risk_level: "MEDIUM".to_string(),
                    confidence: Confidence::new(76),
                    factors: strings(&[
                        "Advanced flood protection systems",
                        "Sea level rise of 10-15cm expected",
                        "25% of land below sea level",
                    ]),
                    sources: strings(&["European Climate Assessment", "Dutch Delta Works Data"]),
                },
            )
            .with_policy_recommendations(
                SMALL_ISLAND_NATIONS,
                PolicyRecommendationRecord {
                    priorities: vec![
                        PolicyPriority {
                            policy: "Coastal protection infrastructure".to_string(),
                            funding: "$2.3B funding available".to_string(),
                            impact: "High".to_string(),
                        },
                        PolicyPriority {
                            policy: "Renewable energy transition".to_string(),
                            funding: "74% potential reduction in emissions".to_string(),
                            impact: "Very High".to_string(),
                        },
                        PolicyPriority {
                            policy: "Climate-smart agriculture adaptation".to_string(),
                            funding: "$500M available".to_string(),
                            impact: "Medium".to_string(),
                        },
                    ],
                    funding_opportunities: vec![
                        FundingOpportunity::new("Green Climate Fund", "$50M", "June 2025"),
                        FundingOpportunity::new("Adaptation Fund", "$25M", "August 2025"),
                    ],
                    sources: strings(&["UN SDG13 Database", "Climate Watch Policy Tracker"]),
                },
            )
            .with_funding_opportunities(
                AFRICA_NGOS,
                vec![
                    FundingOpportunity {
                        eligibility: Some(
                            "Must demonstrate community impact and have local partnerships"
                                .to_string(),
                        ),
                        ..FundingOpportunity::new("Adaptation Fund", "$50M", "August 2025")
                    },
                    FundingOpportunity {
                        focus: Some("Community-based adaptation".to_string()),
                        ..FundingOpportunity::new(
                            "Climate Investment Funds",
                            "$25M",
                            "September 2025",
                        )
                    },
                    FundingOpportunity {
                        focus: Some("Ecosystem-based solutions".to_string()),
                        ..FundingOpportunity::new(
                            "Global Environment Facility",
                            "$15M",
                            "October 2025",
                        )
                    },
                ],
            )
    }

    pub fn with_flood_risk(mut self, country: &str, record: FloodRiskRecord) -> Self {
        self.flood_risks.insert(country.to_string(), record);
        self
    }

    pub fn with_policy_recommendations(
        mut self,
        group: &str,
        record: PolicyRecommendationRecord,
    ) -> Self {
        self.policy_recommendations.insert(group.to_string(), record);
        self
    }

    pub fn with_funding_opportunities(
        mut self,
        group: &str,
        opportunities: Vec<FundingOpportunity>,
    ) -> Self {
        self.funding_opportunities
            .insert(group.to_string(), opportunities);
        self
    }

    pub fn flood_risk(&self, country: &str) -> Option<&FloodRiskRecord> {
        self.flood_risks.get(country)
    }

    pub fn policy_recommendations(&self, group: &str) -> Option<&PolicyRecommendationRecord> {
        self.policy_recommendations.get(group)
    }

    pub fn funding_opportunities(&self, group: &str) -> Option<&[FundingOpportunity]> {
        self.funding_opportunities.get(group).map(Vec::as_slice)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
