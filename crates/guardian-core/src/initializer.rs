//! Dataset initialization.
//!
//! Writes a metadata file and a sample-data file for every catalog entry,
//! then a summary report, into the configured data directory. No remote API
//! is contacted; `api_available` only records whether an endpoint is known.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::catalog::{dataset_catalog, DatasetDescriptor};
use crate::config::GuardianConfig;
use crate::error::{GuardianError, Result};

/// File name of the summary report inside the data directory.
pub const REPORT_FILE: &str = "initialization_report.json";

const NEXT_STEPS: [&str; 4] = [
    "Configure IBM watsonx.ai credentials",
    "Set up vector database for RAG",
    "Implement real-time data fetching",
    "Deploy to production environment",
];

#[derive(Debug, Serialize)]
struct DatasetMetadata<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    url: &'a str,
    license: &'a str,
    update_frequency: &'a str,
    last_updated: String,
    status: &'a str,
    api_available: bool,
}

/// Counts written into the summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitializationSummary {
    pub timestamp: String,
    pub total_datasets: usize,
    pub successful: usize,
    pub failed: usize,
    pub success_rate: String,
}

impl InitializationSummary {
    fn from_results(results: &BTreeMap<String, bool>) -> Self {
        let total = results.len();
        let successful = results.values().filter(|ok| **ok).count();
        let rate = if total == 0 {
            0.0
        } else {
            successful as f64 / total as f64 * 100.0
        };
        Self {
            timestamp: Utc::now().to_rfc3339(),
            total_datasets: total,
            successful,
            failed: total - successful,
            success_rate: format!("{:.1}%", rate),
        }
    }
}

#[derive(Debug, Serialize)]
struct InitializationReport<'a> {
    initialization_summary: &'a InitializationSummary,
    dataset_status: &'a BTreeMap<String, bool>,
    next_steps: &'a [&'a str],
}

/// Initializes the on-disk dataset fixtures.
pub struct DatasetInitializer {
    data_dir: PathBuf,
    datasets: &'static [DatasetDescriptor],
}

impl DatasetInitializer {
    /// Create an initializer writing into `data_dir`, creating it if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self {
            data_dir,
            datasets: dataset_catalog(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Check that the production credentials are configured.
    ///
    /// Returns false, with a warning, when any of them is missing.
    pub fn validate_environment(&self, config: &GuardianConfig) -> bool {
        info!("Validating environment");
        let missing = config.missing_credentials();
        if missing.is_empty() {
            info!("Environment validation passed");
            return true;
        }
        warn!(
            missing = %missing.join(", "),
            "Missing environment variables (required for production deployment)"
        );
        false
    }

    /// Initialize every catalog dataset and write the summary report.
    ///
    /// A failing dataset is recorded as `false` and does not stop the run.
    /// Only a failure to write the report itself is returned as an error.
    pub fn initialize_all(&self) -> Result<BTreeMap<String, bool>> {
        info!(count = self.datasets.len(), "Starting dataset initialization");

        let mut results = BTreeMap::new();
        for dataset in self.datasets {
            info!(dataset = dataset.name, "Initializing dataset");
            let ok = match self.initialize_dataset(dataset) {
                Ok(()) => {
                    info!(dataset = dataset.name, "Dataset initialized");
                    true
                }
                Err(e) => {
                    error!(dataset = dataset.name, error = %e, "Dataset initialization failed");
                    false
                }
            };
            results.insert(dataset.id.to_string(), ok);
        }

        let summary = self.write_report(&results)?;
        info!(
            successful = summary.successful,
            total = summary.total_datasets,
            "Initialization complete"
        );
        Ok(results)
    }

    /// Write the metadata and sample files for a single dataset.
    pub fn initialize_dataset(&self, dataset: &DatasetDescriptor) -> Result<()> {
        let metadata = DatasetMetadata {
            id: dataset.id,
            name: dataset.name,
            description: dataset.description,
            url: dataset.url,
            license: dataset.license,
            update_frequency: dataset.update_frequency,
            last_updated: Utc::now().to_rfc3339(),
            status: "initialized",
            api_available: dataset.api_endpoint.is_some(),
        };
        let metadata_path = self.data_dir.join(format!("{}_metadata.json", dataset.id));
        std::fs::write(&metadata_path, serde_json::to_string_pretty(&metadata)?)?;

        if let Some(sample) = sample_data(dataset.id) {
            let sample_path = self.data_dir.join(format!("{}_sample.json", dataset.id));
            std::fs::write(&sample_path, serde_json::to_string_pretty(&sample)?)?;
        }
        Ok(())
    }

    fn write_report(&self, results: &BTreeMap<String, bool>) -> Result<InitializationSummary> {
        let summary = InitializationSummary::from_results(results);
        let report = InitializationReport {
            initialization_summary: &summary,
            dataset_status: results,
            next_steps: &NEXT_STEPS,
        };
        let path = self.data_dir.join(REPORT_FILE);
        let body = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, body).map_err(|e| {
            GuardianError::Initialization(format!("writing {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "Report saved");
        Ok(summary)
    }
}

/// Built-in sample rows for a dataset id.
pub fn sample_data(dataset_id: &str) -> Option<serde_json::Value> {
    let value = match dataset_id {
        "nd_gain" => json!({
            "countries": [
                {"country": "Bangladesh", "vulnerability_score": 0.72, "readiness_score": 0.31},
                {"country": "Netherlands", "vulnerability_score": 0.28, "readiness_score": 0.89},
                {"country": "Maldives", "vulnerability_score": 0.85, "readiness_score": 0.42}
            ]
        }),
        "noaa_climate" => json!({
            "temperature_trends": [
                {"region": "Global", "year": 2023, "anomaly": 1.2},
                {"region": "Arctic", "year": 2023, "anomaly": 2.8},
                {"region": "Tropical", "year": 2023, "anomaly": 0.9}
            ]
        }),
        "openaq" => json!({
            "air_quality": [
                {"city": "Delhi", "pm25": 89.5, "timestamp": "2024-01-01T00:00:00Z"},
                {"city": "Beijing", "pm25": 67.2, "timestamp": "2024-01-01T00:00:00Z"},
                {"city": "Los Angeles", "pm25": 23.1, "timestamp": "2024-01-01T00:00:00Z"}
            ]
        }),
        "climate_trace" => json!({
            "emissions": [
                {"country": "China", "co2_emissions_mt": 10175, "year": 2022},
                {"country": "United States", "co2_emissions_mt": 5007, "year": 2022},
                {"country": "India", "co2_emissions_mt": 2654, "year": 2022}
            ]
        }),
        "climate_watch" => json!({
            "ndc_progress": [
                {"country": "Costa Rica", "target": "Carbon neutral by 2050", "progress": 0.65},
                {"country": "Denmark", "target": "70% reduction by 2030", "progress": 0.78},
                {"country": "Bhutan", "target": "Carbon negative", "progress": 1.0}
            ]
        }),
        "un_sdg13" => json!({
            "climate_indicators": [
                {"indicator": "Climate finance mobilized", "value": 83.3, "unit": "billion USD", "year": 2022},
                {"indicator": "Countries with NDCs", "value": 195, "unit": "count", "year": 2023},
                {"indicator": "Renewable energy capacity", "value": 3372, "unit": "GW", "year": 2022}
            ]
        }),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_json(path: &Path) -> serde_json::Value {
        let content = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_new_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("fresh").join("data");
        let init = DatasetInitializer::new(&data_dir).unwrap();
        assert!(data_dir.is_dir());
        assert_eq!(init.data_dir(), data_dir.as_path());
    }

    #[test]
    fn test_initialize_all_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let init = DatasetInitializer::new(dir.path()).unwrap();

        let results = init.initialize_all().unwrap();
        assert_eq!(results.len(), 6);
        assert!(results.values().all(|ok| *ok));

        for dataset in dataset_catalog() {
            assert!(dir
                .path()
                .join(format!("{}_metadata.json", dataset.id))
                .exists());
            assert!(dir
                .path()
                .join(format!("{}_sample.json", dataset.id))
                .exists());
        }
        assert!(dir.path().join(REPORT_FILE).exists());
    }

    #[test]
    fn test_metadata_contents() {
        let dir = tempfile::tempdir().unwrap();
        let init = DatasetInitializer::new(dir.path()).unwrap();
        init.initialize_all().unwrap();

        let openaq = read_json(&dir.path().join("openaq_metadata.json"));
        assert_eq!(openaq["id"], "openaq");
        assert_eq!(openaq["name"], "OpenAQ");
        assert_eq!(openaq["status"], "initialized");
        assert_eq!(openaq["api_available"], true);

        let nd_gain = read_json(&dir.path().join("nd_gain_metadata.json"));
        assert_eq!(nd_gain["api_available"], false);
        assert!(nd_gain["last_updated"].as_str().is_some());
    }

    #[test]
    fn test_sample_contents() {
        let dir = tempfile::tempdir().unwrap();
        let init = DatasetInitializer::new(dir.path()).unwrap();
        init.initialize_all().unwrap();

        let sample = read_json(&dir.path().join("nd_gain_sample.json"));
        assert_eq!(sample["countries"][0]["country"], "Bangladesh");
        assert_eq!(sample["countries"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_report_contents() {
        let dir = tempfile::tempdir().unwrap();
        let init = DatasetInitializer::new(dir.path()).unwrap();
        init.initialize_all().unwrap();

        let report = read_json(&dir.path().join(REPORT_FILE));
        let summary = &report["initialization_summary"];
        assert_eq!(summary["total_datasets"], 6);
        assert_eq!(summary["successful"], 6);
        assert_eq!(summary["failed"], 0);
        assert_eq!(summary["success_rate"], "100.0%");
        assert_eq!(report["dataset_status"]["un_sdg13"], true);
        assert_eq!(report["next_steps"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_summary_rate_formatting() {
        let mut results = BTreeMap::new();
        results.insert("a".to_string(), true);
        results.insert("b".to_string(), false);
        results.insert("c".to_string(), false);
        let summary = InitializationSummary::from_results(&results);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.success_rate, "33.3%");

        let empty = InitializationSummary::from_results(&BTreeMap::new());
        assert_eq!(empty.success_rate, "0.0%");
    }

    #[test]
    fn test_unknown_dataset_has_no_sample() {
        assert!(sample_data("unknown").is_none());
        assert!(sample_data("climate_watch").is_some());
    }

    #[test]
    fn test_validate_environment() {
        let dir = tempfile::tempdir().unwrap();
        let init = DatasetInitializer::new(dir.path()).unwrap();

        let mut config = GuardianConfig::default();
        assert!(!init.validate_environment(&config));

        config.watsonx.api_key = Some("key".to_string());
        config.watsonx.project_id = Some("project".to_string());
        assert!(init.validate_environment(&config));
    }
}
