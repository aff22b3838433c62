//! Static catalog of the public climate datasets ClimateGuardian cites.
//!
//! The catalog backs the datasets endpoint and the dataset initializer. It is
//! descriptive only: the assistant answers from its own mock records and
//! never reads these datasets.

use serde::Serialize;

/// Metadata describing one public dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetDescriptor {
    /// Stable identifier used for initializer file names.
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub update_frequency: &'static str,
    pub url: &'static str,
    /// Programmatic endpoint, when the dataset publishes one.
    #[serde(skip)]
    pub api_endpoint: Option<&'static str>,
}

static CATALOG: [DatasetDescriptor; 6] = [
    DatasetDescriptor {
        id: "nd_gain",
        name: "ND-GAIN",
        description: "Climate vulnerability and readiness index",
        license: "CC BY 4.0",
        update_frequency: "Annual",
        url: "https://gain.nd.edu/our-work/country-index/",
        api_endpoint: None,
    },
    DatasetDescriptor {
        id: "noaa_climate",
        name: "NOAA Climate Data",
        description: "Historical weather and climate records",
        license: "Public Domain",
        update_frequency: "Daily/Monthly",
        url: "https://www.ncei.noaa.gov/products",
        api_endpoint: None,
    },
    DatasetDescriptor {
        id: "openaq",
        name: "OpenAQ",
        description: "Global air quality measurements",
        license: "CC BY 4.0",
        update_frequency: "Real-time",
        url: "https://openaq.org/",
        api_endpoint: Some("https://api.openaq.org/v2/"),
    },
    DatasetDescriptor {
        id: "climate_trace",
        name: "Climate TRACE",
        description: "Greenhouse gas emissions data",
        license: "CC BY 4.0",
        update_frequency: "Annual",
        url: "https://climatetrace.org/",
        api_endpoint: None,
    },
    DatasetDescriptor {
        id: "climate_watch",
        name: "Climate Watch",
        description: "Climate policy and NDC tracking",
        license: "CC BY 4.0",
        update_frequency: "Quarterly",
        url: "https://www.climatewatchdata.org/",
        api_endpoint: None,
    },
    DatasetDescriptor {
        id: "un_sdg13",
        name: "UN SDG 13 Indicators",
        description: "Climate action progress metrics",
        license: "CC BY 3.0",
        update_frequency: "Annual",
        url: "https://unstats.un.org/sdgs/indicators/database/",
        api_endpoint: None,
    },
];

/// All catalog entries in display order.
pub fn dataset_catalog() -> &'static [DatasetDescriptor] {
    &CATALOG
}
