pub mod catalog;
pub mod config;
pub mod error;
pub mod initializer;
pub mod types;

pub use catalog::{dataset_catalog, DatasetDescriptor};
pub use config::GuardianConfig;
pub use error::{GuardianError, Result};
pub use initializer::DatasetInitializer;
pub use types::*;
