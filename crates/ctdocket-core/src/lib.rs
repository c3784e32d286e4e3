pub mod app_config;
pub mod config;
pub mod records;

use chrono::NaiveDate;
use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{CaseCategory, CaseRecord, DateRange, PartyInfo, PartyRole};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported case category \"{0}\": expected \"civil\" or \"family\"")]
    UnknownCategory(String),

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
