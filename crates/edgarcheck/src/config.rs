//! Validator configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! mode = "strict"
//! accepted_types = ["10-K", "10-Q"]
//! earliest_filing_date = "2023-10-01"
//!
//! [edgar]
//! base_url = "https://data.sec.gov"
//! user_agent = "edgarcheck/0.1 (contact@example.com)"
//! timeout_secs = 30
//! min_interval_ms = 100
//! ```

use crate::filing_url::ParseMode;
use crate::rules::{DEFAULT_ACCEPTED_TYPES, FilingRules, default_earliest_filing_date};
use chrono::NaiveDate;
use edgarcheck_data::edgar::ClientConfig;
use edgarcheck_data::edgar::client::{DEFAULT_RATE_LIMIT, DEFAULT_TIMEOUT, EDGAR_BASE_URL, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config parsed but a value is unusable
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// EDGAR connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgarSettings {
    /// Submissions API base URL
    pub base_url: String,
    /// Identifying User-Agent (SEC requires contact information)
    pub user_agent: String,
    /// Transport timeout in seconds
    pub timeout_secs: u64,
    /// Minimum milliseconds between requests
    pub min_interval_ms: u64,
}

impl Default for EdgarSettings {
    fn default() -> Self {
        Self {
            base_url: EDGAR_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            min_interval_ms: DEFAULT_RATE_LIMIT.as_millis() as u64,
        }
    }
}

/// Validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Whether the accession number segment is cross-checked
    pub mode: ParseMode,
    /// Accepted primary document descriptions
    pub accepted_types: Vec<String>,
    /// Filings before this date are rejected
    pub earliest_filing_date: NaiveDate,
    /// EDGAR connection settings
    pub edgar: EdgarSettings,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::default(),
            accepted_types: DEFAULT_ACCEPTED_TYPES.iter().map(|t| t.to_string()).collect(),
            earliest_filing_date: default_earliest_filing_date(),
            edgar: EdgarSettings::default(),
        }
    }
}

impl ValidatorConfig {
    /// Parse and check a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()?;
        Ok(config)
    }

    /// Read, parse and check a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject values that would make every URL fail or every request invalid.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.accepted_types.is_empty() {
            return Err(ConfigError::Invalid(
                "accepted_types must name at least one filing type".to_string(),
            ));
        }
        if self.edgar.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "edgar.user_agent must not be empty".to_string(),
            ));
        }
        if self.edgar.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "edgar.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Business rules described by this configuration.
    pub fn rules(&self) -> FilingRules {
        FilingRules {
            accepted_types: self.accepted_types.clone(),
            earliest_filing_date: self.earliest_filing_date,
        }
    }

    /// EDGAR client settings described by this configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.edgar.base_url.clone(),
            user_agent: self.edgar.user_agent.clone(),
            timeout: Duration::from_secs(self.edgar.timeout_secs),
            min_interval: Duration::from_millis(self.edgar.min_interval_ms),
        }
    }
}
