#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/edgarcheck/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod filing_url;
pub mod message;
pub mod result;
pub mod rules;
pub mod validator;

// Re-export the data crate
pub use edgarcheck_data as data;

pub use config::{ConfigError, EdgarSettings, ValidatorConfig};
pub use filing_url::{ParseMode, ParsedFilingRef};
pub use result::{InvalidReason, ValidationResult};
pub use rules::FilingRules;
pub use validator::FilingUrlValidator;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
