//! Business rules applied to a matched filing record.

use crate::result::InvalidReason;
use chrono::NaiveDate;
use edgarcheck_data::edgar::FilingRecord;
use tracing::warn;

/// Filing types accepted by default: annual and quarterly reports.
pub const DEFAULT_ACCEPTED_TYPES: [&str; 2] = ["10-K", "10-Q"];

/// Earliest accepted filing date by default (2023-10-01).
pub fn default_earliest_filing_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 1).expect("2023-10-01 is a valid date")
}

/// Which filings are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRules {
    /// Exact primary document descriptions that are accepted
    pub accepted_types: Vec<String>,
    /// Filings before this date are rejected
    pub earliest_filing_date: NaiveDate,
}

impl Default for FilingRules {
    fn default() -> Self {
        Self {
            accepted_types: DEFAULT_ACCEPTED_TYPES.iter().map(|t| t.to_string()).collect(),
            earliest_filing_date: default_earliest_filing_date(),
        }
    }
}

impl FilingRules {
    /// Check a record: filing type first, then filing date.
    ///
    /// # Errors
    /// `InvalidReason::WrongFilingType` with the record's description, or
    /// `InvalidReason::TooOld` with its filing date as published. A filing
    /// date that is not `YYYY-MM-DD` cannot be checked and gives
    /// `InvalidReason::LookupFailed`.
    pub fn check(&self, record: &FilingRecord) -> Result<(), InvalidReason> {
        if !self.accepts_type(&record.description) {
            return Err(InvalidReason::WrongFilingType(record.description.clone()));
        }
        let Some(filed_on) = record.filed_on() else {
            warn!(
                document = %record.primary_document,
                filing_date = %record.filing_date,
                "unreadable filing date"
            );
            return Err(InvalidReason::LookupFailed);
        };
        if filed_on < self.earliest_filing_date {
            return Err(InvalidReason::TooOld(record.filing_date.clone()));
        }
        Ok(())
    }

    /// Whether `description` is one of the accepted types (exact match).
    pub fn accepts_type(&self, description: &str) -> bool {
        self.accepted_types.iter().any(|t| t == description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(description: &str, filed: &str) -> FilingRecord {
        FilingRecord {
            accession_number: "0000047217-24-000024".to_string(),
            primary_document: "hpq-20240131.htm".to_string(),
            description: description.to_string(),
            form: description.to_string(),
            filing_date: filed.to_string(),
            report_date: String::new(),
        }
    }

    #[rstest]
    #[case("10-Q", "2024-01-31")]
    #[case("10-K", "2023-10-01")]
    fn test_accepts(#[case] description: &str, #[case] filed: &str) {
        assert_eq!(FilingRules::default().check(&record(description, filed)), Ok(()));
    }

    #[rstest]
    #[case("8-K")]
    #[case("10-K/A")]
    #[case("10-q")]
    #[case(" 10-Q")]
    #[case("")]
    fn test_rejects_type(#[case] description: &str) {
        assert_eq!(
            FilingRules::default().check(&record(description, "2024-01-31")),
            Err(InvalidReason::WrongFilingType(description.to_string()))
        );
    }

    #[test]
    fn test_rejects_day_before_cutoff() {
        assert_eq!(
            FilingRules::default().check(&record("10-Q", "2023-09-30")),
            Err(InvalidReason::TooOld("2023-09-30".to_string()))
        );
    }

    #[test]
    fn test_type_checked_before_date() {
        assert_eq!(
            FilingRules::default().check(&record("8-K", "2020-01-01")),
            Err(InvalidReason::WrongFilingType("8-K".to_string()))
        );
    }

    #[rstest]
    #[case("")]
    #[case("2024-02-30")]
    #[case("01/31/2024")]
    fn test_unreadable_date_cannot_be_checked(#[case] filed: &str) {
        assert_eq!(
            FilingRules::default().check(&record("10-Q", filed)),
            Err(InvalidReason::LookupFailed)
        );
    }

    #[test]
    fn test_unreadable_date_on_wrong_type_reports_type() {
        assert_eq!(
            FilingRules::default().check(&record("8-K", "")),
            Err(InvalidReason::WrongFilingType("8-K".to_string()))
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = FilingRules {
            accepted_types: vec!["8-K".to_string()],
            earliest_filing_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        assert_eq!(rules.check(&record("8-K", "2021-06-01")), Ok(()));
        assert!(rules.check(&record("10-K", "2021-06-01")).is_err());
    }
}
