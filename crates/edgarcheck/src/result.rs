//! Validation outcomes.

use thiserror::Error;

/// Why a filing URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// URL does not have the EDGAR archive document shape
    #[error("URL is not an EDGAR archive document URL")]
    MalformedUrl,

    /// Issuer filing index could not be fetched or decoded
    #[error("issuer filing index could not be retrieved")]
    LookupFailed,

    /// No recent filing has this primary document
    #[error("document is not a primary document in the issuer's recent filings")]
    DocumentNotFound,

    /// Document exists, but under a different accession number
    #[error("accession number does not match the filing record")]
    AccessionMismatch,

    /// Filing type is not accepted
    #[error("filing type {0} is not accepted")]
    WrongFilingType(String),

    /// Filing date precedes the cutoff
    #[error("filed on {0}, before the earliest accepted date")]
    TooOld(String),
}

impl InvalidReason {
    /// Stable kebab-case code for the reason.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedUrl => "malformed-url",
            Self::LookupFailed => "lookup-failed",
            Self::DocumentNotFound => "document-not-found",
            Self::AccessionMismatch => "accession-mismatch",
            Self::WrongFilingType(_) => "wrong-filing-type",
            Self::TooOld(_) => "too-old",
        }
    }

    /// The offending value found in EDGAR, for reasons that carry one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::WrongFilingType(actual) | Self::TooOld(actual) => Some(actual),
            _ => None,
        }
    }
}

/// Outcome of validating one filing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// URL points to an accepted filing
    Valid,
    /// URL was rejected
    Invalid(InvalidReason),
}

impl ValidationResult {
    /// Whether the URL was accepted.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Rejection reason, if any.
    pub const fn reason(&self) -> Option<&InvalidReason> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}

impl From<Result<(), InvalidReason>> for ValidationResult {
    fn from(result: Result<(), InvalidReason>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(reason) => Self::Invalid(reason),
        }
    }
}
