//! User-facing feedback text.
//!
//! Validation returns structured results; this is the one place that turns
//! them into the inline messages shown next to a URL field.

use crate::result::{InvalidReason, ValidationResult};
use crate::rules::FilingRules;

/// Shown when the URL is accepted.
pub const VALID_MARK: &str = "✅";

/// Shown for malformed URLs and for URLs that match no filing record.
pub const INVALID_URL: &str = "⚠️ Invalid SEC filing URL";

/// Shown when the issuer's filing index could not be retrieved.
pub const UNABLE_TO_VALIDATE: &str = "⚠️ Unable to validate URL";

/// Render a result as inline feedback: a check mark or a warning.
pub fn render(result: &ValidationResult, rules: &FilingRules) -> String {
    match result {
        ValidationResult::Valid => VALID_MARK.to_string(),
        ValidationResult::Invalid(reason) => warning(reason, rules),
    }
}

/// Warning text for a rejection.
pub fn warning(reason: &InvalidReason, rules: &FilingRules) -> String {
    match reason {
        InvalidReason::MalformedUrl
        | InvalidReason::DocumentNotFound
        | InvalidReason::AccessionMismatch => INVALID_URL.to_string(),
        InvalidReason::LookupFailed => UNABLE_TO_VALIDATE.to_string(),
        InvalidReason::WrongFilingType(actual) => format!(
            "⚠️ Invalid filing type {}. Please only use {} filings.",
            actual,
            join_or(&rules.accepted_types)
        ),
        InvalidReason::TooOld(actual) => format!(
            "⚠️ Document was filed on {}. Please do not use filings from before {}.",
            actual,
            rules.earliest_filing_date.format("%B %-d, %Y")
        ),
    }
}

impl ValidationResult {
    /// Warning text, or an empty string when valid.
    pub fn message_or_empty(&self, rules: &FilingRules) -> String {
        match self {
            Self::Valid => String::new(),
            Self::Invalid(reason) => warning(reason, rules),
        }
    }
}

/// "A", "A or B", "A, B or C".
fn join_or(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} or {}", head.join(", "), last),
    }
}
