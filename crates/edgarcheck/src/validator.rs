//! Filing URL validation.

use crate::config::ValidatorConfig;
use crate::filing_url::{ParseMode, ParsedFilingRef, normalize};
use crate::result::{InvalidReason, ValidationResult};
use crate::rules::FilingRules;
use edgarcheck_data::edgar::{EdgarClient, SubmissionsSource};
use tracing::{debug, warn};

/// Checks that a URL points to an accepted EDGAR filing.
///
/// Steps, in order: unwrap the viewer, match the archive URL shape, fetch the
/// issuer's filing index, find the record for the document, cross-check the
/// accession number (strict mode), then apply [`FilingRules`]. The URL shape
/// is checked before any network access.
///
/// # Example
/// ```no_run
/// use edgarcheck::{FilingUrlValidator, ValidationResult};
/// use edgarcheck::data::edgar::EdgarClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let validator = FilingUrlValidator::new(EdgarClient::new()?);
/// let result = validator
///     .validate("https://www.sec.gov/ix?doc=/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm")
///     .await;
/// assert_eq!(result, ValidationResult::Valid);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FilingUrlValidator<S> {
    source: S,
    mode: ParseMode,
    rules: FilingRules,
}

impl FilingUrlValidator<EdgarClient> {
    /// Build a validator backed by a live EDGAR client from `config`.
    pub fn from_config(config: &ValidatorConfig) -> edgarcheck_data::Result<Self> {
        let client = EdgarClient::with_config(config.client_config())?;
        Ok(Self::new(client)
            .with_mode(config.mode)
            .with_rules(config.rules()))
    }
}

impl<S: SubmissionsSource> FilingUrlValidator<S> {
    /// Strict validator with the default rules.
    pub fn new(source: S) -> Self {
        Self {
            source,
            mode: ParseMode::Strict,
            rules: FilingRules::default(),
        }
    }

    /// Set the parse mode.
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the business rules.
    pub fn with_rules(mut self, rules: FilingRules) -> Self {
        self.rules = rules;
        self
    }

    /// Parse mode in use.
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Rules in use; also needed to render messages.
    pub const fn rules(&self) -> &FilingRules {
        &self.rules
    }

    /// Underlying filing index source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Validate one URL. Every failure is reported as a classified
    /// [`ValidationResult::Invalid`]; nothing is returned as an error.
    pub async fn validate(&self, url: &str) -> ValidationResult {
        let result = self.check(url).await.into();
        debug!(url, ?result, "validated filing URL");
        result
    }

    async fn check(&self, url: &str) -> Result<(), InvalidReason> {
        let normalized = normalize(url);
        let parsed =
            ParsedFilingRef::parse(&normalized, self.mode).ok_or(InvalidReason::MalformedUrl)?;

        let index = self.source.fetch_index(&parsed.cik).await.map_err(|e| {
            warn!(cik = %parsed.cik, error = %e, "filing index lookup failed");
            InvalidReason::LookupFailed
        })?;

        let record = index
            .find_by_document(&parsed.document)
            .ok_or(InvalidReason::DocumentNotFound)?;

        if let Some(accession) = &parsed.accession
            && record.accession_without_dashes() != *accession
        {
            return Err(InvalidReason::AccessionMismatch);
        }

        self.rules.check(record)
    }
}
