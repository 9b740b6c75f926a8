//! EDGAR identifiers.

use crate::error::{DataError, Result};
use derive_more::Display;

/// Central Index Key, stored in its canonical 10-digit zero-padded form.
///
/// # Example
/// ```
/// # use edgarcheck_data::edgar::Cik;
/// let cik = Cik::parse("47217").unwrap();
/// assert_eq!(cik.padded(), "0000047217");
/// assert_eq!(cik.unpadded(), "47217");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Cik(String);

impl Cik {
    /// Width of a canonical CIK.
    pub const WIDTH: usize = 10;

    /// Parse a CIK from 1 to 10 ASCII digits, padded or not.
    ///
    /// # Errors
    /// Returns `DataError::InvalidCik` for empty input, non-digits, or more
    /// than ten digits.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || raw.len() > Self::WIDTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DataError::InvalidCik(raw.to_string()));
        }
        Ok(Self(format!("{:0>10}", raw)))
    }

    /// The zero-padded 10-digit form used in data.sec.gov URLs.
    pub fn padded(&self) -> &str {
        &self.0
    }

    /// The CIK without leading zeros, as it appears in archive paths.
    pub fn unpadded(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }
}

impl TryFrom<u64> for Cik {
    type Error = DataError;

    fn try_from(value: u64) -> Result<Self> {
        Self::parse(&value.to_string())
    }
}

/// Remove dashes from an accession number (`0000047217-24-000024` becomes
/// `000004721724000024`).
pub fn strip_dashes(accession: &str) -> String {
    accession.replace('-', "")
}
