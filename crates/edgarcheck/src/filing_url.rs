//! Lexical handling of EDGAR filing URLs.
//!
//! Two steps, both pure: [`normalize`] unwraps the inline XBRL viewer, then
//! [`ParsedFilingRef::parse`] matches the archive document shape
//! `https://www.sec.gov/Archives/edgar/data/{CIK}/{ACCESSION}/{DOCUMENT}`.
//! Nothing here is checked against EDGAR itself.

use edgarcheck_data::edgar::Cik;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Path segment the inline XBRL viewer inserts in front of the archive path.
pub const VIEWER_WRAPPER: &str = "ix?doc=/";

static FILING_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.sec\.gov/Archives/edgar/data/([^/]+)/([^/]+)/([^/]+)$")
        .expect("filing URL pattern is a valid regex")
});

/// Strip every viewer-wrapper segment, turning
/// `https://www.sec.gov/ix?doc=/Archives/...` into `https://www.sec.gov/Archives/...`.
///
/// Idempotent: normalizing an already normalized URL returns it unchanged.
///
/// # Example
/// ```
/// use edgarcheck::filing_url::normalize;
///
/// assert_eq!(
///     normalize("https://www.sec.gov/ix?doc=/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm"),
///     "https://www.sec.gov/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm"
/// );
/// ```
pub fn normalize(url: &str) -> Cow<'_, str> {
    if !url.contains(VIEWER_WRAPPER) {
        return Cow::Borrowed(url);
    }
    let mut normalized = url.replace(VIEWER_WRAPPER, "");
    // Removal can splice a new wrapper together ("ix?doix?doc=/c=/").
    while normalized.contains(VIEWER_WRAPPER) {
        normalized = normalized.replace(VIEWER_WRAPPER, "");
    }
    Cow::Owned(normalized)
}

/// Which captured URL segments are later cross-checked against EDGAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// CIK, accession number and document are all checked.
    #[default]
    Strict,
    /// Only CIK and document are checked; the accession segment must exist
    /// but may be anything.
    Lenient,
}

/// Identifying fields of a filing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilingRef {
    /// Issuer CIK, zero-padded
    pub cik: Cik,
    /// Accession number segment as written in the URL; `None` in lenient mode
    pub accession: Option<String>,
    /// Document filename
    pub document: String,
}

impl ParsedFilingRef {
    /// Match a normalized URL against the archive document pattern.
    ///
    /// Returns `None` for the wrong scheme or host, a path outside
    /// `/Archives/edgar/data/`, anything other than exactly three non-empty
    /// segments after it, or a CIK segment that is not 1-10 digits.
    pub fn parse(url: &str, mode: ParseMode) -> Option<Self> {
        let caps = FILING_URL.captures(url)?;
        let cik = Cik::parse(&caps[1]).ok()?;
        let accession = match mode {
            ParseMode::Strict => Some(caps[2].to_string()),
            ParseMode::Lenient => None,
        };

        Some(Self {
            cik,
            accession,
            document: caps[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DIRECT: &str =
        "https://www.sec.gov/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm";
    const WRAPPED: &str =
        "https://www.sec.gov/ix?doc=/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm";

    #[test]
    fn test_normalize_strips_viewer() {
        assert_eq!(normalize(WRAPPED), DIRECT);
        assert!(matches!(normalize(DIRECT), Cow::Borrowed(_)));
    }

    #[rstest]
    #[case(DIRECT)]
    #[case(WRAPPED)]
    #[case("https://www.sec.gov/ix?doix?doc=/c=/Archives/edgar/data/1/2/a.htm")]
    #[case("not a url")]
    fn test_normalize_idempotent(#[case] url: &str) {
        let once = normalize(url).into_owned();
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_parse_strict() {
        let parsed = ParsedFilingRef::parse(DIRECT, ParseMode::Strict).unwrap();
        assert_eq!(parsed.cik.padded(), "0000047217");
        assert_eq!(parsed.accession.as_deref(), Some("000004721724000024"));
        assert_eq!(parsed.document, "hpq-20240131.htm");
    }

    #[test]
    fn test_parse_lenient_drops_accession() {
        let parsed = ParsedFilingRef::parse(DIRECT, ParseMode::Lenient).unwrap();
        assert_eq!(parsed.cik.padded(), "0000047217");
        assert!(parsed.accession.is_none());
        assert_eq!(parsed.document, "hpq-20240131.htm");
    }

    #[rstest]
    #[case::wrapped_not_normalized(WRAPPED)]
    #[case::http("http://www.sec.gov/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm")]
    #[case::bare_host("https://sec.gov/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm")]
    #[case::lookalike_host("https://wwwxsec.gov/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm")]
    #[case::prefixed("see https://www.sec.gov/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm")]
    #[case::missing_segment("https://www.sec.gov/Archives/edgar/data/47217/hpq-20240131.htm")]
    #[case::extra_segment("https://www.sec.gov/Archives/edgar/data/47217/000004721724000024/x/hpq-20240131.htm")]
    #[case::trailing_slash("https://www.sec.gov/Archives/edgar/data/47217/000004721724000024/")]
    #[case::empty_segment("https://www.sec.gov/Archives/edgar/data/47217//hpq-20240131.htm")]
    #[case::wrong_prefix("https://www.sec.gov/cgi-bin/browse-edgar/47217/000004721724000024/hpq-20240131.htm")]
    #[case::non_numeric_cik("https://www.sec.gov/Archives/edgar/data/hpq/000004721724000024/hpq-20240131.htm")]
    #[case::long_cik("https://www.sec.gov/Archives/edgar/data/12345678901/000004721724000024/hpq-20240131.htm")]
    #[case::empty("")]
    fn test_parse_rejects(#[case] url: &str) {
        assert!(ParsedFilingRef::parse(url, ParseMode::Strict).is_none());
        assert!(ParsedFilingRef::parse(url, ParseMode::Lenient).is_none());
    }
}
