//! SEC EDGAR submissions index.
//!
//! The submissions API describes an issuer's recent filings as parallel arrays
//! where the i-th element of each array belongs to the same filing. This
//! module deserializes that shape and zips it into a [`FilingIndex`] of
//! [`FilingRecord`]s once, so nothing downstream indexes the arrays directly.

use crate::edgar::ids::{Cik, strip_dashes};
use crate::error::{DataError, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Raw submissions document as returned by `data.sec.gov`.
#[derive(Debug, Clone, Deserialize)]
pub struct Submissions {
    /// Central Index Key (unpadded in practice)
    #[serde(default)]
    pub cik: String,
    /// Company name
    #[serde(default)]
    pub name: String,
    /// Filing history
    pub filings: FilingHistory,
}

/// Container for filing history data.
#[derive(Debug, Clone, Deserialize)]
pub struct FilingHistory {
    /// Recent filings
    pub recent: RecentFilings,
}

/// Recent filings as parallel arrays.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFilings {
    /// Accession numbers (dashed)
    pub accession_number: Vec<String>,
    /// Filing dates in YYYY-MM-DD format
    pub filing_date: Vec<String>,
    /// Primary document filenames
    pub primary_document: Vec<String>,
    /// Primary document descriptions (e.g. "10-Q", "10-K", "8-K")
    pub primary_doc_description: Vec<String>,
    /// Form types
    #[serde(default)]
    pub form: Vec<String>,
    /// Report (period) dates
    #[serde(default)]
    pub report_date: Vec<String>,
}

/// One filing from an issuer's recent filings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingRecord {
    /// Accession number as published (dashed)
    pub accession_number: String,
    /// Primary document filename
    pub primary_document: String,
    /// Primary document description
    pub description: String,
    /// Form type, empty when the index omits it
    pub form: String,
    /// Filing date as published (`YYYY-MM-DD`), unchecked
    pub filing_date: String,
    /// Report date, empty when absent
    pub report_date: String,
}

/// An issuer's recent filings, one record per filing, in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingIndex {
    /// Issuer CIK as reported by EDGAR
    pub cik: String,
    /// Issuer name
    pub name: String,
    /// Filings, most recent first as published
    pub records: Vec<FilingRecord>,
}

impl Submissions {
    /// Parse a submissions JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Zip the parallel arrays into a [`FilingIndex`].
    ///
    /// # Errors
    /// Returns `DataError::RaggedIndex` when a required array's length differs
    /// from `accessionNumber`, or when an optional array is present with a
    /// different length. Field contents are not checked here; a bad value in
    /// one record does not affect the others.
    pub fn into_index(self) -> Result<FilingIndex> {
        let recent = self.filings.recent;
        let expected = recent.accession_number.len();

        check_len("filingDate", expected, recent.filing_date.len(), false)?;
        check_len("primaryDocument", expected, recent.primary_document.len(), false)?;
        check_len("primaryDocDescription", expected, recent.primary_doc_description.len(), false)?;
        check_len("form", expected, recent.form.len(), true)?;
        check_len("reportDate", expected, recent.report_date.len(), true)?;

        let mut forms = recent.form.into_iter();
        let mut report_dates = recent.report_date.into_iter();

        let records = recent
            .accession_number
            .into_iter()
            .zip(recent.filing_date)
            .zip(recent.primary_document)
            .zip(recent.primary_doc_description)
            .map(|(((accession_number, filing_date), primary_document), description)| {
                FilingRecord {
                    accession_number,
                    primary_document,
                    description,
                    form: forms.next().unwrap_or_default(),
                    filing_date,
                    report_date: report_dates.next().unwrap_or_default(),
                }
            })
            .collect();

        Ok(FilingIndex {
            cik: self.cik,
            name: self.name,
            records,
        })
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize, optional: bool) -> Result<()> {
    if actual == expected || (optional && actual == 0) {
        Ok(())
    } else {
        Err(DataError::RaggedIndex {
            field,
            expected,
            actual,
        })
    }
}

impl FilingIndex {
    /// First record whose primary document equals `document`.
    ///
    /// Filenames are expected to be unique within an issuer's recent filings;
    /// when they are not, the earliest position wins.
    pub fn find_by_document(&self, document: &str) -> Option<&FilingRecord> {
        self.records.iter().find(|r| r.primary_document == document)
    }

    /// Number of filings in the index.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index has no filings.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FilingRecord {
    /// Filing date, or `None` when the published value is not a
    /// `YYYY-MM-DD` date.
    pub fn filed_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.filing_date, "%Y-%m-%d").ok()
    }

    /// Accession number with dashes removed, as it appears in archive paths.
    pub fn accession_without_dashes(&self) -> String {
        strip_dashes(&self.accession_number)
    }

    /// URL of the primary document on www.sec.gov.
    ///
    /// # Example
    /// ```
    /// # use edgarcheck_data::edgar::{Cik, FilingRecord};
    /// let record = FilingRecord {
    ///     accession_number: "0000047217-24-000024".to_string(),
    ///     primary_document: "hpq-20240131.htm".to_string(),
    ///     description: "10-Q".to_string(),
    ///     form: "10-Q".to_string(),
    ///     filing_date: "2024-01-31".to_string(),
    ///     report_date: String::new(),
    /// };
    /// let cik = Cik::parse("47217").unwrap();
    /// assert_eq!(
    ///     record.document_url(&cik),
    ///     "https://www.sec.gov/Archives/edgar/data/47217/000004721724000024/hpq-20240131.htm"
    /// );
    /// ```
    pub fn document_url(&self, cik: &Cik) -> String {
        format!(
            "https://www.sec.gov/Archives/edgar/data/{}/{}/{}",
            cik.unpadded(),
            self.accession_without_dashes(),
            self.primary_document
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "cik": "47217",
        "name": "HP INC",
        "filings": {
            "recent": {
                "accessionNumber": ["0000047217-24-000030", "0000047217-24-000027", "0000047217-24-000024"],
                "filingDate": ["2024-03-01", "2024-02-20", "2024-01-31"],
                "reportDate": ["", "", "2024-01-31"],
                "form": ["8-K", "4", "10-Q"],
                "primaryDocument": ["hpq-8k.htm", "xslF345X05/form4.xml", "hpq-20240131.htm"],
                "primaryDocDescription": ["8-K", "FORM 4", "10-Q"]
            }
        }
    }"#;

    #[test]
    fn test_into_index_zips_by_position() {
        let index = Submissions::from_json(BODY).unwrap().into_index().unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.name, "HP INC");

        let record = &index.records[2];
        assert_eq!(record.primary_document, "hpq-20240131.htm");
        assert_eq!(record.description, "10-Q");
        assert_eq!(record.form, "10-Q");
        assert_eq!(record.filing_date, "2024-01-31");
        assert_eq!(record.filed_on(), NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(record.accession_without_dashes(), "000004721724000024");
    }

    #[test]
    fn test_optional_arrays_may_be_absent() {
        let body = r#"{"filings":{"recent":{
            "accessionNumber": ["0000047217-24-000024"],
            "filingDate": ["2024-01-31"],
            "primaryDocument": ["hpq-20240131.htm"],
            "primaryDocDescription": ["10-Q"]
        }}}"#;
        let index = Submissions::from_json(body).unwrap().into_index().unwrap();
        assert_eq!(index.records[0].form, "");
        assert_eq!(index.records[0].report_date, "");
        assert!(index.cik.is_empty());
    }

    #[test]
    fn test_ragged_arrays_rejected() {
        let body = r#"{"filings":{"recent":{
            "accessionNumber": ["0000047217-24-000024", "0000047217-24-000027"],
            "filingDate": ["2024-01-31", "2024-02-20"],
            "primaryDocument": ["hpq-20240131.htm"],
            "primaryDocDescription": ["10-Q", "4"]
        }}}"#;
        let err = Submissions::from_json(body).unwrap().into_index().unwrap_err();
        assert!(matches!(
            err,
            DataError::RaggedIndex {
                field: "primaryDocument",
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_bad_filing_date_stays_on_its_record() {
        let body = r#"{"filings":{"recent":{
            "accessionNumber": ["0000047217-24-000030", "0000047217-24-000024"],
            "filingDate": ["", "2024-01-31"],
            "primaryDocument": ["hpq-8k.htm", "hpq-20240131.htm"],
            "primaryDocDescription": ["8-K", "10-Q"]
        }}}"#;
        let index = Submissions::from_json(body).unwrap().into_index().unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.records[0].filed_on(), None);
        assert_eq!(index.records[1].filed_on(), NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn test_filed_on_rejects_other_formats() {
        let mut record = Submissions::from_json(BODY).unwrap().into_index().unwrap().records[2].clone();
        record.filing_date = "31/01/2024".to_string();
        assert_eq!(record.filed_on(), None);
    }

    #[test]
    fn test_missing_required_array_is_serialization_error() {
        let body = r#"{"filings":{"recent":{"accessionNumber": []}}}"#;
        assert!(matches!(
            Submissions::from_json(body),
            Err(DataError::Serialization(_))
        ));
    }

    #[test]
    fn test_find_by_document_first_match_wins() {
        let mut index = Submissions::from_json(BODY).unwrap().into_index().unwrap();
        let mut duplicate = index.records[2].clone();
        duplicate.accession_number = "0000047217-24-000099".to_string();
        index.records.push(duplicate);

        let found = index.find_by_document("hpq-20240131.htm").unwrap();
        assert_eq!(found.accession_number, "0000047217-24-000024");
        assert!(index.find_by_document("missing.htm").is_none());
    }
}
