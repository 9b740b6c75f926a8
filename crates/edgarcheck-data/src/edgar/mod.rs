//! SEC EDGAR data fetching and parsing.
//!
//! This module provides access to an issuer's recent filings through the
//! submissions API:
//! - CIK parsing and zero-padding
//! - Rate-limited retrieval of `submissions/CIK##########.json`
//! - Ingestion of the parallel-array index into per-filing records
//!
//! # Example
//!
//! ```no_run
//! use edgarcheck_data::edgar::{Cik, EdgarClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EdgarClient::new()?;
//!     let cik = Cik::parse("47217")?;
//!     let index = client.get_submissions(&cik).await?;
//!
//!     if let Some(filing) = index.find_by_document("hpq-20240131.htm") {
//!         println!("{} filed {}", filing.description, filing.filing_date);
//!         println!("URL: {}", filing.document_url(&cik));
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod ids;
pub mod source;
pub mod submissions;

// Re-export main types
pub use client::{ClientConfig, EdgarClient, submissions_path};
pub use ids::{Cik, strip_dashes};
pub use source::SubmissionsSource;
pub use submissions::{FilingHistory, FilingIndex, FilingRecord, RecentFilings, Submissions};
