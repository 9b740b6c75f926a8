//! Source of issuer filing indexes.

use crate::edgar::ids::Cik;
use crate::edgar::submissions::FilingIndex;
use crate::error::Result;
use std::future::Future;

/// Something that can produce an issuer's recent filing index by CIK.
///
/// [`EdgarClient`](crate::edgar::EdgarClient) is the production
/// implementation. Each call is one independent read.
pub trait SubmissionsSource {
    /// Fetch the filing index for `cik`.
    fn fetch_index(&self, cik: &Cik) -> impl Future<Output = Result<FilingIndex>> + Send;
}

impl<S: SubmissionsSource + Sync> SubmissionsSource for &S {
    fn fetch_index(&self, cik: &Cik) -> impl Future<Output = Result<FilingIndex>> + Send {
        (**self).fetch_index(cik)
    }
}

impl<S: SubmissionsSource + Send + Sync> SubmissionsSource for std::sync::Arc<S> {
    fn fetch_index(&self, cik: &Cik) -> impl Future<Output = Result<FilingIndex>> + Send {
        (**self).fetch_index(cik)
    }
}
