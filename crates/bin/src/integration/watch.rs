//! Interactive validation of URLs typed into named fields.
//!
//! Input is one `FIELD URL` line per edit. Every edit starts its own
//! validation immediately, so several can be in flight at once; the
//! [`FormSession`] decides which results are still worth showing.

use super::form_session::{FormSession, Renderer, SessionError, Submission};
use edgarcheck::data::edgar::SubmissionsSource;
use edgarcheck::{FilingUrlValidator, ValidationResult};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// Error type for watch sessions.
#[derive(Debug, thiserror::Error)]
pub(crate) enum WatchError {
    /// Reading input failed.
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
    /// Field registration failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Counts reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WatchSummary {
    /// URLs sent to the validator.
    pub submitted: usize,
    /// Results displayed.
    pub shown: usize,
    /// Results dropped because a newer edit superseded them.
    pub stale: usize,
    /// Lines naming an unregistered field.
    pub rejected: usize,
}

/// Run a session until `input` is exhausted and every lookup has finished.
pub(crate) async fn watch<S, R, F>(
    validator: &FilingUrlValidator<S>,
    fields: &[String],
    input: R,
    mut make_renderer: F,
) -> Result<WatchSummary, WatchError>
where
    S: SubmissionsSource,
    R: AsyncBufRead + Unpin,
    F: FnMut(&str) -> Renderer,
{
    let mut session = FormSession::new(validator.rules().clone());
    for name in fields {
        session.register(name, make_renderer(name))?;
    }
    info!(fields = ?session.field_names().collect::<Vec<_>>(), "watching fields");

    let mut summary = WatchSummary::default();
    let mut lines = input.lines();
    let mut pending = FuturesUnordered::new();
    let mut input_open = true;

    while input_open || !pending.is_empty() {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                let (field, url) = split_line(&line);
                if field.is_empty() {
                    continue;
                }
                match session.submit(field, url) {
                    Ok(Some(submission)) => {
                        summary.submitted += 1;
                        pending.push(run_one(validator, submission));
                    }
                    Ok(None) => debug!(field, "cleared"),
                    Err(e) => {
                        warn!(error = %e, "ignoring input line");
                        eprintln!("{}", e);
                        summary.rejected += 1;
                    }
                }
            }
            Some((submission, result)) = pending.next(), if !pending.is_empty() => {
                if session.complete(&submission, &result) {
                    summary.shown += 1;
                } else {
                    debug!(field = %submission.field, generation = submission.generation, "dropping stale result");
                    summary.stale += 1;
                }
            }
        }
    }

    session.teardown();
    info!(?summary, "watch session finished");
    Ok(summary)
}

async fn run_one<S: SubmissionsSource>(
    validator: &FilingUrlValidator<S>,
    submission: Submission,
) -> (Submission, ValidationResult) {
    let result = validator.validate(&submission.url).await;
    (submission, result)
}

/// `"q1  https://..."` becomes `("q1", "https://...")`; a bare field name
/// yields an empty URL.
fn split_line(line: &str) -> (&str, &str) {
    let line = line.trim();
    line.split_once(char::is_whitespace)
        .map_or((line, ""), |(field, url)| (field, url.trim()))
}
