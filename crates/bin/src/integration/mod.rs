//! Glue between the validator and interactive input.
//!
//! Fields are registered explicitly with their feedback callbacks, fed edits,
//! and torn down when input ends.

pub(crate) mod form_session;
pub(crate) mod watch;
