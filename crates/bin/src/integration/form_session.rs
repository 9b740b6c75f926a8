//! Explicitly registered URL fields and their feedback callbacks.
//!
//! Each field is registered by name with the callback that displays its
//! feedback. Every submission gets a generation number; a result is shown
//! only if it belongs to the field's latest submission, so a slow lookup
//! never overwrites feedback for a newer URL.

use edgarcheck::message::render;
use edgarcheck::{FilingRules, ValidationResult};
use std::collections::HashMap;

/// Callback that displays feedback text for one field.
pub(crate) type Renderer = Box<dyn FnMut(&str)>;

/// Errors from field registration and submission.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum SessionError {
    /// Field name was never registered (or was deregistered).
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// Field name is already registered.
    #[error("field already registered: {0}")]
    DuplicateField(String),
}

/// A URL handed to the validator for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Submission {
    /// Field the URL was entered into.
    pub field: String,
    /// Submission counter for the field.
    pub generation: u64,
    /// Trimmed URL.
    pub url: String,
}

struct Field {
    render: Renderer,
    latest: u64,
}

/// Registered fields and their latest submissions.
pub(crate) struct FormSession {
    rules: FilingRules,
    fields: HashMap<String, Field>,
}

impl FormSession {
    pub(crate) fn new(rules: FilingRules) -> Self {
        Self {
            rules,
            fields: HashMap::new(),
        }
    }

    /// Register `name` with the callback that displays its feedback.
    pub(crate) fn register(&mut self, name: &str, render: Renderer) -> Result<(), SessionError> {
        if self.fields.contains_key(name) {
            return Err(SessionError::DuplicateField(name.to_string()));
        }
        self.fields
            .insert(name.to_string(), Field { render, latest: 0 });
        Ok(())
    }

    /// Remove a field; results still in flight for it are dropped.
    pub(crate) fn deregister(&mut self, name: &str) -> bool {
        self.fields.remove(name).is_some()
    }

    /// Remove every field.
    pub(crate) fn teardown(&mut self) {
        self.fields.clear();
    }

    pub(crate) fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Record new input for a field.
    ///
    /// Blank input clears the field's feedback and returns `None`; anything
    /// else returns the submission to validate. Either way, older
    /// submissions for the field become stale.
    pub(crate) fn submit(
        &mut self,
        name: &str,
        url: &str,
    ) -> Result<Option<Submission>, SessionError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| SessionError::UnknownField(name.to_string()))?;
        field.latest += 1;

        let url = url.trim();
        if url.is_empty() {
            (field.render)("");
            return Ok(None);
        }

        Ok(Some(Submission {
            field: name.to_string(),
            generation: field.latest,
            url: url.to_string(),
        }))
    }

    /// Display a finished validation if it is still the field's latest.
    ///
    /// Returns whether anything was displayed.
    pub(crate) fn complete(&mut self, submission: &Submission, result: &ValidationResult) -> bool {
        let Some(field) = self.fields.get_mut(&submission.field) else {
            return false;
        };
        if field.latest != submission.generation {
            return false;
        }
        (field.render)(&render(result, &self.rules));
        true
    }
}

impl std::fmt::Debug for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
