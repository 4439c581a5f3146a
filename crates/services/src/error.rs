//! Shared error types for the services crate.

use thiserror::Error;

use tutor_core::model::DocumentError;

/// Errors emitted while retrieving a lesson-plan document.
///
/// The UI collapses all of these into one fixed message; the variants exist
/// so logs and callers can still tell transport, status, and contract
/// failures apart.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonPlanError {
    #[error("lesson plan request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("lesson plan document is not valid JSON")]
    MalformedJson(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
}
