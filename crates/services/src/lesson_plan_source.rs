use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use tutor_core::model::{LessonPlanDocument, SessionId};

use crate::error::LessonPlanError;

/// Bundled demo document, used when no backend is available.
const DEMO_DOCUMENT: &str = include_str!("../fixtures/demo_lesson_plan.json");

/// Single-shot UI fetch; a hung request should fail the view, not stall it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A source of lesson-plan documents for a given session.
///
/// Implementations perform exactly one retrieval per call: no retry, no
/// caching across calls.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieves and validates the document for `session_id`.
    ///
    /// # Errors
    ///
    /// Returns `LessonPlanError` when the retrieval fails or the document
    /// violates the contract.
    async fn fetch_document(
        &self,
        session_id: &SessionId,
    ) -> Result<LessonPlanDocument, LessonPlanError>;
}

#[derive(Clone, Debug)]
pub struct RemoteConfig {
    pub base_url: String,
}

/// Fetches documents from the tutoring backend over HTTP.
#[derive(Clone)]
pub struct RemoteSource {
    client: Client,
    config: RemoteConfig,
}

impl RemoteSource {
    #[must_use]
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

fn endpoint_url(base_url: &str, session_id: &SessionId) -> String {
    format!(
        "{}/lesson-plan/generate/{}",
        base_url.trim_end_matches('/'),
        session_id
    )
}

#[async_trait]
impl DocumentSource for RemoteSource {
    async fn fetch_document(
        &self,
        session_id: &SessionId,
    ) -> Result<LessonPlanDocument, LessonPlanError> {
        let url = endpoint_url(&self.config.base_url, session_id);
        let response = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LessonPlanError::HttpStatus(response.status()));
        }

        // Deserialize from the raw body so a contract mismatch surfaces as
        // `MalformedJson` instead of a generic transport error.
        let body = response.text().await?;
        let document: LessonPlanDocument = serde_json::from_str(&body)?;
        document.validate()?;
        Ok(document)
    }
}

/// Returns the bundled demo document, ignoring the session id's value.
#[derive(Clone)]
pub struct FixtureSource {
    raw: &'static str,
}

impl FixtureSource {
    #[must_use]
    pub fn bundled() -> Self {
        Self { raw: DEMO_DOCUMENT }
    }

    #[cfg(test)]
    fn from_raw(raw: &'static str) -> Self {
        Self { raw }
    }
}

#[async_trait]
impl DocumentSource for FixtureSource {
    async fn fetch_document(
        &self,
        _session_id: &SessionId,
    ) -> Result<LessonPlanDocument, LessonPlanError> {
        let document: LessonPlanDocument = serde_json::from_str(self.raw)?;
        document.validate()?;
        Ok(document)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
