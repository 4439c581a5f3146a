use std::env;
use std::sync::Arc;

use tutor_core::model::{LessonPlanDocument, SessionId, SessionIdError};

use crate::error::LessonPlanError;
use crate::lesson_plan_source::{DocumentSource, FixtureSource, RemoteConfig, RemoteSource};

/// Where the backend listens in local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Session whose lesson plan the demo fixture mirrors.
pub const DEMO_SESSION_ID: &str = "685e9991a498755fc45f227d";

/// Supplies the session whose lesson plan the UI should show.
pub trait SessionIdProvider: Send + Sync {
    fn current(&self) -> SessionId;
}

/// Provider for a session chosen once at launch.
pub struct FixedSessionId(SessionId);

impl FixedSessionId {
    #[must_use]
    pub fn new(session_id: SessionId) -> Self {
        Self(session_id)
    }
}

impl SessionIdProvider for FixedSessionId {
    fn current(&self) -> SessionId {
        self.0.clone()
    }
}

#[derive(Clone, Debug)]
pub struct LessonPlanConfig {
    pub base_url: String,
    pub session_id: String,
    pub use_fixture: bool,
}

impl Default for LessonPlanConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            session_id: DEMO_SESSION_ID.into(),
            use_fixture: false,
        }
    }
}

impl LessonPlanConfig {
    /// Reads overrides from `TUTOR_API_URL`, `TUTOR_SESSION_ID`, and
    /// `TUTOR_USE_FIXTURE`; anything unset keeps its default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = env::var("TUTOR_API_URL") {
            if !value.trim().is_empty() {
                config.base_url = value;
            }
        }
        if let Ok(value) = env::var("TUTOR_SESSION_ID") {
            if !value.trim().is_empty() {
                config.session_id = value;
            }
        }
        if let Ok(value) = env::var("TUTOR_USE_FIXTURE") {
            config.use_fixture = matches!(value.trim(), "1" | "true" | "yes");
        }
        config
    }

    /// Builds the service this config describes, choosing the remote or the
    /// bundled source.
    ///
    /// # Errors
    ///
    /// Returns `SessionIdError::Empty` if the configured session id is blank.
    pub fn into_service(self) -> Result<LessonPlanService, SessionIdError> {
        let session_id = SessionId::new(self.session_id)?;
        let source: Arc<dyn DocumentSource> = if self.use_fixture {
            Arc::new(FixtureSource::bundled())
        } else {
            Arc::new(RemoteSource::new(RemoteConfig {
                base_url: self.base_url,
            }))
        };
        Ok(LessonPlanService::new(
            source,
            Arc::new(FixedSessionId::new(session_id)),
        ))
    }
}

/// Facade the UI talks to: resolves the current session and delegates to the
/// configured document source.
pub struct LessonPlanService {
    source: Arc<dyn DocumentSource>,
    sessions: Arc<dyn SessionIdProvider>,
}

impl LessonPlanService {
    #[must_use]
    pub fn new(source: Arc<dyn DocumentSource>, sessions: Arc<dyn SessionIdProvider>) -> Self {
        Self { source, sessions }
    }

    /// Fetches the document for an explicit session.
    ///
    /// # Errors
    ///
    /// Returns `LessonPlanError` when retrieval or validation fails.
    pub async fn fetch(
        &self,
        session_id: &SessionId,
    ) -> Result<LessonPlanDocument, LessonPlanError> {
        tracing::debug!(session_id = %session_id, "fetching lesson plan");
        match self.source.fetch_document(session_id).await {
            Ok(document) => Ok(document),
            Err(err) => {
                tracing::warn!(session_id = %session_id, error = %err, "lesson plan fetch failed");
                Err(err)
            }
        }
    }

    /// Fetches the document for the provider's current session.
    ///
    /// # Errors
    ///
    /// Returns `LessonPlanError` when retrieval or validation fails.
    pub async fn current_document(&self) -> Result<LessonPlanDocument, LessonPlanError> {
        let session_id = self.sessions.current();
        self.fetch(&session_id).await
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
