#![forbid(unsafe_code)]

pub mod error;
pub mod lesson_plan_service;
pub mod lesson_plan_source;

pub use error::LessonPlanError;
pub use lesson_plan_service::{
    FixedSessionId, LessonPlanConfig, LessonPlanService, SessionIdProvider, DEFAULT_BASE_URL,
    DEMO_SESSION_ID,
};
pub use lesson_plan_source::{DocumentSource, FixtureSource, RemoteConfig, RemoteSource};
