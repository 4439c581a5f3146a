#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Chapter, DocumentError, LessonPlan, LessonPlanDocument, PersonaReport, QaFeedbackEntry,
    SessionId, SessionIdError, SubTopic, UserId,
};
