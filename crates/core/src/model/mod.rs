mod ids;
pub mod interview;
mod lesson_plan;

pub use ids::{SessionId, SessionIdError, UserId};
pub use interview::{
    AnswerInterviewFinalResponse, AnswerInterviewIntermediateResponse, AnswerInterviewRequest,
    StartInterviewRequest, StartInterviewResponse,
};
pub use lesson_plan::{
    Chapter, DocumentError, LessonPlan, LessonPlanDocument, PersonaReport, QaFeedbackEntry,
    SubTopic,
};
