//! Wire contract of the interview flow that precedes lesson-plan generation.
//!
//! The viewer never calls these endpoints itself; the types document the
//! wider tutoring API the lesson-plan document belongs to, so the `status`
//! discriminants and the persona summary stay in one place.

use serde::{Deserialize, Serialize};

use crate::model::PersonaReport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartInterviewRequest {
    pub user_id: String,
    pub subject: String,
    pub goal: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartInterviewResponse {
    pub status: String,
    pub question: String,
    pub concept: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerInterviewRequest {
    pub user_id: String,
    pub answer: String,
}

/// Mid-interview reply: the next question plus the score for the last answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerInterviewIntermediateResponse {
    pub status: String,
    pub question: String,
    pub concept: String,
    pub score: f64,
}

/// Final reply once the interview graph completes; `summary` is the same
/// persona report later embedded in the lesson-plan document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerInterviewFinalResponse {
    pub status: String,
    pub final_score: f64,
    pub summary: PersonaReport,
    pub feedback: Vec<String>,
}
