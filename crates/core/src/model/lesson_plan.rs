use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{SessionId, UserId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("document session id is blank")]
    BlankSessionId,

    #[error("lesson plan subject name is blank")]
    BlankSubjectName,

    #[error("chapter {index} has a blank title")]
    BlankChapterTitle { index: usize },

    #[error("sub-topic {sub_index} of chapter {chapter_index} has a blank title")]
    BlankSubTopicTitle {
        chapter_index: usize,
        sub_index: usize,
    },
}

//
// ─── DOCUMENT ──────────────────────────────────────────────────────────────────
//

/// Full lesson-plan payload as retrieved from the tutoring backend.
///
/// Everything below `lesson_plan` is what the outline view renders; the
/// persona report, Q&A history, and generated curriculum are part of the
/// retrieved contract but are carried, not displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlanDocument {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub subject: String,
    pub goal: String,
    pub level: String,
    pub lesson_plan: LessonPlan,
    pub grade: String,
    pub feedback: String,
    pub persona_report: PersonaReport,
    pub qa_feedback_history: Vec<QaFeedbackEntry>,
    pub curriculum_generated: Vec<String>,
}

/// The curriculum outline itself. Chapter order is significant and is kept
/// exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub subject_name: String,
    pub learner_level: String,
    pub learner_goal: String,
    pub overall_course_outcome: String,
    pub chapters: Vec<Chapter>,
    pub total_module_time_hours: f64,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub adaptive_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter_title: String,
    pub chapter_outcome: String,
    #[serde(default)]
    pub sub_topics: Vec<SubTopic>,
    pub chapter_total_time_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTopic {
    pub sub_topic_title: String,
    pub sub_topic_outcome: String,
    pub estimated_time_minutes: u32,
}

/// Learner-assessment summary produced by the interview flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaReport {
    pub learner_profile_summary: String,
    pub learning_style_assessment: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses_and_gaps: Vec<String>,
    pub common_misconceptions: Vec<String>,
    pub engagement_and_confidence: String,
    pub actionable_learning_recommendations: Vec<String>,
    pub preliminary_personalized_roadmap_suggestions: Vec<String>,
}

/// One graded question/answer exchange from the interview, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaFeedbackEntry {
    pub concept: String,
    pub question: String,
    pub answer: String,
    pub score: f64,
}

impl LessonPlanDocument {
    /// Validates the structural contract at the retrieval boundary.
    ///
    /// Deserialization already guarantees field presence and types; this
    /// catches documents that are shaped correctly but unusable, instead of
    /// trusting the source blindly.
    ///
    /// # Errors
    ///
    /// Returns the first `DocumentError` encountered, walking chapters and
    /// their sub-topics in order.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.session_id.as_str().trim().is_empty() {
            return Err(DocumentError::BlankSessionId);
        }
        if self.lesson_plan.subject_name.trim().is_empty() {
            return Err(DocumentError::BlankSubjectName);
        }
        for (chapter_index, chapter) in self.lesson_plan.chapters.iter().enumerate() {
            if chapter.chapter_title.trim().is_empty() {
                return Err(DocumentError::BlankChapterTitle {
                    index: chapter_index,
                });
            }
            for (sub_index, sub) in chapter.sub_topics.iter().enumerate() {
                if sub.sub_topic_title.trim().is_empty() {
                    return Err(DocumentError::BlankSubTopicTitle {
                        chapter_index,
                        sub_index,
                    });
                }
            }
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
