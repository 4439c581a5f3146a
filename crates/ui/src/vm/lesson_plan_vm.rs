use tutor_core::model::{Chapter, LessonPlanDocument, SubTopic};

use crate::vm::time_fmt::{format_hours, format_minutes};

/// Render-ready projection of the outline. Text fields pass through
/// unchanged; only the timings are pre-formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonPlanVm {
    pub subject_name: String,
    pub overall_course_outcome: String,
    pub total_hours_str: String,
    pub prerequisites: Vec<String>,
    pub adaptive_notes: Option<String>,
    pub chapters: Vec<ChapterVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChapterVm {
    pub title: String,
    pub outcome: String,
    pub minutes_str: String,
    pub sub_topics: Vec<SubTopicVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubTopicVm {
    pub title: String,
    pub outcome: String,
    pub minutes_str: String,
}

impl From<&SubTopic> for SubTopicVm {
    fn from(sub: &SubTopic) -> Self {
        Self {
            title: sub.sub_topic_title.clone(),
            outcome: sub.sub_topic_outcome.clone(),
            minutes_str: format_minutes(sub.estimated_time_minutes),
        }
    }
}

impl From<&Chapter> for ChapterVm {
    fn from(chapter: &Chapter) -> Self {
        Self {
            title: chapter.chapter_title.clone(),
            outcome: chapter.chapter_outcome.clone(),
            minutes_str: format_minutes(chapter.chapter_total_time_minutes),
            sub_topics: chapter.sub_topics.iter().map(SubTopicVm::from).collect(),
        }
    }
}

#[must_use]
pub fn map_lesson_plan(document: &LessonPlanDocument) -> LessonPlanVm {
    let plan = &document.lesson_plan;
    LessonPlanVm {
        subject_name: plan.subject_name.clone(),
        overall_course_outcome: plan.overall_course_outcome.clone(),
        total_hours_str: format_hours(plan.total_module_time_hours),
        prerequisites: plan.prerequisites.clone(),
        adaptive_notes: plan.adaptive_notes.clone(),
        chapters: plan.chapters.iter().map(ChapterVm::from).collect(),
    }
}
