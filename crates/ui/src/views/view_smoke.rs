use std::sync::Arc;

use async_trait::async_trait;
use dioxus::prelude::*;
use services::{DocumentSource, LessonPlanError};
use tutor_core::model::{
    Chapter, DocumentError, LessonPlan, LessonPlanDocument, PersonaReport, SessionId, SubTopic,
    UserId,
};

use super::lesson_plan::ChapterRow;
use super::test_harness::{setup_view_harness, ViewHarness, ViewKind};
use crate::vm::ChapterVm;

struct StaticSource(LessonPlanDocument);

#[async_trait]
impl DocumentSource for StaticSource {
    async fn fetch_document(
        &self,
        _session_id: &SessionId,
    ) -> Result<LessonPlanDocument, LessonPlanError> {
        Ok(self.0.clone())
    }
}

struct FailingSource;

#[async_trait]
impl DocumentSource for FailingSource {
    async fn fetch_document(
        &self,
        _session_id: &SessionId,
    ) -> Result<LessonPlanDocument, LessonPlanError> {
        // Any cause collapses to the same fixed message at the view
        // boundary; a contract error avoids a reqwest dev-dependency here.
        Err(LessonPlanError::Document(DocumentError::BlankSubjectName))
    }
}

fn two_chapter_document() -> LessonPlanDocument {
    LessonPlanDocument {
        session_id: SessionId::new("abc123").unwrap(),
        user_id: UserId::new("user-1"),
        subject: "Algebra".into(),
        goal: "Pass the entry exam".into(),
        level: "beginner".into(),
        lesson_plan: LessonPlan {
            subject_name: "Algebra".into(),
            learner_level: "beginner".into(),
            learner_goal: "Pass the entry exam".into(),
            overall_course_outcome: "Solve linear equations confidently".into(),
            chapters: vec![
                Chapter {
                    chapter_title: "Intro".into(),
                    chapter_outcome: "Know the vocabulary".into(),
                    sub_topics: vec![],
                    chapter_total_time_minutes: 10,
                },
                Chapter {
                    chapter_title: "Core".into(),
                    chapter_outcome: "Manipulate equations".into(),
                    sub_topics: vec![SubTopic {
                        sub_topic_title: "A".into(),
                        sub_topic_outcome: "Isolate variables".into(),
                        estimated_time_minutes: 15,
                    }],
                    chapter_total_time_minutes: 40,
                },
            ],
            total_module_time_hours: 1.0,
            prerequisites: vec![],
            adaptive_notes: None,
        },
        grade: "Good".into(),
        feedback: String::new(),
        persona_report: PersonaReport {
            learner_profile_summary: "Curious beginner".into(),
            learning_style_assessment: vec![],
            strengths: vec![],
            weaknesses_and_gaps: vec![],
            common_misconceptions: vec![],
            engagement_and_confidence: "high".into(),
            actionable_learning_recommendations: vec![],
            preliminary_personalized_roadmap_suggestions: vec![],
        },
        qa_feedback_history: vec![],
        curriculum_generated: vec![],
    }
}

async fn settled(mut harness: ViewHarness) -> String {
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn loaded_view_renders_subject_and_outcome_verbatim() {
    let source = Arc::new(StaticSource(two_chapter_document()));
    let html = settled(setup_view_harness(ViewKind::LessonPlan, source)).await;

    assert!(html.contains("Algebra"), "missing subject in {html}");
    assert!(
        html.contains("Solve linear equations confidently"),
        "missing outcome in {html}"
    );
    assert!(html.contains("1 hours"), "missing total hours in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn initial_render_shows_collapsed_headers_only() {
    let source = Arc::new(StaticSource(two_chapter_document()));
    let html = settled(setup_view_harness(ViewKind::LessonPlan, source)).await;

    // Headers always carry title and total minutes.
    for needle in ["Intro", "10 min", "Core", "40 min"] {
        assert!(html.contains(needle), "missing {needle} in {html}");
    }
    // Detail blocks stay hidden until a chapter is expanded.
    assert!(
        !html.contains("Know the vocabulary"),
        "collapsed chapter leaked its outcome in {html}"
    );
    assert!(
        !html.contains("Isolate variables"),
        "collapsed chapter leaked its sub-topics in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn empty_prerequisites_render_no_block() {
    let source = Arc::new(StaticSource(two_chapter_document()));
    let html = settled(setup_view_harness(ViewKind::LessonPlan, source)).await;
    assert!(
        !html.contains("Prerequisites:"),
        "unexpected prerequisites block in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn prerequisites_render_in_original_order() {
    let mut document = two_chapter_document();
    document.lesson_plan.prerequisites =
        vec!["Arithmetic".into(), "Reading graphs".into()];
    let source = Arc::new(StaticSource(document));
    let html = settled(setup_view_harness(ViewKind::LessonPlan, source)).await;

    assert!(html.contains("Prerequisites:"), "missing block in {html}");
    let first = html.find("Arithmetic").expect("first entry rendered");
    let second = html.find("Reading graphs").expect("second entry rendered");
    assert!(first < second, "prerequisites out of order in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn adaptive_notes_render_only_when_present() {
    let mut document = two_chapter_document();
    document.lesson_plan.adaptive_notes = Some("Prefers worked examples".into());
    let source = Arc::new(StaticSource(document));
    let html = settled(setup_view_harness(ViewKind::LessonPlan, source)).await;
    assert!(
        html.contains("Prefers worked examples"),
        "missing adaptive notes in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn failing_source_renders_the_fixed_error_message() {
    let html = settled(setup_view_harness(ViewKind::LessonPlan, Arc::new(FailingSource))).await;
    assert!(
        html.contains("Failed to fetch lesson plan."),
        "missing error message in {html}"
    );
    assert!(
        !html.contains("Algebra"),
        "error state rendered document content in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_links_to_the_lesson_plan() {
    let source = Arc::new(StaticSource(two_chapter_document()));
    let html = settled(setup_view_harness(ViewKind::Home, source)).await;
    assert!(html.contains("Open lesson plan"), "missing link in {html}");
}

//
// ─── CHAPTER ROW ───────────────────────────────────────────────────────────────
//

#[derive(Props, Clone, PartialEq)]
struct RowProps {
    chapter: ChapterVm,
    expanded: bool,
}

#[component]
fn RowHarness(props: RowProps) -> Element {
    rsx! {
        ul {
            ChapterRow {
                chapter: props.chapter.clone(),
                expanded: props.expanded,
                on_toggle: move |_| {},
            }
        }
    }
}

fn core_chapter_vm() -> ChapterVm {
    let document = two_chapter_document();
    ChapterVm::from(&document.lesson_plan.chapters[1])
}

fn render_row(expanded: bool) -> String {
    let mut dom = VirtualDom::new_with_props(
        RowHarness,
        RowProps {
            chapter: core_chapter_vm(),
            expanded,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn expanded_chapter_reveals_outcome_and_sub_topic_rows() {
    let html = render_row(true);
    assert!(html.contains("Core"), "missing title in {html}");
    assert!(html.contains("40 min"), "missing minutes in {html}");
    assert!(
        html.contains("Manipulate equations"),
        "missing outcome in {html}"
    );
    assert!(html.contains("A:"), "missing sub-topic title in {html}");
    assert!(html.contains("(15 min)"), "missing estimate in {html}");
}

#[test]
fn collapsed_chapter_keeps_its_header_and_hides_detail() {
    let html = render_row(false);
    assert!(html.contains("Core"), "missing title in {html}");
    assert!(html.contains("40 min"), "missing minutes in {html}");
    assert!(
        !html.contains("Manipulate equations"),
        "collapsed row leaked detail in {html}"
    );
    assert!(!html.contains("(15 min)"), "collapsed row leaked sub-topics in {html}");
}
