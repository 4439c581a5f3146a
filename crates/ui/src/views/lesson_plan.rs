use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::{map_lesson_plan, ChapterVm, OutlineState};

#[component]
pub fn LessonPlanView() -> Element {
    let ctx = use_context::<AppContext>();
    let lesson_plans = ctx.lesson_plans();

    // Which chapters currently show their detail block. UI-only state:
    // toggling never touches the document and never refetches.
    let mut outline = use_signal(OutlineState::default);

    // One fetch per mount. The future lives in this scope, so unmounting
    // drops it and nothing can write state after disposal.
    let resource = use_resource(move || {
        let lesson_plans = lesson_plans.clone();
        async move {
            let document = lesson_plans
                .current_document()
                .await
                .map_err(|_| ViewError::Fetch)?;
            Ok::<_, ViewError>(map_lesson_plan(&document))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Lesson Plan" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "busy",
                        span { class: "spinner" }
                        span { "Loading lesson plan..." }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(vm) => rsx! {
                    header { class: "plan-header",
                        span { class: "plan-subject", "{vm.subject_name}" }
                        span { class: "plan-hours", "{vm.total_hours_str}" }
                    }
                    p { class: "plan-outcome", "{vm.overall_course_outcome}" }

                    for notes in vm.adaptive_notes.iter() {
                        p { class: "plan-notes", "{notes}" }
                    }

                    if !vm.prerequisites.is_empty() {
                        div { class: "prerequisites",
                            span { class: "block-label", "Prerequisites:" }
                            ul {
                                for item in vm.prerequisites.iter() {
                                    li { "{item}" }
                                }
                            }
                        }
                    }

                    ul { class: "chapters",
                        for (index, chapter) in vm.chapters.iter().enumerate() {
                            ChapterRow {
                                key: "{index}",
                                chapter: chapter.clone(),
                                expanded: outline.read().is_expanded(index),
                                on_toggle: move |_| outline.write().toggle(index),
                            }
                        }
                    }
                },
            }
        }
    }
}

/// Header row plus, while expanded, the chapter's detail block. The header
/// always shows title and total minutes regardless of expansion.
#[component]
pub(crate) fn ChapterRow(
    chapter: ChapterVm,
    expanded: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        li { class: "chapter",
            button {
                class: "chapter-toggle",
                aria_expanded: "{expanded}",
                onclick: move |_| on_toggle.call(()),
                span { class: "chapter-title", "{chapter.title}" }
                span { class: "chapter-minutes", "{chapter.minutes_str}" }
                span { class: "chapter-chevron",
                    if expanded { "▲" } else { "▼" }
                }
            }

            if expanded {
                div { class: "chapter-detail",
                    p { class: "chapter-outcome",
                        span { class: "block-label", "Learning outcome: " }
                        "{chapter.outcome}"
                    }
                    if !chapter.sub_topics.is_empty() {
                        span { class: "block-label", "Subtopics:" }
                        ul { class: "sub-topics",
                            for sub in chapter.sub_topics.iter() {
                                li { class: "sub-topic",
                                    span { class: "sub-topic-title", "{sub.title}: " }
                                    "{sub.outcome} "
                                    span { class: "sub-topic-minutes", "({sub.minutes_str})" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
