mod lesson_plan_vm;
mod outline;
mod time_fmt;

pub use lesson_plan_vm::{map_lesson_plan, ChapterVm, LessonPlanVm, SubTopicVm};
pub use outline::OutlineState;
pub use time_fmt::{format_hours, format_minutes};
