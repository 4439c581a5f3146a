mod home;
mod lesson_plan;
mod state;

#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use lesson_plan::LessonPlanView;
pub use state::{view_state_from_resource, ViewError, ViewState};
