use std::sync::Arc;

use services::LessonPlanService;

/// UI-facing surface of the application: everything a view may ask for.
pub trait UiApp: Send + Sync {
    fn lesson_plans(&self) -> Arc<LessonPlanService>;
}

#[derive(Clone)]
pub struct AppContext {
    lesson_plans: Arc<LessonPlanService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lesson_plans: app.lesson_plans(),
        }
    }

    #[must_use]
    pub fn lesson_plans(&self) -> Arc<LessonPlanService> {
        Arc::clone(&self.lesson_plans)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
