use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Home" }
            p { "Your personalized curriculum is ready to review." }
            p {
                Link { to: Route::LessonPlan {}, "Open lesson plan" }
            }
        }
    }
}
