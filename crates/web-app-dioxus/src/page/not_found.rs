use dioxus::prelude::*;

use crate::{Route, component::element::ErrorMessage};

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        ErrorMessage { message: "Page not found: /{path}" }
        div {
            class: "has-text-centered",
            Link { class: "button is-link", to: Route::Workout {}, "Back to workout" }
        }
    }
}
