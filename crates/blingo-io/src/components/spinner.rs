//! Busy indicator.

use dioxus::prelude::*;

/// Spinning ring with a status line underneath.
#[component]
pub fn Spinner(message: String) -> Element {
    rsx! {
        div { class: "spinner-wrap", role: "status", aria_live: "polite",
            div { class: "spinner" }
            p { class: "spinner-text", "{message}" }
        }
    }
}
