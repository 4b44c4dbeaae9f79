//! Loading spinner shown while a prediction request is in flight.

use dioxus::prelude::*;

/// Indeterminate spinner with a short status line.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "panel spinner-panel",
            div { class: "spinner" }
            p { class: "spinner-label", "Analyzing image..." }
        }
    }
}
