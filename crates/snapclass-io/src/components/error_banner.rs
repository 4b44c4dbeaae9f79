//! Single-slot error banner.

use dioxus::prelude::*;

use crate::dom;

/// Props for the [`ErrorBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ErrorBannerProps {
    /// The message to display. A new message overwrites the previous
    /// one; there is no queue and no auto-dismiss.
    message: String,
}

/// Displays the current error message and scrolls it into view.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    // Re-scroll on every render so a replacement message is also
    // brought into view.
    use_effect(|| {
        dom::scroll_into_view(dom::ERROR_BANNER_ID);
    });

    rsx! {
        div { id: dom::ERROR_BANNER_ID, class: "error-banner", role: "alert",
            span { class: "error-icon", "!" }
            p { class: "error-text", "{props.message}" }
        }
    }
}
