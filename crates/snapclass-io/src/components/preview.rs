//! Preview panel showing the selected image before prediction.

use dioxus::prelude::*;

/// Props for the [`PreviewPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PreviewPanelProps {
    /// Blob URL of the selected image.
    image_url: String,
    /// Called when the user triggers a prediction.
    on_predict: EventHandler<()>,
    /// Called when the user discards the selection.
    on_reset: EventHandler<()>,
}

/// Shows the selected image with predict/reset actions.
#[component]
pub fn PreviewPanel(props: PreviewPanelProps) -> Element {
    let on_predict = props.on_predict;
    let on_reset = props.on_reset;

    rsx! {
        section { class: "panel preview-panel",
            img {
                class: "preview-image",
                src: "{props.image_url}",
                alt: "Selected image preview",
            }
            div { class: "panel-actions",
                button {
                    class: "button button-primary",
                    onclick: move |_| on_predict.call(()),
                    "Predict"
                }
                button {
                    class: "button button-secondary",
                    onclick: move |_| on_reset.call(()),
                    "Choose Different Image"
                }
            }
            p { class: "shortcut-hint", "Enter to predict, Esc to start over" }
        }
    }
}
