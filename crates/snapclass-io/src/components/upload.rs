//! Upload drop zone with drag-and-drop, click-to-browse, and a file
//! picker button.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use snapclass_core::ImageCandidate;

use crate::dom;

/// Shown when a chosen file cannot be read by the browser.
pub const READ_FAILED_MESSAGE: &str = "Failed to read the selected image";

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Called with the normalized candidate after a file is chosen.
    /// Validation happens upstream; this component only normalizes.
    on_select: EventHandler<ImageCandidate>,
    /// Called with a user-facing message when the file cannot be read.
    on_error: EventHandler<String>,
}

/// A drag-and-drop zone with click-to-browse and a file picker button.
///
/// All paths produce the same [`ImageCandidate`] through `on_select`:
/// dropping a file, clicking anywhere on the zone (which opens the
/// native chooser), or the explicit "Choose File" button. Only the
/// first file of a multi-file drop is taken.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let on_select = props.on_select;
    let on_error = props.on_error;

    // Read and forward the first file of a list. Shared by the
    // file-picker and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        let mime = file.content_type().unwrap_or_default();
        match file.read_bytes().await {
            Ok(bytes) => {
                on_select.call(ImageCandidate {
                    bytes: bytes.to_vec(),
                    mime,
                    name,
                });
            }
            Err(e) => {
                warn!("failed to read {name}: {e}");
                on_error.call(READ_FAILED_MESSAGE.to_owned());
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let drag_class = if dragging() { "upload-box dragover" } else { "upload-box" };

    rsx! {
        div {
            class: "{drag_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,
            // Clicking anywhere on the zone opens the native chooser.
            onclick: move |_| dom::click(dom::FILE_INPUT_ID),

            p { class: "upload-title", "Drop an image here" }
            p { class: "upload-hint", "or paste one from the clipboard" }

            label {
                class: "button button-primary",
                // The label activates the input natively; stop the
                // bubble so the zone's onclick does not fire a second
                // chooser dialog.
                onclick: move |evt| evt.stop_propagation(),
                input {
                    id: dom::FILE_INPUT_ID,
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden-input",
                    // The synthesized click from the zone handler lands
                    // here and would bubble straight back to it.
                    onclick: move |evt| evt.stop_propagation(),
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "upload-limit", "PNG, JPEG, GIF, or WebP up to 10MB" }
        }
    }
}
