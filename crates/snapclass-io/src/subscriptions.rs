//! Document-level event subscriptions.
//!
//! The paste capture, keyboard shortcuts, and drag-default suppression
//! all need document-wide listeners. Rather than registering implicit
//! global singletons, [`DocumentSubscriptions`] owns the listeners
//! explicitly: the root component attaches them once on mount and they
//! are removed when the value is dropped, so tests and remounts stay
//! clean.

use dioxus::logger::tracing::warn;
use dioxus::prelude::Callback;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use snapclass_core::ImageCandidate;

/// Drag events whose browser default (navigating to the dropped file)
/// must be suppressed page-wide, not just over the drop zone.
const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];

/// Errors that can occur while attaching document listeners.
#[derive(Debug, thiserror::Error)]
pub enum SubscriptionError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for SubscriptionError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Owned document-level listeners: paste, keydown, and drag
/// suppression.
///
/// Dropping this value removes every listener it registered.
pub struct DocumentSubscriptions {
    document: web_sys::Document,
    paste: Closure<dyn FnMut(web_sys::ClipboardEvent)>,
    keydown: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
    drag_guard: Closure<dyn FnMut(web_sys::DragEvent)>,
}

impl DocumentSubscriptions {
    /// Attach paste, keyboard-shortcut, and drag-suppression listeners
    /// to the document.
    ///
    /// - `on_image` fires with the first image-typed clipboard item of
    ///   a paste; non-image clipboard content is ignored.
    /// - `on_escape` fires on the Escape key (reset).
    /// - `on_enter` fires on the Enter key; the caller decides whether
    ///   a prediction is actually appropriate in the current phase.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionError::JsError`] if the window or document
    /// is unavailable or a listener cannot be registered.
    pub fn attach(
        on_image: Callback<ImageCandidate>,
        on_escape: Callback<()>,
        on_enter: Callback<()>,
    ) -> Result<Self, SubscriptionError> {
        let window =
            web_sys::window().ok_or_else(|| SubscriptionError::JsError("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SubscriptionError::JsError("no document".into()))?;

        let paste = Closure::<dyn FnMut(web_sys::ClipboardEvent)>::new(
            move |event: web_sys::ClipboardEvent| {
                if let Some(file) = first_image_file(&event) {
                    forward_file(&file, on_image);
                }
            },
        );
        document.add_event_listener_with_callback("paste", paste.as_ref().unchecked_ref())?;

        let keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| match event.key().as_str() {
                "Escape" => on_escape.call(()),
                "Enter" => on_enter.call(()),
                _ => {}
            },
        );
        document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

        // One shared handler suppresses the default for all four drag
        // event names. Listeners on the drop zone itself run before
        // the event bubbles here, so this does not interfere with the
        // zone's own handling.
        let drag_guard =
            Closure::<dyn FnMut(web_sys::DragEvent)>::new(|event: web_sys::DragEvent| {
                event.prevent_default();
            });
        for name in DRAG_EVENTS {
            document.add_event_listener_with_callback(name, drag_guard.as_ref().unchecked_ref())?;
        }

        Ok(Self {
            document,
            paste,
            keydown,
            drag_guard,
        })
    }
}

impl Drop for DocumentSubscriptions {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("paste", self.paste.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        for name in DRAG_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(name, self.drag_guard.as_ref().unchecked_ref());
        }
    }
}

/// Scan the clipboard items of a paste event for the first entry whose
/// type tag contains `"image"` and extract it as a file.
fn first_image_file(event: &web_sys::ClipboardEvent) -> Option<web_sys::File> {
    let items = event.clipboard_data()?.items();
    for index in 0..items.length() {
        let Some(item) = items.get(index) else {
            continue;
        };
        if !item.type_().contains("image") {
            continue;
        }
        if let Ok(Some(file)) = item.get_as_file() {
            return Some(file);
        }
    }
    None
}

/// Read a pasted file's bytes asynchronously and forward them as an
/// [`ImageCandidate`] through the same selection path as drag-drop.
fn forward_file(file: &web_sys::File, on_image: Callback<ImageCandidate>) {
    let file = file.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => {
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                on_image.call(ImageCandidate {
                    bytes,
                    mime: file.type_(),
                    name: file.name(),
                });
            }
            Err(e) => {
                // A pasted item that cannot be read is dropped quietly;
                // the user never committed to it the way an upload does.
                warn!("failed to read pasted image: {e:?}");
            }
        }
    });
}
