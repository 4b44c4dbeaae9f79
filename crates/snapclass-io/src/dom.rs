//! Small DOM helpers keyed by element id.
//!
//! All helpers are best-effort: a missing element, window, or document
//! silently no-ops. The ids live here so components and the app agree
//! on them.

use wasm_bindgen::JsCast;

/// Id of the hidden native file input inside the drop zone.
pub const FILE_INPUT_ID: &str = "file-input";

/// Id of the results section, used as the smooth-scroll target.
pub const RESULTS_SECTION_ID: &str = "results-section";

/// Id of the error banner, used as the smooth-scroll target.
pub const ERROR_BANNER_ID: &str = "error-banner";

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Smoothly scroll the element into view with nearest-edge alignment.
pub fn scroll_into_view(id: &str) {
    let Some(element) = element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Synthesize a click on the element.
///
/// Used to open the native file chooser from clicks on the drop zone.
pub fn click(id: &str) {
    if let Some(element) = element_by_id(id).and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        element.click();
    }
}

/// Clear an `<input>` element's value.
///
/// Resetting the file input's retained value ensures re-selecting the
/// identical file still fires a change event.
pub fn clear_input_value(id: &str) {
    if let Some(input) =
        element_by_id(id).and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}
