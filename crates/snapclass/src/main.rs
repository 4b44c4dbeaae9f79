use std::rc::Rc;

use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use snapclass_core::prediction::{GENERIC_FAILURE_MESSAGE, SELECT_FIRST_MESSAGE};
use snapclass_core::{ImageCandidate, Phase, Prediction, SelectedImage, ServerReply};
use snapclass_io::client::{CONNECT_FAILED_MESSAGE, PREDICT_PATH};
use snapclass_io::components::READ_FAILED_MESSAGE;
use snapclass_io::subscriptions::DocumentSubscriptions;
use snapclass_io::{
    ErrorBanner, LoadingSpinner, PredictClient, PreviewPanel, ResultsPanel, UploadZone, blob, dom,
};

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns all application state as signals -- the selected image, its
/// preview URL, the current phase, the latest prediction, and the
/// error banner -- and wires the upload, preview, spinner, results,
/// and error components together with the document-level listeners.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut selected = use_signal(|| Option::<Rc<SelectedImage>>::None);
    let mut preview_url = use_signal(|| Option::<String>::None);
    let mut prediction = use_signal(|| Option::<Rc<Prediction>>::None);
    let mut phase = use_signal(Phase::default);
    let mut error_message = use_signal(|| Option::<String>::None);

    let client = use_hook(|| {
        Rc::new(PredictClient::from_window_origin().unwrap_or_else(|e| {
            error!("could not resolve page origin, using relative endpoint: {e}");
            PredictClient::new(PREDICT_PATH)
        }))
    });

    // --- Selection path (drop, picker, and paste all land here) ---
    let on_candidate = use_callback(move |candidate: ImageCandidate| {
        match SelectedImage::from_candidate(candidate) {
            Ok(image) => match blob::image_blob_url(image.bytes(), image.mime()) {
                Ok(url) => {
                    if let Some(old) = preview_url.take() {
                        blob::revoke_blob_url(&old);
                    }
                    preview_url.set(Some(url));
                    selected.set(Some(Rc::new(image)));
                    prediction.set(None);
                    phase.set(Phase::Preview);
                    error_message.set(None);
                }
                Err(e) => {
                    error!("preview blob creation failed: {e}");
                    error_message.set(Some(READ_FAILED_MESSAGE.to_owned()));
                }
            },
            // Rejection leaves any prior selection untouched.
            Err(e) => error_message.set(Some(e.to_string())),
        }
    });

    let on_upload_error = use_callback(move |message: String| {
        error_message.set(Some(message));
    });

    // --- Prediction ---
    let on_predict = use_callback(move |()| {
        if phase.peek().is_predicting() {
            // A request is already in flight; ignore the repeat trigger.
            return;
        }
        let maybe_image = (*selected.peek()).clone();
        let Some(image) = maybe_image else {
            error_message.set(Some(SELECT_FIRST_MESSAGE.to_owned()));
            return;
        };

        phase.set(Phase::Predicting);
        error_message.set(None);

        let client = Rc::clone(&client);
        spawn(async move {
            match client.predict(&image).await {
                Ok(ServerReply::Prediction(result)) => {
                    prediction.set(Some(Rc::new(result)));
                    phase.set(Phase::Results);
                }
                Ok(ServerReply::Failure(message)) => {
                    error_message
                        .set(Some(message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned())));
                    phase.set(Phase::Preview);
                }
                Err(e) => {
                    error!("prediction request failed: {e}");
                    error_message.set(Some(CONNECT_FAILED_MESSAGE.to_owned()));
                    phase.set(Phase::Preview);
                }
            }
        });
    });

    // --- Reset (button, Escape key) ---
    let on_reset = use_callback(move |()| {
        selected.set(None);
        prediction.set(None);
        if let Some(old) = preview_url.take() {
            blob::revoke_blob_url(&old);
        }
        // Clear the retained value so re-selecting the identical file
        // still fires a change event.
        dom::clear_input_value(dom::FILE_INPUT_ID);
        phase.set(Phase::AwaitingUpload);
        error_message.set(None);
    });

    // --- Keyboard: Enter predicts only while the preview is showing ---
    let on_enter = use_callback(move |()| {
        if *phase.peek() == Phase::Preview && selected.peek().is_some() {
            on_predict.call(());
        }
    });

    // --- Document-level listeners (paste, shortcuts, drag guard) ---
    // Held for the component's lifetime; dropped (and detached) on unmount.
    let _subscriptions = use_hook(|| {
        Rc::new(
            DocumentSubscriptions::attach(on_candidate, on_reset, on_enter)
                .inspect_err(|e| error!("failed to attach document listeners: {e}"))
                .ok(),
        )
    });

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "snapclass" }
                p { class: "page-tagline",
                    "Upload a photo and see what the model thinks it is."
                }
            }

            main { class: "content",
                if phase().shows_upload() {
                    UploadZone {
                        on_select: on_candidate,
                        on_error: on_upload_error,
                    }
                }

                if phase().shows_preview() {
                    if let Some(url) = preview_url() {
                        PreviewPanel {
                            image_url: url,
                            on_predict,
                            on_reset,
                        }
                    }
                }

                if phase().shows_spinner() {
                    LoadingSpinner {}
                }

                if phase().shows_results() {
                    if let Some(result) = prediction() {
                        ResultsPanel {
                            prediction: result,
                            on_reset,
                        }
                    }
                }

                if let Some(message) = error_message() {
                    ErrorBanner { message }
                }
            }

            footer { class: "page-footer",
                p { "Classifications are produced by the model behind /predict." }
            }
        }
    }
}
