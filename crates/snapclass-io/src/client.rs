//! HTTP client for the prediction endpoint.
//!
//! Packages the selected image as a multipart form, POSTs it to
//! `/predict`, and hands the body to `snapclass-core` for parsing.
//! On wasm32 `reqwest` wraps the browser `fetch` API, so the request
//! inherits the browser's own connection timeout and nothing more --
//! there is no retry policy and no cancellation once in flight.

use snapclass_core::SelectedImage;
use snapclass_core::prediction::{self, ServerReply};

/// Path of the prediction endpoint, relative to the page origin.
pub const PREDICT_PATH: &str = "/predict";

/// Multipart field name the server reads the image from.
pub const FILE_FIELD: &str = "file";

/// Shown for any transport or parse failure. The underlying error is
/// logged separately; the user only needs to know a retry is manual.
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// Errors that can occur while requesting a prediction.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response body not read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was readable but not a valid reply.
    #[error("bad server reply: {0}")]
    Reply(#[from] prediction::ReplyError),

    /// A browser API needed to build the client was unavailable.
    #[error("browser API error: {0}")]
    JsError(String),
}

/// Client for the remote classification service.
///
/// Create one at app startup and reuse it for all predictions.
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictClient {
    /// Create a client POSTing to the given absolute endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client targeting [`PREDICT_PATH`] on the page's own
    /// origin.
    ///
    /// `reqwest` requires absolute URLs, so the relative path is
    /// resolved against `window.location.origin` up front.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::JsError`] if the browser window or its
    /// location is unavailable (e.g. in a non-browser environment).
    pub fn from_window_origin() -> Result<Self, ClientError> {
        let window =
            web_sys::window().ok_or_else(|| ClientError::JsError("no global window".into()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| ClientError::JsError(format!("{e:?}")))?;
        Ok(Self::new(format!("{origin}{PREDICT_PATH}")))
    }

    /// The endpoint URL this client POSTs to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the selected image for classification.
    ///
    /// The server reports logical failures as JSON regardless of HTTP
    /// status, so the body is parsed without consulting `status()`
    /// first -- the same contract the browser `fetch` call had.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the request cannot be
    /// sent or the body cannot be read, and [`ClientError::Reply`]
    /// when the body is not a valid reply document.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; reqwest's wasm client is !Send
    pub async fn predict(&self, image: &SelectedImage) -> Result<ServerReply, ClientError> {
        let part = reqwest::multipart::Part::bytes(image.bytes().to_vec())
            .file_name(image.name().to_owned())
            .mime_str(image.mime())?;
        let form = reqwest::multipart::Form::new().part(FILE_FIELD, part);

        let body = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?
            .text()
            .await?;

        Ok(prediction::parse_reply(&body)?)
    }
}
