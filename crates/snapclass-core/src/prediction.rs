//! `/predict` wire format, reply parsing, and percentage formatting.
//!
//! The endpoint replies with JSON of the shape
//! `{success, predicted_class?, confidence?, all_predictions?, error?}`.
//! [`parse_reply`] validates that shape at the network boundary and
//! produces a [`ServerReply`] -- a discriminated type -- so the UI
//! never inspects loosely-typed JSON.

use serde::Deserialize;
use thiserror::Error;

/// Number of ranked rows shown in the probability chart.
pub const TOP_PREDICTIONS: usize = 5;

/// Shown when the server reports a failure without a message.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during prediction";

/// Shown when predict is invoked with no selected image.
pub const SELECT_FIRST_MESSAGE: &str = "Please select an image first";

/// One class/probability row of the ranked prediction list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassProbability {
    /// Class label, e.g. `"cat"`.
    pub class: String,
    /// Probability as a percentage in `0.0..=100.0`.
    pub probability: f64,
}

impl ClassProbability {
    /// Probability rounded to one decimal place, e.g. `"92.3%"`.
    #[must_use]
    pub fn probability_text(&self) -> String {
        format_percent(self.probability)
    }

    /// CSS width for the bar fill.
    ///
    /// Carries the raw unrounded value (e.g. `"92.345%"`) so the bar
    /// length is exact even though the label is rounded.
    #[must_use]
    pub fn bar_width(&self) -> String {
        let value = self.probability;
        format!("{value}%")
    }
}

/// A successful classification result.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Winning class label.
    pub class: String,
    /// Confidence in the winning class, as a percentage.
    pub confidence: f64,
    /// All class probabilities in the order the server ranked them.
    ///
    /// Server order is trusted; no local re-sort is performed.
    pub ranked: Vec<ClassProbability>,
}

impl Prediction {
    /// Confidence rounded to one decimal place, e.g. `"92.3%"`.
    #[must_use]
    pub fn confidence_text(&self) -> String {
        format_percent(self.confidence)
    }

    /// The first [`TOP_PREDICTIONS`] rows of the ranked list.
    #[must_use]
    pub fn top(&self) -> &[ClassProbability] {
        &self.ranked[..self.ranked.len().min(TOP_PREDICTIONS)]
    }
}

/// Parsed and validated reply from the prediction endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerReply {
    /// `success: true` with all required payload fields present.
    Prediction(Prediction),
    /// `success: false`, carrying the server-supplied message if any.
    Failure(Option<String>),
}

/// Errors from interpreting a reply body.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// The body was not valid JSON.
    #[error("reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A `success: true` reply omitted a required payload field.
    #[error("success reply is missing `{0}`")]
    MissingField(&'static str),
}

/// Raw wire shape of a reply.
///
/// Every payload field is optional on the wire; which ones must be
/// present depends on `success` and is enforced by [`parse_reply`].
/// Unknown fields (the server also returns a thumbnail) are ignored.
#[derive(Debug, Deserialize)]
struct RawReply {
    success: bool,
    predicted_class: Option<String>,
    confidence: Option<f64>,
    #[serde(default)]
    all_predictions: Vec<ClassProbability>,
    error: Option<String>,
}

/// Parse a reply body into a [`ServerReply`].
///
/// # Errors
///
/// Returns [`ReplyError::Json`] when the body is not valid JSON, and
/// [`ReplyError::MissingField`] when a `success: true` reply omits
/// `predicted_class` or `confidence`.
pub fn parse_reply(body: &str) -> Result<ServerReply, ReplyError> {
    let raw: RawReply = serde_json::from_str(body)?;
    if !raw.success {
        return Ok(ServerReply::Failure(raw.error));
    }
    let class = raw
        .predicted_class
        .ok_or(ReplyError::MissingField("predicted_class"))?;
    let confidence = raw
        .confidence
        .ok_or(ReplyError::MissingField("confidence"))?;
    Ok(ServerReply::Prediction(Prediction {
        class,
        confidence,
        ranked: raw.all_predictions,
    }))
}

/// Format a percentage to one decimal place with a `%` suffix.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn success_body() -> &'static str {
        r#"{
            "success": true,
            "predicted_class": "cat",
            "confidence": 92.345,
            "all_predictions": [
                {"class": "cat", "probability": 92.345},
                {"class": "dog", "probability": 5.1},
                {"class": "deer", "probability": 1.2},
                {"class": "horse", "probability": 0.8},
                {"class": "bird", "probability": 0.4},
                {"class": "frog", "probability": 0.1},
                {"class": "ship", "probability": 0.05}
            ]
        }"#
    }

    fn parse_prediction(body: &str) -> Prediction {
        match parse_reply(body).unwrap() {
            ServerReply::Prediction(prediction) => prediction,
            ServerReply::Failure(message) => panic!("expected success, got failure: {message:?}"),
        }
    }

    #[test]
    fn parses_success_reply() {
        let prediction = parse_prediction(success_body());
        assert_eq!(prediction.class, "cat");
        assert_eq!(prediction.ranked.len(), 7);
    }

    #[test]
    fn confidence_is_rounded_to_one_decimal() {
        let prediction = parse_prediction(success_body());
        assert_eq!(prediction.confidence_text(), "92.3%");
    }

    #[test]
    fn bar_width_keeps_raw_probability() {
        let prediction = parse_prediction(success_body());
        let first = &prediction.top()[0];
        assert_eq!(first.probability_text(), "92.3%");
        assert_eq!(first.bar_width(), "92.345%");
    }

    #[test]
    fn integer_probability_renders_without_decimals_in_bar_width() {
        let row = ClassProbability {
            class: "dog".to_owned(),
            probability: 5.0,
        };
        // Matches how the raw value renders when it happens to be whole.
        assert_eq!(row.bar_width(), "5%");
        assert_eq!(row.probability_text(), "5.0%");
    }

    #[test]
    fn top_truncates_to_five_rows_in_server_order() {
        let prediction = parse_prediction(success_body());
        let top = prediction.top();
        assert_eq!(top.len(), TOP_PREDICTIONS);
        let labels: Vec<&str> = top.iter().map(|row| row.class.as_str()).collect();
        assert_eq!(labels, ["cat", "dog", "deer", "horse", "bird"]);
    }

    #[test]
    fn top_handles_short_lists() {
        let prediction = Prediction {
            class: "cat".to_owned(),
            confidence: 99.0,
            ranked: vec![ClassProbability {
                class: "cat".to_owned(),
                probability: 99.0,
            }],
        };
        assert_eq!(prediction.top().len(), 1);
    }

    #[test]
    fn parses_failure_with_message() {
        let reply = parse_reply(r#"{"success": false, "error": "bad image"}"#).unwrap();
        assert_eq!(reply, ServerReply::Failure(Some("bad image".to_owned())));
    }

    #[test]
    fn parses_failure_without_message() {
        let reply = parse_reply(r#"{"success": false}"#).unwrap();
        assert_eq!(reply, ServerReply::Failure(None));
    }

    #[test]
    fn rejects_non_json_body() {
        let result = parse_reply("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ReplyError::Json(_))));
    }

    #[test]
    fn rejects_success_reply_missing_payload() {
        let result = parse_reply(r#"{"success": true, "confidence": 50.0}"#);
        assert!(matches!(
            result,
            Err(ReplyError::MissingField("predicted_class"))
        ));

        let result = parse_reply(r#"{"success": true, "predicted_class": "cat"}"#);
        assert!(matches!(result, Err(ReplyError::MissingField("confidence"))));
    }

    #[test]
    fn ignores_unknown_fields() {
        // The server also sends a base64 thumbnail alongside the result.
        let reply = parse_reply(
            r#"{"success": false, "error": "no file", "image": "aGVsbG8="}"#,
        )
        .unwrap();
        assert_eq!(reply, ServerReply::Failure(Some("no file".to_owned())));
    }

    #[test]
    fn format_percent_rounds_half_cases() {
        assert_eq!(format_percent(92.345), "92.3%");
        assert_eq!(format_percent(5.0), "5.0%");
        assert_eq!(format_percent(0.05), "0.1%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
