//! snapclass-core: Pure domain logic for the snapclass frontend (sans-IO).
//!
//! Owns the selected-image model and its validation rules, the
//! `/predict` wire format and its parsing, percentage formatting, and
//! the UI phase state machine. This crate has **no browser or network
//! dependencies** -- it operates on in-memory values and returns
//! structured data. All DOM and HTTP interaction lives in
//! `snapclass-io`.

pub mod phase;
pub mod prediction;
pub mod selection;

pub use phase::Phase;
pub use prediction::{ClassProbability, Prediction, ReplyError, ServerReply, parse_reply};
pub use selection::{ImageCandidate, MAX_UPLOAD_BYTES, SelectedImage, SelectionError};
