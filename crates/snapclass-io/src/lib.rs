//! snapclass-io: Browser I/O and Dioxus component library for snapclass.
//!
//! Handles file selection (drop zone, file picker, clipboard paste),
//! Blob preview URLs, document-level event subscriptions, the HTTP
//! prediction client, and the UI components of the classification page.

pub mod blob;
pub mod client;
pub mod components;
pub mod dom;
pub mod subscriptions;

pub use client::PredictClient;
pub use components::{ErrorBanner, LoadingSpinner, PreviewPanel, ResultsPanel, UploadZone};
pub use subscriptions::DocumentSubscriptions;
