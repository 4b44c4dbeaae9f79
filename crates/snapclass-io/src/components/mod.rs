//! Dioxus UI components for snapclass.
//!
//! Provides the upload drop zone, image preview panel, results panel
//! with the ranked probability chart, loading spinner, and the error
//! banner.

mod error_banner;
mod preview;
mod results;
mod spinner;
mod upload;

pub use error_banner::ErrorBanner;
pub use preview::PreviewPanel;
pub use results::ResultsPanel;
pub use spinner::LoadingSpinner;
pub use upload::{READ_FAILED_MESSAGE, UploadZone};
