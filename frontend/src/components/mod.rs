//! UI Components of the report uploader.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`NotFound`] - Fallback page for unknown routes
//!
//! # Feature Components
//! - [`UploadPage`] - PDF selection, form fields and submission
//! - [`StatusModal`] - Processing / result dialog
//! - [`ProgressBar`] - Simulated progress indicator

mod hero;
mod not_found;
mod upload;
mod status_modal;
mod progress;

pub use hero::*;
pub use not_found::*;
pub use upload::*;
pub use status_modal::*;
pub use progress::*;
