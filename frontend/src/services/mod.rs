//! Backend and browser services.
//!
//! # Services
//!
//! - [`report`] - PDF upload to the report generator
//! - [`download`] - Saving the generated report in the browser
//! - [`ticker`] - Simulated progress timer

pub mod report;
pub mod download;
pub mod ticker;

pub use report::*;
pub use download::*;
pub use ticker::*;
