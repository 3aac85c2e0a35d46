//! Judicial report uploader - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a PDF together with the lawyer and
//! client details, and downloads the report generated by the backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage                                                  │
//! │  ├── Hero (title, description)                              │
//! │  ├── File picker + four text fields + submit button         │
//! │  ├── Summary banner (after a download)                      │
//! │  └── StatusModal ── ProgressBar                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Form fields, query parameters and errors
//! - [`validation`] - Local form validation
//! - [`state`] - Upload page view-model
//! - [`components`] - UI components
//! - [`services`] - Backend request, download and progress timer

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    FormField, ReportForm, ReportParams,
    // Errors
    AppError, AppResult, ValidationError,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Report uploader - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=RedirectToUpload/>
                    <Route path=UPLOAD_PATH view=UploadPage/>
                    <Route path="/*any" view=UploadPage/>
                    // Same score as the wildcard above, which wins by declaration order.
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// `/` replaces itself with the upload page in the history.
#[component]
fn RedirectToUpload() -> impl IntoView {
    let options = NavigateOptions {
        replace: true,
        ..Default::default()
    };
    view! { <Redirect path=UPLOAD_PATH options=options/> }
}
