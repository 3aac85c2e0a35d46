//! Application configuration.
//!
//! Centralized configuration for the report frontend.
//! These are hardcoded for the local deployment; the backend is expected
//! on the same machine as the browser.

/// Backend API base URL.
///
/// The PDF report generator service.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Path of the report generation endpoint.
pub const REPORT_PATH: &str = "/api/v1/generate-report-pdf";

/// Path of the upload page; `/` redirects here.
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field carrying the uploaded PDF.
pub const FILE_FIELD: &str = "file";

/// File picker filter hint.
pub const ACCEPTED_FILES: &str = ".pdf";

/// Prefix of the downloaded report name (`reporte_<name>.pdf`).
pub const REPORT_PREFIX: &str = "reporte_";

/// MIME type of the downloaded report.
pub const REPORT_MIME: &str = "application/pdf";

// =============================================================================
// Simulated progress
// =============================================================================

/// Delay between two simulated progress steps (ms).
pub const PROGRESS_TICK_MS: u32 = 150;

/// Number of simulated steps before the cap is reached.
pub const PROGRESS_STEPS: u32 = 20;

/// Highest value the simulation may show before the response arrives.
pub const PROGRESS_CAP: u8 = 90;

/// Longest server error detail shown in the modal (chars).
pub const MAX_ERROR_DETAIL_CHARS: usize = 500;

// =============================================================================
// User-facing texts
// =============================================================================

/// Page title and heading.
pub const APP_TITLE: &str = "Procesador de Documentos Judiciales";

/// Modal text while the request is in flight.
pub const MSG_PROCESSING: &str = "Generando reporte, por favor espera...";

/// Modal text once the report has been downloaded.
pub const MSG_SUCCESS: &str = "Reporte generado y descargado exitosamente.";

/// Banner shown under the form after a download.
pub const SUMMARY_SUCCESS: &str = "✅ Reporte generado y descargado exitosamente.";

/// Prepended to every request failure shown in the modal.
pub const ERROR_PREFIX: &str = "❌ Error al generar PDF: ";
