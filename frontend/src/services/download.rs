//! Browser-side saving of the generated report.
//!
//! The bytes are wrapped in a `Blob`, exposed through a temporary object
//! URL and saved by clicking a hidden `<a download>` element. The object
//! URL is revoked right after the click.

use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::config::{REPORT_MIME, REPORT_PREFIX};
use crate::types::{AppError, AppResult};

static PDF_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.pdf$").expect("Invalid extension regex"));

/// Name of the downloaded report: `reporte_<name>.pdf`, where `<name>` is
/// the uploaded file name with one trailing `.pdf` removed.
pub fn report_file_name(original: &str) -> String {
    let base = PDF_EXTENSION.replace(original, "");
    format!("{}{}.pdf", REPORT_PREFIX, base)
}

/// Save `bytes` as a PDF named `filename`.
pub fn save_pdf(bytes: &[u8], filename: &str) -> AppResult<()> {
    let blob = create_pdf_blob(bytes)?;
    download_blob(&blob, filename)
}

fn create_pdf_blob(bytes: &[u8]) -> AppResult<Blob> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(REPORT_MIME);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| AppError::Browser(format!("Failed to create blob: {:?}", e)))
}

fn download_blob(blob: &Blob, filename: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("No window object".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Browser("No document object".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::Browser("No body element".to_string()))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| AppError::Browser(format!("Failed to create anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| AppError::Browser(format!("Failed to cast to anchor: {:?}", e)))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| AppError::Browser(format!("Failed to create object URL: {:?}", e)))?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let clicked = anchor
        .style()
        .set_property("display", "none")
        .and_then(|_| body.append_child(&anchor))
        .map(|_| anchor.click())
        .and_then(|_| body.remove_child(&anchor).map(|_| ()))
        .map_err(|e| AppError::Browser(format!("Failed to trigger download: {:?}", e)));

    // Revoke even when the anchor could not be attached or detached.
    let revoked = Url::revoke_object_url(&url)
        .map_err(|e| AppError::Browser(format!("Failed to revoke URL: {:?}", e)));

    clicked?;
    revoked?;
    log::debug!("Report saved as {}", filename);
    Ok(())
}
