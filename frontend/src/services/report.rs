//! HTTP service for the PDF report generator.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{BACKEND_URL, FILE_FIELD, REPORT_PATH};
use crate::types::{AppError, AppResult, ReportParams};

/// Full endpoint URL, query string included.
pub fn report_url(backend_url: &str, params: &ReportParams) -> AppResult<String> {
    let query = params.to_query_string()?;
    Ok(format!("{}{}?{}", backend_url.trim_end_matches('/'), REPORT_PATH, query))
}

/// Upload the PDF and return the generated report bytes.
///
/// Non-success statuses are turned into [`AppError::Server`] carrying the
/// response body as text.
pub async fn generate_report(file: &File, params: &ReportParams) -> AppResult<Vec<u8>> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob(FILE_FIELD, file)
        .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;

    let url = report_url(BACKEND_URL, params)?;
    log::debug!("POST {}", url);

    let response = Request::post(&url).body(form_data)?.send().await?;

    let status = response.status();
    if !is_success(status) {
        let detail = response
            .text()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        return Err(rejection(status, detail));
    }

    response
        .binary()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Any 2xx status carries a report.
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn rejection(status: u16, body: String) -> AppError {
    AppError::Server { status, detail: body }
}
