//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Form Types** - The four text fields and their query encoding
//! - **Error Types** - Frontend error handling

use serde::Serialize;
use thiserror::Error;

use crate::config::MAX_ERROR_DETAIL_CHARS;

// =============================================================================
// Form Types
// =============================================================================

/// One of the four text inputs of the upload form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// Full name of the lawyer
    LawyerName,
    /// Bar registration number
    LawyerId,
    /// Lawyer's national ID
    LawyerDni,
    /// Full name of the client
    ClientName,
}

impl FormField {
    /// All fields, in display order.
    pub const ALL: [FormField; 4] = [
        FormField::LawyerName,
        FormField::LawyerId,
        FormField::LawyerDni,
        FormField::ClientName,
    ];

    /// Placeholder shown in the empty input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::LawyerName => "Nombre del abogado",
            FormField::LawyerId => "Número de colegiatura",
            FormField::LawyerDni => "DNI del abogado",
            FormField::ClientName => "Nombre del cliente",
        }
    }
}

/// Text values typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportForm {
    /// Full name of the lawyer
    pub lawyer_name: String,
    /// Bar registration number, digits only
    pub lawyer_id: String,
    /// National ID, exactly 8 digits
    pub lawyer_dni: String,
    /// Full name of the client
    pub client_name: String,
}

impl ReportForm {
    /// Current value of `field`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::LawyerName => &self.lawyer_name,
            FormField::LawyerId => &self.lawyer_id,
            FormField::LawyerDni => &self.lawyer_dni,
            FormField::ClientName => &self.client_name,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::LawyerName => &mut self.lawyer_name,
            FormField::LawyerId => &mut self.lawyer_id,
            FormField::LawyerDni => &mut self.lawyer_dni,
            FormField::ClientName => &mut self.client_name,
        };
        *slot = value;
    }

    /// Empty all four fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Query parameters sent alongside the uploaded file.
    pub fn to_params(&self) -> ReportParams {
        ReportParams {
            lawyer_name: self.lawyer_name.clone(),
            lawyer_id: self.lawyer_id.clone(),
            lawyer_dni: self.lawyer_dni.clone(),
            client_name: self.client_name.clone(),
        }
    }
}

/// Query string of the report endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ReportParams {
    /// `lawyer_name` query parameter
    pub lawyer_name: String,
    /// `lawyer_id` query parameter
    pub lawyer_id: String,
    /// `lawyer_dni` query parameter
    pub lawyer_dni: String,
    /// `client_name` query parameter
    pub client_name: String,
}

impl ReportParams {
    /// Encode as `lawyer_name=..&lawyer_id=..&lawyer_dni=..&client_name=..`.
    pub fn to_query_string(&self) -> AppResult<String> {
        serde_qs::to_string(self).map_err(|e| AppError::Browser(format!("Failed to encode query: {}", e)))
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Local validation failures, displayed verbatim in the modal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A text field is empty or no file was selected.
    #[error("Todos los campos y el archivo son obligatorios.")]
    MissingInput,

    /// Registration number contains a non-digit.
    #[error("La colegiatura debe ser numérica.")]
    NonNumericLawyerId,

    /// National ID is not exactly 8 digits.
    #[error("El DNI debe tener exactamente 8 dígitos.")]
    InvalidDni,
}

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Form rejected before any request.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend answered with a non-success status.
    #[error("{}", server_detail(.status, .detail))]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        detail: String,
    },

    /// Request never got an answer.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be read.
    #[error("Failed to read response: {0}")]
    Decode(String),

    /// DOM or JS API failure.
    #[error("{0}")]
    Browser(String),
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

/// Trimmed server body, capped in length; falls back to the status code.
fn server_detail(status: &u16, detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        return format!("HTTP {}", status);
    }
    match detail.char_indices().nth(MAX_ERROR_DETAIL_CHARS) {
        Some((cut, _)) => format!("{}…", &detail[..cut]),
        None => detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> ReportForm {
        ReportForm {
            lawyer_name: "Ana Pérez".to_string(),
            lawyer_id: "12345".to_string(),
            lawyer_dni: "87654321".to_string(),
            client_name: "Luis Gómez".to_string(),
        }
    }

    #[test]
    fn test_form_set_and_get() {
        let mut form = ReportForm::default();
        for field in FormField::ALL {
            form.set(field, field.placeholder().to_string());
        }
        assert_eq!(form.get(FormField::LawyerDni), "DNI del abogado");
        assert_eq!(form.client_name, "Nombre del cliente");

        form.clear();
        assert_eq!(form, ReportForm::default());
    }

    #[test]
    fn test_query_string_uses_backend_names() {
        let query = sample_form().to_params().to_query_string().unwrap();

        assert!(query.starts_with("lawyer_name="));
        assert!(query.contains("&lawyer_id=12345"));
        assert!(query.contains("&lawyer_dni=87654321"));
        assert!(query.contains("&client_name="));
        assert!(!query.contains(' '));

        let decoded: ReportParams = serde_qs::from_str(&query).unwrap();
        assert_eq!(decoded.client_name, "Luis Gómez");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            AppError::from(ValidationError::InvalidDni).to_string(),
            "El DNI debe tener exactamente 8 dígitos."
        );
        assert!(ValidationError::MissingInput.to_string().contains("obligatorios"));
    }

    #[test]
    fn test_server_error_detail() {
        let err = AppError::Server { status: 500, detail: "  server error\n".to_string() };
        assert_eq!(err.to_string(), "server error");

        let empty = AppError::Server { status: 502, detail: String::new() };
        assert_eq!(empty.to_string(), "HTTP 502");

        let long = AppError::Server { status: 500, detail: "x".repeat(MAX_ERROR_DETAIL_CHARS + 10) };
        assert_eq!(long.to_string().chars().count(), MAX_ERROR_DETAIL_CHARS + 1);
    }
}
