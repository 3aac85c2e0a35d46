//! Local validation of the upload form.
//!
//! Runs before any request is built. Checks are ordered: missing input
//! first, then the registration number, then the national ID, so the
//! user always sees the first problem only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{ReportForm, ValidationError};

// ASCII digits only; `\d` would accept any Unicode digit.
static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Invalid digits regex"));

static EIGHT_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("Invalid DNI regex"));

/// Validate the form and the presence of a selected file.
///
/// # Returns
/// * `Ok(())` if a request may be sent
/// * `Err(ValidationError)` with the message to show otherwise
pub fn validate_form(form: &ReportForm, has_file: bool) -> Result<(), ValidationError> {
    let any_empty = [
        &form.lawyer_name,
        &form.lawyer_id,
        &form.lawyer_dni,
        &form.client_name,
    ]
    .iter()
    .any(|value| value.is_empty());

    if !has_file || any_empty {
        return Err(ValidationError::MissingInput);
    }
    if !DIGITS_ONLY.is_match(&form.lawyer_id) {
        return Err(ValidationError::NonNumericLawyerId);
    }
    if !EIGHT_DIGITS.is_match(&form.lawyer_dni) {
        return Err(ValidationError::InvalidDni);
    }
    Ok(())
}
