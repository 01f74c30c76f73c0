//! Required-field presence checks performed before a write.
//!
//! "Present" follows the truthiness rules of the original API surface:
//! absent, null, empty string and 0 all count as missing, while a list is
//! present regardless of content (an empty list passes). Fields are checked
//! in their declared order and the first missing one fails the request.

use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// A non-empty string counts as present.
pub fn has_text(value: &Option<String>) -> bool {
    matches!(value, Some(s) if !s.is_empty())
}

/// A non-zero integer counts as present. Zero is indistinguishable from
/// missing under the truthiness contract, and is rejected.
pub fn nonzero(value: &Option<i32>) -> bool {
    matches!(value, Some(n) if *n != 0)
}

/// Any provided list counts as present, even an empty one.
pub fn has_list(value: &Option<Vec<String>>) -> bool {
    value.is_some()
}

/// Check fields in declared order, short-circuiting on the first missing one.
pub fn ensure_required(checks: &[(&str, bool)]) -> Result<(), AppError> {
    for &(name, present) in checks {
        if !present {
            return Err(AppError::Validation {
                code: ErrorCode::MissingField,
                detail: format!("The field \"{name}\" is required"),
                status: StatusCode::BAD_REQUEST,
            });
        }
    }
    Ok(())
}
