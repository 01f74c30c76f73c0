//! SeaORM -> AppError translation.
//!
//! Every storage failure collapses to the same generic 500 for callers; the
//! classified cause (constraint violations included) is logged here and
//! nowhere else. Duplicate-title inserts therefore look identical to any
//! other storage failure from the outside.

use tracing::{error, warn};

use crate::error::AppError;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" error messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    if let Some(prefix) = error_msg.find("UNIQUE constraint failed: ") {
        let rest = &error_msg[prefix + "UNIQUE constraint failed: ".len()..];
        return rest.split_whitespace().next();
    }
    None
}

/// Translate a `DbErr` into the caller-facing `AppError`, logging the cause.
pub fn map_db_err(e: sea_orm::DbErr) -> AppError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    if mentions_sqlstate(&error_msg, "23505") || error_msg.contains("UNIQUE constraint failed") {
        let constraint = extract_sqlite_table_column(&error_msg).unwrap_or("unknown");
        warn!(trace_id = %trace_id, constraint = %constraint, "Unique constraint violation");
        return AppError::db();
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, "Foreign key constraint violation");
        return AppError::db();
    }

    error!(trace_id = %trace_id, error = %error_msg, "Database error");
    AppError::db()
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use sea_orm::DbErr;

    use super::*;

    #[test]
    fn test_unique_violation_is_generic_500() {
        let err = map_db_err(DbErr::Custom(
            "UNIQUE constraint failed: games.title".to_string(),
        ));
        assert!(matches!(err, AppError::Db));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_sqlstate_unique_violation_is_generic_500() {
        let err = map_db_err(DbErr::Custom(
            "error returned from database: SQLSTATE(23505) duplicate key value".to_string(),
        ));
        assert!(matches!(err, AppError::Db));
    }

    #[test]
    fn test_other_errors_are_generic_500() {
        let err = map_db_err(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, AppError::Db));
    }

    #[test]
    fn test_extract_sqlite_table_column() {
        assert_eq!(
            extract_sqlite_table_column("UNIQUE constraint failed: games.title"),
            Some("games.title")
        );
        assert_eq!(extract_sqlite_table_column("something else"), None);
    }
}
