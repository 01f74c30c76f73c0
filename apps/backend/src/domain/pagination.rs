//! Pagination parameters for list endpoints.

use actix_web::http::StatusCode;
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw `page`/`limit` query parameters as they arrive on a list request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

impl PageParams {
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl PageQuery {
    /// Apply defaults (page 1, limit 10) and reject values below 1.
    pub fn resolve(self) -> Result<PageParams, AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 || limit < 1 {
            return Err(AppError::Validation {
                code: ErrorCode::InvalidPagination,
                detail: "Page and limit must be positive integers".to_string(),
                status: StatusCode::BAD_REQUEST,
            });
        }

        Ok(PageParams {
            page: page as u64,
            limit: limit as u64,
        })
    }
}
