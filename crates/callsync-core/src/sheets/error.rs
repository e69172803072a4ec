use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - service account token rejected")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited by Google APIs")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No spreadsheet named \"{0}\" is shared with the service account")]
    SpreadsheetNotFound(String),

    #[error("Spreadsheet \"{spreadsheet}\" has no tab named \"{tab}\"")]
    WorksheetNotFound { spreadsheet: String, tab: String },
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl SheetsError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => SheetsError::Unauthorized,
            403 => SheetsError::AccessDenied(truncated),
            404 => SheetsError::NotFound(truncated),
            429 => SheetsError::RateLimited,
            500..=599 => SheetsError::ServerError(truncated),
            _ => SheetsError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}
