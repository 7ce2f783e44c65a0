use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bookshelf_api::model::{book_service::ApiResponse, error::BookError};
use thiserror::Error;
use tracing::error;

/// Application error types.
///
/// Represents all possible errors that can occur in the bookshelf service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal application error.
    ///
    /// Represents unexpected internal errors that occur during service operation.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Book domain error.
    ///
    /// Represents validation and lookup failures of book operations.
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Application result type.
///
/// Type alias for Result with `AppError` as the error type.
/// Used throughout the application for consistent error handling.
pub type AppResult<T> = Result<T, AppError>;

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(config::ConfigError, std::io::Error);

/// Maps a book error to its HTTP status code.
pub fn book_error_status(err: &BookError) -> StatusCode {
    match err {
        BookError::NameRequired | BookError::ReadPageExceedsPageCount => StatusCode::BAD_REQUEST,
        BookError::NotFound => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for AppError {
    /// Converts application errors to HTTP responses.
    ///
    /// Maps errors to the fail envelope with the appropriate status code.
    /// The adapter usually answers book errors itself with operation-specific
    /// messages; this conversion is the catch-all for whatever bubbles up.
    fn into_response(self) -> Response {
        match self {
            AppError::Book(err) => (
                book_error_status(&err),
                Json(ApiResponse::fail(err.to_string())),
            )
                .into_response(),
            AppError::Internal(err) => {
                error!("internal service error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::fail("internal server error")),
                )
                    .into_response()
            }
        }
    }
}
