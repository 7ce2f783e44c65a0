use thiserror::Error;

/// Errors produced by book operations.
///
/// Validation errors map to HTTP 400 and [`BookError::NotFound`] to 404;
/// the mapping itself lives in the service crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    /// The payload is missing a book name, or the name is empty.
    #[error("Please fill in the book name")]
    NameRequired,
    /// The payload's reading progress is past the end of the book.
    #[error("readPage must not exceed pageCount")]
    ReadPageExceedsPageCount,
    /// No book with the requested id exists.
    #[error("id not found")]
    NotFound,
}

pub type BookResult<T> = Result<T, BookError>;
