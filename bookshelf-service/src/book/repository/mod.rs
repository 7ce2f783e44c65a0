use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use bookshelf_api::model::book::{Book, BookFilter, BookId, BookSummary};
use time::OffsetDateTime;

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

/// Book record for insertion operations.
///
/// Contains all required fields for creating a new book record.
/// `finished` is derived by the create command before insertion.
#[derive(Debug)]
pub struct BookRecordInsert {
    /// Unique identifier for the book
    pub id: BookId,
    /// Timestamp when the book was created
    pub inserted_at: OffsetDateTime,
    /// Name of the book
    pub name: String,
    /// Year of publication
    pub year: i32,
    /// Author of the book
    pub author: String,
    /// Short summary of the book
    pub summary: String,
    /// Publisher of the book
    pub publisher: String,
    /// Number of pages in the book
    pub page_count: u32,
    /// Last page that has been read
    pub read_page: u32,
    /// Whether the book was finished at creation time
    pub finished: bool,
    /// Whether the book is currently being read
    pub reading: bool,
}

/// Complete book record with ownership.
///
/// Represents a fully owned book record stored in the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecordOwned {
    /// Unique identifier for the book
    pub id: BookId,
    /// Name of the book
    pub name: String,
    /// Year of publication
    pub year: i32,
    /// Author of the book
    pub author: String,
    /// Short summary of the book
    pub summary: String,
    /// Publisher of the book
    pub publisher: String,
    /// Number of pages in the book
    pub page_count: u32,
    /// Last page that has been read
    pub read_page: u32,
    /// Whether the book was finished at creation time
    pub finished: bool,
    /// Whether the book is currently being read
    pub reading: bool,
    /// Timestamp when the book was created
    pub inserted_at: OffsetDateTime,
    /// Timestamp when the book was last updated
    pub updated_at: OffsetDateTime,
}

/// Book record for update operations.
///
/// Carries every client-writable field; an update overwrites all of them.
/// `id`, `inserted_at`, and `finished` are deliberately absent since they
/// are immutable after creation.
pub struct BookRecordUpdate<'a> {
    /// Unique identifier for the book to update
    pub id: &'a BookId,
    /// New update timestamp
    pub updated_at: OffsetDateTime,
    /// New name
    pub name: &'a str,
    /// New year of publication
    pub year: i32,
    /// New author
    pub author: &'a str,
    /// New summary
    pub summary: &'a str,
    /// New publisher
    pub publisher: &'a str,
    /// New page count
    pub page_count: u32,
    /// New reading progress
    pub read_page: u32,
    /// New reading flag
    pub reading: bool,
}

/// Repository trait for book data operations.
///
/// Defines the interface for the book collection including CRUD operations
/// and filtered listing. The collection keeps insertion order.
#[async_trait]
pub trait BookRepository: Debug {
    /// Appends a new book record to the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the insertion fails.
    async fn insert(&self, record: BookRecordInsert) -> AppResult<()>;

    /// Overwrites an existing book record in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// Returns `true` if a record was updated, `false` if not found.
    async fn update(&self, update: BookRecordUpdate<'_>) -> AppResult<bool>;

    /// Selects a book record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    ///
    /// # Returns
    ///
    /// Returns the book record if found, `None` otherwise.
    async fn select(&self, id: &BookId) -> AppResult<Option<BookRecordOwned>>;

    /// Selects book records matching the filter, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_filtered(&self, filter: &BookFilter) -> AppResult<Vec<BookRecordOwned>>;

    /// Removes a book record, preserving the relative order of the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion fails.
    ///
    /// # Returns
    ///
    /// Returns `true` if a record was removed, `false` if not found.
    async fn delete(&self, id: &BookId) -> AppResult<bool>;
}

/// Thread-safe shared reference to a book repository.
///
/// Type alias for an Arc-wrapped book repository that can be shared
/// across threads and used in async contexts.
pub type BookRepositoryArc = Arc<dyn BookRepository + Send + Sync>;

impl From<BookRecordOwned> for Book {
    fn from(record: BookRecordOwned) -> Self {
        Self {
            id: record.id,
            name: record.name,
            year: record.year,
            author: record.author,
            summary: record.summary,
            publisher: record.publisher,
            page_count: record.page_count,
            read_page: record.read_page,
            finished: record.finished,
            reading: record.reading,
            inserted_at: record.inserted_at,
            updated_at: record.updated_at,
        }
    }
}

impl From<BookRecordOwned> for BookSummary {
    fn from(record: BookRecordOwned) -> Self {
        Self {
            id: record.id,
            name: record.name,
            publisher: record.publisher,
        }
    }
}
