use std::sync::Arc;

use async_trait::async_trait;
use bookshelf_api::model::book::{BookFilter, BookId};
use tokio::sync::RwLock;

use crate::{
    book::repository::{BookRecordInsert, BookRecordOwned, BookRecordUpdate, BookRepository},
    error::AppResult,
};

/// In-memory implementation of the book repository.
///
/// Records live in a `Vec` so that listing returns books in insertion order
/// and deletion preserves the relative order of the remaining records.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<Vec<BookRecordOwned>>>,
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookRepository {
    /// Creates a new empty memory book repository.
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a new memory book repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `books` - Initial books to populate the repository with
    pub fn with_data(books: Vec<BookRecordOwned>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn insert(&self, record: BookRecordInsert) -> AppResult<()> {
        self.books.write().await.push(BookRecordOwned {
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
            // A fresh record counts as updated at creation time.
            updated_at: record.inserted_at,
        });
        Ok(())
    }

    async fn update(&self, update: BookRecordUpdate<'_>) -> AppResult<bool> {
        let mut books = self.books.write().await;
        if let Some(book) = books.iter_mut().find(|book| book.id == *update.id) {
            // `id`, `inserted_at`, and `finished` stay as created.
            book.name = update.name.to_string();
            book.year = update.year;
            book.author = update.author.to_string();
            book.summary = update.summary.to_string();
            book.publisher = update.publisher.to_string();
            book.page_count = update.page_count;
            book.read_page = update.read_page;
            book.reading = update.reading;
            book.updated_at = update.updated_at;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn select(&self, id: &BookId) -> AppResult<Option<BookRecordOwned>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == *id).cloned())
    }

    async fn select_filtered(&self, filter: &BookFilter) -> AppResult<Vec<BookRecordOwned>> {
        let name_filter = filter.name.as_ref().map(|name| name.to_lowercase());
        let books = self.books.read().await;
        Ok(books
            .iter()
            .filter(|book| {
                name_filter
                    .as_ref()
                    .is_none_or(|name| book.name.to_lowercase().contains(name))
            })
            .filter(|book| filter.reading.is_none_or(|reading| book.reading == reading))
            .filter(|book| {
                filter
                    .finished
                    .is_none_or(|finished| book.finished == finished)
            })
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &BookId) -> AppResult<bool> {
        let mut books = self.books.write().await;
        if let Some(index) = books.iter().position(|book| book.id == *id) {
            books.remove(index);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
