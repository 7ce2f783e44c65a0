use bookshelf_api::model::{
    book::{Book, BookFilter, BookId, BookSummary},
    error::BookError,
};

use super::repository::BookRepositoryArc;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct BookQueryManager {
    book_repository: BookRepositoryArc,
}

impl BookQueryManager {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        Self { book_repository }
    }

    /// Fetches a single book by id.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::NotFound`] for an unknown id.
    pub async fn query_single(&self, id: &BookId) -> AppResult<Book> {
        let record = self
            .book_repository
            .select(id)
            .await?
            .ok_or(BookError::NotFound)?;

        Ok(record.into())
    }

    /// Lists books matching the filter as lightweight projections,
    /// in insertion order.
    pub async fn query_list(&self, filter: &BookFilter) -> AppResult<Vec<BookSummary>> {
        let records = self.book_repository.select_filtered(filter).await?;

        Ok(records.into_iter().map(BookSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use time::OffsetDateTime;

    use super::*;
    use crate::{
        book::repository::{BookRecordOwned, memory::MemoryBookRepository},
        error::AppError,
    };

    fn record(name: &str) -> BookRecordOwned {
        let now = OffsetDateTime::now_utc();
        BookRecordOwned {
            id: BookId::generate(),
            name: name.to_string(),
            year: 2020,
            author: "Author".into(),
            summary: "Summary".into(),
            publisher: "Publisher".into(),
            page_count: 100,
            read_page: 25,
            finished: false,
            reading: false,
            inserted_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn query_single_returns_full_record_or_not_found() {
        let book = record("Dune");
        let id = book.id;
        let repository: BookRepositoryArc =
            Arc::new(MemoryBookRepository::with_data(vec![book.clone()]));
        let query_manager = BookQueryManager::new(repository);

        let found = query_manager.query_single(&id).await.unwrap();
        assert_eq!(found, Book::from(book));

        let err = query_manager
            .query_single(&BookId::generate())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Book(BookError::NotFound)));
    }

    #[tokio::test]
    async fn query_list_projects_summaries() {
        let repository: BookRepositoryArc = Arc::new(MemoryBookRepository::with_data(vec![
            record("First"),
            record("Second"),
        ]));
        let query_manager = BookQueryManager::new(repository);

        let books = query_manager.query_list(&BookFilter::default()).await.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].name, "First");
        assert_eq!(books[0].publisher, "Publisher");
    }
}
