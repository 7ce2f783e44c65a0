use bookshelf_api::model::book::{BookId, BookPayload};
use time::OffsetDateTime;

use super::repository::{BookRecordInsert, BookRepositoryArc};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    book_repository: BookRepositoryArc,
}

#[derive(Debug)]
pub struct CreateBookCommandResult {
    pub book_id: BookId,
}

impl CreateBookCommand {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        Self { book_repository }
    }

    /// Validates the payload and appends a new book to the collection.
    ///
    /// `finished` is derived here, once, from `page_count == read_page`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing name or a reading progress
    /// past the end of the book; nothing is added in that case.
    pub async fn execute(&self, payload: &BookPayload) -> AppResult<CreateBookCommandResult> {
        payload.validate()?;

        let id = BookId::generate();
        let now = OffsetDateTime::now_utc();

        let record = BookRecordInsert {
            id,
            inserted_at: now,
            name: payload.name.clone().unwrap_or_default(),
            year: payload.year,
            author: payload.author.clone(),
            summary: payload.summary.clone(),
            publisher: payload.publisher.clone(),
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.page_count == payload.read_page,
            reading: payload.reading,
        };

        self.book_repository.insert(record).await?;

        Ok(CreateBookCommandResult { book_id: id })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bookshelf_api::model::{book::BookFilter, error::BookError};

    use super::*;
    use crate::{book::repository::memory::MemoryBookRepository, error::AppError};

    fn command() -> (CreateBookCommand, BookRepositoryArc) {
        let repository: BookRepositoryArc = Arc::new(MemoryBookRepository::new());
        (CreateBookCommand::new(Arc::clone(&repository)), repository)
    }

    #[tokio::test]
    async fn derives_finished_at_creation() {
        let (command, repository) = command();

        let result = command
            .execute(&BookPayload {
                name: Some("Finished one".into()),
                page_count: 100,
                read_page: 100,
                ..Default::default()
            })
            .await
            .unwrap();

        let book = repository.select(&result.book_id).await.unwrap().unwrap();
        assert!(book.finished);
        assert_eq!(book.inserted_at, book.updated_at);

        let result = command
            .execute(&BookPayload {
                name: Some("Unfinished one".into()),
                page_count: 100,
                read_page: 99,
                ..Default::default()
            })
            .await
            .unwrap();
        let book = repository.select(&result.book_id).await.unwrap().unwrap();
        assert!(!book.finished);
    }

    #[tokio::test]
    async fn rejects_invalid_payload_without_inserting() {
        let (command, repository) = command();

        let err = command.execute(&BookPayload::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Book(BookError::NameRequired)));

        let err = command
            .execute(&BookPayload {
                name: Some("Name".into()),
                page_count: 10,
                read_page: 11,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Book(BookError::ReadPageExceedsPageCount)
        ));

        let books = repository
            .select_filtered(&BookFilter::default())
            .await
            .unwrap();
        assert!(books.is_empty());
    }
}
