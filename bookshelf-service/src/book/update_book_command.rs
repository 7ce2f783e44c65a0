use bookshelf_api::model::{
    book::{BookId, BookPayload},
    error::BookError,
};
use time::OffsetDateTime;

use super::repository::{BookRecordUpdate, BookRepositoryArc};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct UpdateBookCommand {
    book_repository: BookRepositoryArc,
}

impl UpdateBookCommand {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        Self { book_repository }
    }

    /// Validates the payload and overwrites an existing book in place.
    ///
    /// Validation runs before the id lookup, so an invalid payload wins
    /// over an unknown id. The id is optional for the same reason: an
    /// unparseable path id only surfaces as `NotFound` once the payload
    /// has passed validation. `id`, `inserted_at`, and `finished` are
    /// never touched; `updated_at` is set to the current time.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid payload, or
    /// [`BookError::NotFound`] for an unknown id.
    pub async fn execute(&self, id: Option<&BookId>, payload: &BookPayload) -> AppResult<()> {
        payload.validate()?;

        let id = id.ok_or(BookError::NotFound)?;
        let now = OffsetDateTime::now_utc();

        let update = BookRecordUpdate {
            id,
            updated_at: now,
            name: payload.name.as_deref().unwrap_or_default(),
            year: payload.year,
            author: &payload.author,
            summary: &payload.summary,
            publisher: &payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            reading: payload.reading,
        };

        let updated = self.book_repository.update(update).await?;
        if !updated {
            return Err(BookError::NotFound.into());
        }

        Ok(())
    }
}
