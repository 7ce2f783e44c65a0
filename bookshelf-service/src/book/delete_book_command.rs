use bookshelf_api::model::{book::BookId, error::BookError};

use super::repository::BookRepositoryArc;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct DeleteBookCommand {
    book_repository: BookRepositoryArc,
}

impl DeleteBookCommand {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        Self { book_repository }
    }

    /// Removes a book from the collection.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::NotFound`] for an unknown id.
    pub async fn execute(&self, id: &BookId) -> AppResult<()> {
        let deleted = self.book_repository.delete(id).await?;
        if !deleted {
            return Err(BookError::NotFound.into());
        }

        Ok(())
    }
}
