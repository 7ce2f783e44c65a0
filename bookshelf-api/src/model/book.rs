use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::model::error::{BookError, BookResult};

/// Unique identifier of a book.
///
/// Ids are ULIDs, generated once at creation and never reassigned.
/// On the wire they appear as the canonical 26-character string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub Ulid);

impl BookId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Ulid::new())
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BookId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Ulid::from_str(s)?))
    }
}

/// A single book record with reading-progress metadata.
///
/// `finished` is derived from `page_count == read_page` at creation time
/// and is intentionally never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub inserted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Lightweight projection of a book used by the list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub publisher: String,
}

/// Client-supplied book fields, shared by the create and update operations.
///
/// `name` stays optional so that an absent name reports the same validation
/// failure as an empty one instead of a deserialization error. All other
/// fields default when absent from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl BookPayload {
    /// Validates the payload.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::NameRequired`] when the name is absent or empty,
    /// or [`BookError::ReadPageExceedsPageCount`] when the reading progress
    /// is past the end of the book.
    pub fn validate(&self) -> BookResult<()> {
        if self.name.as_deref().unwrap_or_default().is_empty() {
            return Err(BookError::NameRequired);
        }
        if self.read_page > self.page_count {
            return Err(BookError::ReadPageExceedsPageCount);
        }
        Ok(())
    }
}

/// Optional predicates narrowing the list operation's result set.
///
/// Filters are conjunctive and applied in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring match on the book name.
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> BookPayload {
        BookPayload {
            name: Some("Dune".into()),
            year: 1965,
            author: "Frank Herbert".into(),
            summary: "Spice and sand".into(),
            publisher: "Chilton Books".into(),
            page_count: 412,
            read_page: 30,
            reading: true,
        }
    }

    #[test]
    fn validate_accepts_valid_payload() {
        assert_eq!(valid_payload().validate(), Ok(()));
    }

    #[test]
    fn validate_requires_name() {
        let mut payload = valid_payload();
        payload.name = None;
        assert_eq!(payload.validate(), Err(BookError::NameRequired));

        payload.name = Some(String::new());
        assert_eq!(payload.validate(), Err(BookError::NameRequired));
    }

    #[test]
    fn validate_rejects_read_page_beyond_page_count() {
        let mut payload = valid_payload();
        payload.read_page = payload.page_count + 1;
        assert_eq!(payload.validate(), Err(BookError::ReadPageExceedsPageCount));

        // Reading the last page is still valid.
        payload.read_page = payload.page_count;
        assert_eq!(payload.validate(), Ok(()));
    }

    #[test]
    fn payload_defaults_absent_fields() {
        let payload: BookPayload = serde_json::from_str(r#"{"name":"Dune"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Dune"));
        assert_eq!(payload.page_count, 0);
        assert_eq!(payload.read_page, 0);
        assert!(!payload.reading);
    }

    #[test]
    fn book_serializes_camel_case() {
        let id = BookId::generate();
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let book = Book {
            id,
            name: "Dune".into(),
            year: 1965,
            author: "Frank Herbert".into(),
            summary: "Spice and sand".into(),
            publisher: "Chilton Books".into(),
            page_count: 412,
            read_page: 412,
            finished: true,
            reading: false,
            inserted_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["pageCount"], 412);
        assert_eq!(value["readPage"], 412);
        assert_eq!(value["finished"], true);
        assert_eq!(value["insertedAt"], "2023-11-14T22:13:20Z");

        let parsed: Book = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn book_id_round_trips_through_string() {
        let id = BookId::generate();
        assert_eq!(id.to_string().parse::<BookId>().unwrap(), id);
        assert!("not-a-ulid!".parse::<BookId>().is_err());
    }
}
