use serde::{Deserialize, Serialize};

use crate::model::book::{Book, BookFilter, BookId, BookSummary};

/// Raw query parameters of the list-books operation.
///
/// `reading` and `finished` arrive as strings; `"1"` and `"0"` select a
/// boolean filter and any other value (including absence) leaves the
/// filter unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListBooksParams {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl ListBooksParams {
    pub fn into_filter(self) -> BookFilter {
        BookFilter {
            name: self.name.filter(|name| !name.is_empty()),
            reading: parse_flag(self.reading.as_deref()),
            finished: parse_flag(self.finished.as_deref()),
        }
    }
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

/// Response status discriminator, `"success"` or `"fail"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Response envelope shared by every operation.
///
/// Successful responses carry `data` and sometimes a `message`; failures
/// carry only a `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Data payload of the list-books response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBooksResponse {
    pub books: Vec<BookSummary>,
}

/// Data payload of the get-book response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetBookResponse {
    pub book: Book,
}

/// Data payload of the create-book response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookResponse {
    pub book_id: BookId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_parse_tri_state_flags() {
        let filter = ListBooksParams {
            name: None,
            reading: Some("1".into()),
            finished: Some("0".into()),
        }
        .into_filter();
        assert_eq!(filter.reading, Some(true));
        assert_eq!(filter.finished, Some(false));

        // Any other value means "unset".
        let filter = ListBooksParams {
            name: None,
            reading: Some("2".into()),
            finished: Some("yes".into()),
        }
        .into_filter();
        assert_eq!(filter.reading, None);
        assert_eq!(filter.finished, None);

        assert_eq!(ListBooksParams::default().into_filter(), BookFilter::default());
    }

    #[test]
    fn params_drop_empty_name() {
        let filter = ListBooksParams {
            name: Some(String::new()),
            reading: None,
            finished: None,
        }
        .into_filter();
        assert_eq!(filter.name, None);
    }

    #[test]
    fn fail_envelope_skips_data() {
        let value = serde_json::to_value(ApiResponse::fail("id not found")).unwrap();
        assert_eq!(value["status"], "fail");
        assert_eq!(value["message"], "id not found");
        assert!(value.get("data").is_none());
    }
}
