use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use bookshelf_api::model::{
    book::{BookId, BookPayload},
    book_service::{
        ApiResponse, CreateBookResponse, GetBookResponse, ListBooksParams, ListBooksResponse,
    },
    error::BookError,
};

use super::{
    create_book_command::CreateBookCommand, delete_book_command::DeleteBookCommand,
    query_manager::BookQueryManager, update_book_command::UpdateBookCommand,
};
use crate::error::{AppError, AppResult, book_error_status};

/// HTTP adapter for the book service.
///
/// Translates HTTP query/path/body parameters into command and query calls
/// and their results into the response envelopes of the wire contract.
#[derive(Debug, Clone)]
pub struct BookAdapter {
    book_query_manager: BookQueryManager,
    create_book_command: CreateBookCommand,
    update_book_command: UpdateBookCommand,
    delete_book_command: DeleteBookCommand,
}

impl BookAdapter {
    pub fn new(
        book_query_manager: BookQueryManager,
        create_book_command: CreateBookCommand,
        update_book_command: UpdateBookCommand,
        delete_book_command: DeleteBookCommand,
    ) -> Self {
        BookAdapter {
            book_query_manager,
            create_book_command,
            update_book_command,
            delete_book_command,
        }
    }

    /// Builds the HTTP router over this adapter.
    pub fn into_router(self) -> Router {
        Router::new()
            .route("/books", get(list_books).post(create_book))
            .route(
                "/books/{book_id}",
                get(get_book).put(update_book).delete(delete_book),
            )
            .with_state(self)
    }
}

/// Ids are opaque to clients; a path value that does not parse is
/// indistinguishable from an unknown id.
fn parse_book_id(book_id: &str) -> Option<BookId> {
    book_id.parse().ok()
}

fn book_fail(prefix: &str, err: &BookError) -> Response {
    (
        book_error_status(err),
        Json(ApiResponse::fail(format!("{prefix}. {err}"))),
    )
        .into_response()
}

fn book_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::fail("Book not found")),
    )
        .into_response()
}

async fn list_books(
    State(adapter): State<BookAdapter>,
    Query(params): Query<ListBooksParams>,
) -> AppResult<Response> {
    let books = adapter
        .book_query_manager
        .query_list(&params.into_filter())
        .await?;

    Ok(Json(ApiResponse::success(ListBooksResponse { books })).into_response())
}

async fn get_book(
    State(adapter): State<BookAdapter>,
    Path(book_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_book_id(&book_id) else {
        return Ok(book_not_found());
    };

    match adapter.book_query_manager.query_single(&id).await {
        Ok(book) => Ok(Json(ApiResponse::success(GetBookResponse { book })).into_response()),
        Err(AppError::Book(BookError::NotFound)) => Ok(book_not_found()),
        Err(err) => Err(err),
    }
}

async fn create_book(
    State(adapter): State<BookAdapter>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Response> {
    match adapter.create_book_command.execute(&payload).await {
        Ok(result) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success_with_message(
                "Book added successfully",
                CreateBookResponse {
                    book_id: result.book_id,
                },
            )),
        )
            .into_response()),
        Err(AppError::Book(err)) => Ok(book_fail("Failed to add book", &err)),
        Err(err) => Err(err),
    }
}

async fn update_book(
    State(adapter): State<BookAdapter>,
    Path(book_id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Response> {
    let id = parse_book_id(&book_id);

    match adapter
        .update_book_command
        .execute(id.as_ref(), &payload)
        .await
    {
        Ok(()) => Ok(Json(ApiResponse::success_message("Book updated successfully")).into_response()),
        Err(AppError::Book(err)) => Ok(book_fail("Failed to update book", &err)),
        Err(err) => Err(err),
    }
}

async fn delete_book(
    State(adapter): State<BookAdapter>,
    Path(book_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_book_id(&book_id) else {
        return Ok(book_fail("Failed to delete book", &BookError::NotFound));
    };

    match adapter.delete_book_command.execute(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success_message("Book deleted successfully")).into_response()),
        Err(AppError::Book(err)) => Ok(book_fail("Failed to delete book", &err)),
        Err(err) => Err(err),
    }
}
