//! Model definitions for the bookshelf service.
//!
//! This module contains the book data model, service request/response
//! structures, and error types for the bookshelf API.

/// Book model definitions and utilities.
pub mod book;
/// Book service request/response structures.
pub mod book_service;
/// Error types for the bookshelf service.
pub mod error;
