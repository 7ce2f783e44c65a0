//! Bookshelf API definitions.
//!
//! This crate provides the shared contract of the bookshelf service:
//!
//! - Book model and identifier types
//! - Service request/response structures
//! - Error handling types
//!
//! It contains no I/O; the service crate builds its repository, commands,
//! and HTTP adapter on top of these definitions.

pub mod model;
