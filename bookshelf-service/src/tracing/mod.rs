//! Tracing and observability module.
//!
//! Provides tracing setup for the bookshelf service.

/// Tracer configuration and initialization.
pub mod tracer;
