//! HTTP middleware: CORS and request tracing.

pub mod cors;
pub mod tracing;
