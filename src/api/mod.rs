//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing layers
//! - [`routes`] - route composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
