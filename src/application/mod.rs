//! Application layer services implementing business logic.
//!
//! Services consume the repository traits from [`crate::domain`] and give
//! HTTP handlers a small API:
//!
//! - [`services::url_validator::UrlValidator`] - syntax, scheme and DNS checks
//! - [`services::shortening_service::ShorteningService`] - validate, dedupe, allocate, insert
//! - [`services::redirect_service::RedirectService`] - short code to link

pub mod services;
