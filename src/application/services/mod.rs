//! Business logic services for the application layer.

pub mod redirect_service;
pub mod shortening_service;
pub mod url_validator;

pub use redirect_service::RedirectService;
pub use shortening_service::ShorteningService;
pub use url_validator::UrlValidator;
