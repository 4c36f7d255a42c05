//! URL validation: syntax, scheme and hostname resolution.

use std::sync::Arc;

use tracing::debug;
use url::{Host, Url};

use crate::domain::resolver::HostResolver;
use crate::error::AppError;

/// Longest URL accepted for shortening, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Checks that a raw string is an `http`/`https` URL whose host resolves.
///
/// Syntax errors, other schemes and lookup failures all produce
/// [`AppError::InvalidUrl`]; callers cannot tell them apart.
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Validates `raw_url`, performing one hostname lookup if the syntax is acceptable.
    ///
    /// IP-literal hosts are accepted without a lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] for malformed input, a scheme other than
    /// `http`/`https`, or a host that does not resolve.
    pub async fn validate(&self, raw_url: &str) -> Result<Url, AppError> {
        let url = parse_http_url(raw_url)?;

        match url.host() {
            Some(Host::Domain(domain)) => {
                if let Err(e) = self.resolver.resolve(domain).await {
                    debug!(host = domain, error = %e, "DNS lookup failed");
                    return Err(AppError::invalid_url(format!(
                        "host '{domain}' did not resolve: {e}"
                    )));
                }
            }
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => {}
            None => return Err(AppError::invalid_url("missing host")),
        }

        Ok(url)
    }
}

/// Parses `raw_url` and enforces the scheme whitelist. Performs no I/O.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] for empty, oversized or unparsable input,
/// input containing a NUL byte, and any scheme other than `http` or `https`.
pub fn parse_http_url(raw_url: &str) -> Result<Url, AppError> {
    if raw_url.is_empty() {
        return Err(AppError::invalid_url("empty url"));
    }

    // PostgreSQL TEXT cannot hold NUL, and the raw input is what gets stored.
    if raw_url.contains('\0') {
        return Err(AppError::invalid_url("url contains a NUL byte"));
    }

    if raw_url.len() > MAX_URL_LENGTH {
        return Err(AppError::invalid_url(format!(
            "url exceeds {MAX_URL_LENGTH} bytes"
        )));
    }

    let url = Url::parse(raw_url).map_err(|e| {
        debug!(input = raw_url, error = %e, "Invalid URL format");
        AppError::invalid_url(e.to_string())
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => {
            debug!(scheme, "Invalid protocol");
            Err(AppError::invalid_url(format!("unsupported scheme '{scheme}'")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::{MockHostResolver, ResolveError};

    fn validator_with(resolver: MockHostResolver) -> UrlValidator {
        UrlValidator::new(Arc::new(resolver))
    }

    #[tokio::test]
    async fn test_valid_https_url_resolves_host() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolve()
            .withf(|host| host == "www.example.com")
            .times(1)
            .returning(|_| Ok(()));

        let result = validator_with(resolver)
            .validate("https://www.example.com")
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().host_str(), Some("www.example.com"));
    }

    #[tokio::test]
    async fn test_http_with_path_and_query() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolve()
            .withf(|host| host == "example.com")
            .times(1)
            .returning(|_| Ok(()));

        let result = validator_with(resolver)
            .validate("http://example.com/a/b?q=1#frag")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_ftp_rejected_without_lookup() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().times(0);

        let result = validator_with(resolver).validate("ftp://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_invalid_url() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| Err(ResolveError::NoAddresses));

        let result = validator_with(resolver)
            .validate("https://no-such-host.invalid")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_lookup_timeout_is_invalid_url() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| Err(ResolveError::TimedOut(5000)));

        let result = validator_with(resolver).validate("https://slow.example").await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_ip_literal_skips_lookup() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().times(0);
        let validator = validator_with(resolver);

        assert!(validator.validate("http://127.0.0.1:8080/x").await.is_ok());
        assert!(validator.validate("http://[::1]/").await.is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in [
            "",
            "not a url",
            "example.com",
            "javascript:alert(1)",
            "file:///etc/passwd",
            "mailto:someone@example.com",
            "https://",
        ] {
            assert!(
                matches!(parse_http_url(input), Err(AppError::InvalidUrl(_))),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_nul_byte() {
        for input in [
            "https://www.example.com/a\u{0}b",
            "https://www.example.com/?q=\u{0}",
            "\u{0}https://www.example.com",
        ] {
            assert!(
                matches!(parse_http_url(input), Err(AppError::InvalidUrl(_))),
                "expected rejection for {input:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_nul_byte_rejected_without_lookup() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().times(0);

        let result = validator_with(resolver)
            .validate("https://www.example.com/a\u{0}b")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl(_)));
    }

    #[test]
    fn test_parse_rejects_oversized_url() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));

        assert!(matches!(parse_http_url(&long), Err(AppError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_accepts_uppercase_scheme() {
        let url = parse_http_url("HTTPS://Example.COM/Path").unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }
}
