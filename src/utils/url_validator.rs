//! Destination URL validation.
//!
//! A destination must parse as an absolute URL and use `http` or `https`.
//! Malformed input and disallowed schemes are reported through the same
//! error type, since callers treat both as the same client error.

use url::Url;

/// Errors produced by destination URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a destination URL and returns it in parsed canonical form.
///
/// Rejects relative references, unparsable strings, and any scheme other
/// than `http`/`https` (including `javascript:`, `data:`, `file:` and
/// friends).
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    Ok(url.to_string())
}
