//! Target URL validation.
//!
//! Target URLs are checked once, at creation time, and then stored exactly as
//! the caller sent them. Nothing is normalized and nothing is re-validated
//! when a link is read or followed.

use url::Url;

/// Errors that can occur during target URL validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("target_url required")]
    Missing,

    #[error("Invalid URL: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` is a well-formed absolute URL.
///
/// Any scheme is accepted as long as the URL parses without a base, so
/// `https://example.com/a?b=c` passes and `not-a-url` or `/relative/path`
/// do not.
///
/// The stored value is sent back verbatim in a `Location` header, so control
/// characters are rejected even where the URL parser would silently drop them
/// (tabs and newlines inside the URL).
///
/// # Errors
///
/// Returns [`UrlValidationError::Missing`] for an empty or blank input.
/// Returns [`UrlValidationError::InvalidFormat`] if the URL does not parse or
/// contains control characters.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Missing);
    }

    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "control characters are not allowed".to_string(),
        ));
    }

    Url::parse(input)
        .map(|_| ())
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_urls() {
        assert!(validate_target_url("https://example.com").is_ok());
        assert!(validate_target_url("http://example.com:8080/path?q=1#top").is_ok());
        assert!(validate_target_url("ftp://files.example.com/a.txt").is_ok());
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(validate_target_url("/relative/path").is_err());
        assert!(validate_target_url("example.com").is_err());
        assert!(validate_target_url("http://").is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\r\nSet-Cookie: x=1",
            "https://exam\tple.com",
            "https://example.com/\u{7f}",
        ] {
            assert!(
                matches!(
                    validate_target_url(input),
                    Err(UrlValidationError::InvalidFormat(_))
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_non_ascii_verbatim() {
        assert!(validate_target_url("https://example.com/caf\u{e9}").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_target_url(""), Err(UrlValidationError::Missing));
        assert_eq!(validate_target_url("   "), Err(UrlValidationError::Missing));
    }
}
