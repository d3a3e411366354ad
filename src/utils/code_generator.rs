//! Short code generation and validation utilities.
//!
//! Generated codes come from a non-cryptographic draw: they are lookup keys,
//! not secrets, and a 6-character alphanumeric space can be enumerated.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Pattern every code, generated or requested, must match.
pub const CODE_PATTERN: &str = r"^[A-Za-z0-9]{6,8}$";

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CODE_PATTERN).expect("code pattern is valid"));

/// Generates a random 6-character code drawn uniformly from `[A-Za-z0-9]`.
///
/// The result is only a candidate; the store decides whether it is free.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` matches [`CODE_PATTERN`].
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Validates a caller-supplied short code.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] unless the code is 6-8 characters drawn
/// from `[A-Za-z0-9]`.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if !is_valid_code(code) {
        return Err(AppError::bad_request(
            "Code must match [A-Za-z0-9]{6,8}",
            json!({ "code": code, "pattern": CODE_PATTERN }),
        ));
    }

    Ok(())
}
