//! Daily Code Derivation
//!
//! A daily code is a short numeric credential derived from
//! `HMAC-SHA-256(secret, subject ":" day_key)`. It is regenerated on
//! demand for comparison and never persisted. The same derivation runs
//! independently on the out-of-band code-sharing bot, so the rendering
//! steps below (hex, digit filter, zero padding) are a wire contract.

use std::fmt::Write;

use platform::crypto::hmac_sha256;

/// Default code length in decimal digits
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Derive the daily code for a subject on a given day
///
/// Returns `None` when the shared secret is empty: derivation fails
/// closed rather than producing a guessable default.
///
/// Rendering: hex digest, all non-digit characters stripped, first
/// `length` digits, right-padded with zeros when the digest is
/// digit-poor (compatibility with the existing bot-side derivation).
pub fn derive_daily_code(
    subject: &str,
    day_key: &str,
    secret: &str,
    length: usize,
) -> Option<String> {
    if secret.is_empty() {
        return None;
    }

    let mac = hmac_sha256(secret.as_bytes(), format!("{subject}:{day_key}").as_bytes());

    let mut hex = String::with_capacity(64);
    for byte in mac {
        let _ = write!(hex, "{byte:02x}");
    }

    let mut digits: String = hex.chars().filter(char::is_ascii_digit).collect();
    while digits.len() < length {
        digits.push('0');
    }
    digits.truncate(length);

    Some(digits)
}

/// Normalize a submitted code: trim and strip all internal whitespace
pub fn normalize_code(value: &str) -> String {
    value.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_digits_of_requested_length() {
        let code = derive_daily_code("42", "2024-01-01", "s3cret", DEFAULT_CODE_LENGTH).unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        let code = derive_daily_code("42", "2024-01-01", "s3cret", 8).unwrap();
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn test_empty_secret_fails_closed() {
        assert_eq!(derive_daily_code("42", "2024-01-01", "", 6), None);
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  123456  "), "123456");
        assert_eq!(normalize_code("123 456"), "123456");
        assert_eq!(normalize_code("1\t2 3\n456"), "123456");
        assert_eq!(normalize_code(""), "");
    }
}
