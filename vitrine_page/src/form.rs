// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form validation.
//!
//! Validation checks shape only: an address that looks like `local@domain.tld`
//! and a message long enough to be worth reading. Nothing is sent anywhere.
//!
//! ```rust
//! use vitrine_page::form::{ValidationError, validate_contact};
//!
//! assert_eq!(validate_contact("a@b.co", "Hello there!"), Ok(()));
//! assert_eq!(validate_contact("a@b", "Hello there!"), Err(ValidationError::InvalidEmail));
//! assert_eq!(validate_contact("a@b.co", "  too short  "), Err(ValidationError::MessageTooShort));
//! ```

use core::fmt;

/// Minimum number of characters in a trimmed message.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Why a submission was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The email field is not shaped like `local@domain.tld`.
    InvalidEmail,
    /// The trimmed message is shorter than the minimum.
    MessageTooShort,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
            Self::MessageTooShort => f.write_str("Message must be at least 10 characters"),
        }
    }
}

impl core::error::Error for ValidationError {}

/// Whitespace as matched by `\s` in browser regular expressions.
///
/// This is the Unicode `White_Space` set plus U+FEFF, minus U+0085.
#[must_use]
pub fn is_form_whitespace(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Returns `true` for values shaped like `local@domain.tld`.
///
/// Exactly one `@`, no whitespace (see [`is_form_whitespace`]), a non-empty
/// local part, and a domain with a `.` that has at least one character on each
/// side.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(is_form_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len())
}

/// Returns `true` if `message` has at least `min_chars` characters after trimming.
#[must_use]
pub fn is_long_enough(message: &str, min_chars: usize) -> bool {
    message.trim().chars().count() >= min_chars
}

/// Validates a contact submission with the default message length.
///
/// The email is checked first; only the first failure is reported.
pub fn validate_contact(email: &str, message: &str) -> Result<(), ValidationError> {
    validate_contact_with(email, message, MIN_MESSAGE_CHARS)
}

/// Validates a contact submission with a custom minimum message length.
pub fn validate_contact_with(
    email: &str,
    message: &str,
    min_chars: usize,
) -> Result<(), ValidationError> {
    if !is_email_shaped(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_long_enough(message, min_chars) {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_addresses() {
        assert!(is_email_shaped("a@b.co"));
        assert!(is_email_shaped("first.last+tag@mail.example.org"));
        assert!(is_email_shaped("x@b..c"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "", "a@b", "@b.co", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", "a b@c.co", "a@b.co ",
            "plain",
        ] {
            assert!(!is_email_shaped(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn whitespace_matches_browser_regex_class() {
        assert!(is_email_shaped("a\u{85}b@c.co"));
        assert!(!is_email_shaped("a\u{feff}@b.co"));
        assert!(!is_email_shaped("a\u{a0}@b.co"));
        assert!(!is_email_shaped("a@b\u{2028}.co"));
        assert!(!is_email_shaped("a@b.c\t"));
    }

    #[test]
    fn message_length_boundary() {
        assert!(!is_long_enough("123456789", 10));
        assert!(is_long_enough("1234567890", 10));
        assert!(!is_long_enough("   123456789   ", 10));
    }

    #[test]
    fn email_is_checked_first() {
        assert_eq!(validate_contact("nope", "short"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn errors_render_user_messages() {
        use alloc::string::ToString;
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }
}
