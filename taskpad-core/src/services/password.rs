//! Password policy - registration-time validation
//!
//! The policy applies only at registration; login matches whatever was
//! stored, exactly. At least 8 characters, one lowercase, one uppercase,
//! one digit, one special character, and every character drawn from the
//! allowed alphabet.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::result::{Error, Result};

/// Special characters accepted (and required, at least once) by the policy.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=";

/// Message shown when a password fails the policy.
pub const POLICY_MESSAGE: &str =
    "Password must be 8+ chars, include uppercase, lowercase, digit, and special char";

// The alphabet restriction is the one part a single regex expresses well;
// the per-class requirements are plain scans since the regex crate has no
// lookahead.
static ALLOWED_ALPHABET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!@#$%^&*()_+\-=]{8,}$").expect("alphabet regex is valid")
});

/// Check a candidate password against the registration policy.
///
/// Returns `Error::PasswordPolicy` with the user-facing message on any
/// violation; the caller must not partially register.
pub fn validate(password: &str) -> Result<()> {
    if is_valid(password) {
        Ok(())
    } else {
        Err(Error::PasswordPolicy(POLICY_MESSAGE.to_string()))
    }
}

fn is_valid(password: &str) -> bool {
    ALLOWED_ALPHABET.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_conforming_password() {
        assert!(validate("Passw0rd!").is_ok());
        assert!(validate("Aa1=aaaa").is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        assert!(validate("Aa1!bcd").is_err());
    }

    #[test]
    fn test_rejects_missing_character_classes() {
        assert!(validate("passw0rd!").is_err()); // no uppercase
        assert!(validate("PASSW0RD!").is_err()); // no lowercase
        assert!(validate("Password!").is_err()); // no digit
        assert!(validate("Passw0rdX").is_err()); // no special
        assert!(validate("weak").is_err());
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        // Space and unicode are outside the allowed alphabet even when
        // every required class is present.
        assert!(validate("Passw0rd! ").is_err());
        assert!(validate("Pässw0rd!").is_err());
    }

    #[test]
    fn test_error_carries_policy_message() {
        let err = validate("weak").unwrap_err();
        assert_eq!(err.to_string(), POLICY_MESSAGE);
    }
}
