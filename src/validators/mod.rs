//! Validation layer for all domain entities.
//!
//! Each validator runs two passes. The first collects every field-constraint
//! violation into a map keyed by JSON field name, so a client sees all of its
//! mistakes at once. Only when every field is well formed does the second
//! pass run the entity's uniqueness lookup against the repository; a
//! uniqueness failure is a distinct conflict error carrying the single
//! offending field.

mod restaurant_validator;
mod review_validator;
mod user_validator;

pub use restaurant_validator::{RestaurantValidator, UNIQUE_PHONE_FIELD, UNIQUE_PHONE_MESSAGE};
pub use review_validator::{ReviewValidator, UNIQUE_REVIEW_FIELD, UNIQUE_REVIEW_MESSAGE};
pub use user_validator::{UNIQUE_EMAIL_FIELD, UNIQUE_EMAIL_MESSAGE, UserValidator};

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Letters, hyphens and apostrophes only.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z'-]+$").expect("name pattern is valid"));

/// A leading zero followed by ten digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^0[0-9]{10}$").expect("phone pattern is valid"));

/// Checks the shared name constraints (presence, 1-50 chars, letter pattern).
///
/// User and restaurant names follow identical rules; the first failing check
/// per field is the one reported.
pub(crate) fn check_name(value: Option<&str>, violations: &mut BTreeMap<String, String>) {
    match value {
        None => {
            violations.insert("name".to_string(), "Name is required".to_string());
        }
        Some(name) => {
            let length = name.chars().count();
            if length == 0 || length > 50 {
                violations.insert(
                    "name".to_string(),
                    "Name must be between 1 and 50 characters".to_string(),
                );
            } else if !NAME_PATTERN.is_match(name) {
                violations.insert(
                    "name".to_string(),
                    "Please use a name without numbers or specials".to_string(),
                );
            }
        }
    }
}

/// Checks the shared phone number constraints (presence, `0` + 10 digits).
pub(crate) fn check_phone_number(value: Option<&str>, violations: &mut BTreeMap<String, String>) {
    match value {
        None => {
            violations.insert(
                "phoneNumber".to_string(),
                "Phone number is required".to_string(),
            );
        }
        Some(phone) => {
            if !PHONE_PATTERN.is_match(phone) {
                violations.insert(
                    "phoneNumber".to_string(),
                    "Please use a valid phone number, starting with 0 and 11 digits long"
                        .to_string(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_name_pattern_accepts_letters_hyphen_apostrophe() {
        assert!(NAME_PATTERN.is_match("O'Brien"));
        assert!(NAME_PATTERN.is_match("Anne-Marie"));
        assert!(NAME_PATTERN.is_match("TestUser"));
    }

    #[test]
    fn test_name_pattern_rejects_digits_and_specials() {
        assert!(!NAME_PATTERN.is_match("User1"));
        assert!(!NAME_PATTERN.is_match("&^"));
        assert!(!NAME_PATTERN.is_match("name with spaces"));
        assert!(!NAME_PATTERN.is_match(""));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE_PATTERN.is_match("01234567890"));
        assert!(!PHONE_PATTERN.is_match("1234567890"));
        assert!(!PHONE_PATTERN.is_match("0123456789"));
        assert!(!PHONE_PATTERN.is_match("012345678901"));
        assert!(!PHONE_PATTERN.is_match("0123456789a"));
    }

    proptest! {
        /// Any string of letters, hyphens and apostrophes up to 50 chars
        /// passes the name checks.
        #[test]
        fn prop_valid_names_pass(name in "[A-Za-z'-]{1,50}") {
            let mut violations = std::collections::BTreeMap::new();
            check_name(Some(&name), &mut violations);
            prop_assert!(violations.is_empty());
        }

        /// A name containing any digit is always rejected.
        #[test]
        fn prop_names_with_digits_fail(
            prefix in "[A-Za-z]{0,10}",
            digit in "[0-9]",
            suffix in "[A-Za-z]{0,10}",
        ) {
            let name = format!("{}{}{}", prefix, digit, suffix);
            let mut violations = std::collections::BTreeMap::new();
            check_name(Some(&name), &mut violations);
            prop_assert_eq!(violations.len(), 1);
            prop_assert!(violations.contains_key("name"));
        }

        /// Any 11-character string starting with 0 and containing only
        /// digits passes the phone checks; anything else of that length
        /// with a different first character fails.
        #[test]
        fn prop_phone_leading_zero(rest in "[0-9]{10}", lead in "[1-9]") {
            let mut ok = std::collections::BTreeMap::new();
            check_phone_number(Some(&format!("0{}", rest)), &mut ok);
            prop_assert!(ok.is_empty());

            let mut bad = std::collections::BTreeMap::new();
            check_phone_number(Some(&format!("{}{}", lead, rest)), &mut bad);
            prop_assert!(bad.contains_key("phoneNumber"));
        }
    }
}
