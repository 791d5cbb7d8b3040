//! Field validation predicates
//!
//! Each predicate takes the raw input value and returns `Err(reason)` with a
//! message suitable for showing inline under the input.

use regex::Regex;
use std::sync::LazyLock;

/// Result of running a field predicate
pub type Validation = Result<(), String>;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Minimum number of digits a phone number must contain
pub const MIN_PHONE_DIGITS: usize = 10;

fn min_trimmed_len(value: &str, min: usize, reason: &str) -> Validation {
    if value.trim().chars().count() < min {
        Err(reason.to_string())
    } else {
        Ok(())
    }
}

pub fn validate_name(value: &str) -> Validation {
    min_trimmed_len(value, 2, "Please enter your full name.")
}

/// Counts digits only, so `+91 98765-43210` is as good as `919876543210`
pub fn validate_phone(value: &str) -> Validation {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        Err("Please enter a valid phone number.".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Validation {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err("Please enter a valid email address.".to_string())
    }
}

pub fn validate_college(value: &str) -> Validation {
    min_trimmed_len(value, 3, "Please enter your college name.")
}

pub fn validate_branch(value: &str) -> Validation {
    min_trimmed_len(value, 2, "Please enter your branch.")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;

        #[test]
        fn test_empty_is_rejected() {
            let reason = validate_name("").unwrap_err();
            assert!(!reason.is_empty());
        }

        #[test]
        fn test_single_char_after_trim_is_rejected() {
            assert!(validate_name("  a  ").is_err());
        }

        #[test]
        fn test_two_chars_pass() {
            assert!(validate_name("Al").is_ok());
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_country_code_with_spaces_passes() {
            assert!(validate_phone("+91 9876543210").is_ok());
        }

        #[test]
        fn test_short_number_is_rejected() {
            assert_eq!(
                validate_phone("12345"),
                Err("Please enter a valid phone number.".to_string())
            );
        }

        #[test]
        fn test_separators_do_not_count_as_digits() {
            assert!(validate_phone("123-456-789").is_err());
            assert!(validate_phone("123-456-7890").is_ok());
        }

        #[test]
        fn test_empty_is_rejected() {
            assert!(validate_phone("").is_err());
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_minimal_address_passes() {
            assert!(validate_email("a@b.co").is_ok());
        }

        #[test]
        fn test_missing_at_is_rejected() {
            assert!(validate_email("not-an-email").is_err());
        }

        #[test]
        fn test_missing_dot_in_domain_is_rejected() {
            assert!(validate_email("a@localhost").is_err());
        }

        #[test]
        fn test_whitespace_is_rejected() {
            assert!(validate_email("a b@c.de").is_err());
            assert!(validate_email(" a@b.co").is_err());
        }

        #[test]
        fn test_empty_is_rejected() {
            assert!(validate_email("").is_err());
        }
    }

    mod college_and_branch {
        use super::*;

        #[test]
        fn test_college_needs_three_chars() {
            assert!(validate_college("IT").is_err());
            assert!(validate_college("PEC").is_ok());
        }

        #[test]
        fn test_branch_needs_two_chars() {
            assert!(validate_branch(" ").is_err());
            assert!(validate_branch("CS").is_ok());
        }
    }
}
