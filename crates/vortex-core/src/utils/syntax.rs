//! Email and phone syntax checkers.
//!
//! Both checkers take the raw field value and return a plain boolean. They
//! do not trim: callers trim before checking, so that "required" and
//! "invalid format" can be told apart.

use regex::Regex;
use std::sync::OnceLock;

/// Returns `true` if `value` looks like `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use vortex_core::utils::syntax::is_valid_email;
///
/// assert!(is_valid_email("jane.doe+news@example.co.uk"));
/// assert!(!is_valid_email("jane@localhost"));
/// assert!(!is_valid_email("not an email"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();

    let email = EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
    });
    email.is_match(value)
}

/// Returns `true` if `value` is a plausible phone number.
///
/// Spaces, dashes and parentheses are ignored. What remains must be an
/// optional leading `+` followed by 1 to 16 digits, the first of which is
/// not zero.
///
/// # Examples
///
/// ```
/// use vortex_core::utils::syntax::is_valid_phone;
///
/// assert!(is_valid_phone("+1 (555) 123-4567"));
/// assert!(is_valid_phone("5551234567"));
/// assert!(!is_valid_phone("call me"));
/// assert!(!is_valid_phone("0123"));
/// ```
pub fn is_valid_phone(value: &str) -> bool {
    static PHONE: OnceLock<Regex> = OnceLock::new();

    let phone = PHONE.get_or_init(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid regex"));
    let compact: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    phone.is_match(&compact)
}
