//! Permissive email-shape check

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::as_strings;
use crate::error::ValidationResult;
use crate::registry::Rule;

// Very loose email shape: local part, "@", dotted domain labels, not ending
// in a bare dot. Case-insensitive. Prefers false positives to false
// negatives.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^[^@]+@[a-z-]+\.[a-z.-]*[a-z]$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// True iff every string in the value looks like an email address.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veriform_core::rules::is_email;
///
/// assert!(is_email(&json!("pete@example.com")));
/// assert!(is_email(&json!("First.Last@sub.example.co.uk")));
/// assert!(!is_email(&json!("no-at-sign.example.com")));
/// assert!(!is_email(&json!("trailing-dot@example.com.")));
/// ```
pub fn is_email(value: &Value) -> bool {
	as_strings("isEmail", value)
		.into_iter()
		.all(|s| EMAIL_REGEX.is_match(s))
}

/// Registry rule `isEmail`. No bound arguments.
pub struct IsEmail;

impl Rule for IsEmail {
	fn check(&self, value: &Value, _args: &[Value]) -> ValidationResult<bool> {
		Ok(is_email(value))
	}
}
