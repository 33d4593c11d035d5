//! Regex matching over a string or every string in a list

use regex::Regex;
use serde_json::Value;

use super::{as_strings, str_arg};
use crate::error::ValidationResult;
use crate::registry::Rule;

/// True iff every string in the value matches `pattern`.
///
/// The match is an unanchored search, so `pattern` may hit anywhere in the
/// string. A single string is treated as a one-element list; an empty list
/// passes vacuously. An invalid pattern is a caller bug and panics.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veriform_core::rules::matches_regex;
///
/// assert!(matches_regex(&json!("barfoobar"), "foo"));
/// assert!(!matches_regex(&json!("barbazbar"), "foo"));
/// assert!(matches_regex(&json!(["foo", "foolish"]), "^foo"));
/// ```
pub fn matches_regex(value: &Value, pattern: &str) -> bool {
	let regex = Regex::new(pattern)
		.unwrap_or_else(|err| panic!("matchesRegex: invalid pattern {pattern:?}: {err}"));
	as_strings("matchesRegex", value)
		.into_iter()
		.all(|s| regex.is_match(s))
}

/// Registry rule `matchesRegex`. One bound argument: the pattern string.
pub struct MatchesRegex;

impl Rule for MatchesRegex {
	fn check(&self, value: &Value, args: &[Value]) -> ValidationResult<bool> {
		Ok(matches_regex(value, str_arg("matchesRegex", args, 0)))
	}
}
