//! Built-in validation rules
//!
//! One module per concern. Each exposes a typed free function for quick
//! one-off checks plus a unit struct implementing [`Rule`](crate::Rule) for
//! registry use. The registry-facing structs read their bound arguments from
//! the invocation's argument list; a missing or mistyped argument is a
//! caller bug and panics rather than failing the validation.

pub mod content;
pub mod email;
pub mod length;
pub mod pattern;
pub mod postal_code;
pub mod uniqueness;

pub use content::{HasContent, has_content};
pub use email::{IsEmail, is_email};
pub use length::{LengthInRange, MaxLength, MinLength, length_in_range, max_length, min_length};
pub use pattern::{MatchesRegex, matches_regex};
pub use postal_code::{IsUkPostcode, is_uk_postcode};
pub use uniqueness::{Unique, unique};

use serde_json::Value;

/// Element count of a sequence value: array length or string char count.
pub(crate) fn sequence_len(rule: &str, value: &Value) -> usize {
	match value {
		Value::Array(items) => items.len(),
		Value::String(s) => s.chars().count(),
		other => panic!("{rule}: expected an array or string value, got {other}"),
	}
}

/// View a string-or-array-of-strings value as a list of string slices.
pub(crate) fn as_strings<'a>(rule: &str, value: &'a Value) -> Vec<&'a str> {
	match value {
		Value::String(s) => vec![s.as_str()],
		Value::Array(items) => items
			.iter()
			.map(|item| match item {
				Value::String(s) => s.as_str(),
				other => panic!("{rule}: expected string elements, got {other}"),
			})
			.collect(),
		other => panic!("{rule}: expected a string or array of strings, got {other}"),
	}
}

/// Read a required non-negative integer bound from the bound-argument list.
pub(crate) fn usize_arg(rule: &str, args: &[Value], index: usize) -> usize {
	args.get(index)
		.and_then(Value::as_u64)
		.unwrap_or_else(|| {
			panic!("{rule}: argument {index} must be a non-negative integer, got {args:?}")
		}) as usize
}

/// Read a required string argument from the bound-argument list.
pub(crate) fn str_arg<'a>(rule: &str, args: &'a [Value], index: usize) -> &'a str {
	args.get(index)
		.and_then(Value::as_str)
		.unwrap_or_else(|| panic!("{rule}: argument {index} must be a string, got {args:?}"))
}
