//! Duplicate detection over sequences

use serde_json::Value;

use crate::error::ValidationResult;
use crate::registry::Rule;

/// True iff no two elements of the sequence compare equal.
///
/// Equality is value equality (`serde_json::Value::eq`), not identity. A
/// string is treated as a sequence of characters.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veriform_core::rules::unique;
///
/// assert!(unique(&json!([1, 2, 3])));
/// assert!(!unique(&json!([1, 2, 1])));
/// ```
pub fn unique(value: &Value) -> bool {
	match value {
		// Quadratic scan; the lists this rule sees are form-sized
		Value::Array(items) => !items
			.iter()
			.enumerate()
			.any(|(i, item)| items[..i].contains(item)),
		Value::String(s) => {
			let chars: Vec<char> = s.chars().collect();
			!chars.iter().enumerate().any(|(i, c)| chars[..i].contains(c))
		}
		other => panic!("unique: expected an array or string value, got {other}"),
	}
}

/// Registry rule `unique`. No bound arguments.
pub struct Unique;

impl Rule for Unique {
	fn check(&self, value: &Value, _args: &[Value]) -> ValidationResult<bool> {
		Ok(unique(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!([1, 2, 3]), true)]
	#[case(json!([1, 2, 1]), false)]
	#[case(json!([]), true)]
	#[case(json!(["a"]), true)]
	#[case(json!(["a", "b", "a"]), false)]
	fn test_unique_arrays(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(unique(&value), expected);
	}

	#[test]
	fn test_equality_is_by_value() {
		// Distinct allocations of equal content are still duplicates
		assert!(!unique(&json!(["item", "item"])));
		assert!(!unique(&json!([{"a": 1}, {"a": 1}])));
		assert!(unique(&json!([{"a": 1}, {"a": 2}])));
	}

	#[test]
	fn test_string_treated_as_char_sequence() {
		assert!(unique(&json!("abc")));
		assert!(!unique(&json!("aba")));
	}

	#[test]
	#[should_panic(expected = "unique")]
	fn test_non_sequence_value_is_a_caller_bug() {
		unique(&json!(true));
	}
}
