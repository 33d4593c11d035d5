//! Inclusive length-bound rules

use serde_json::Value;

use super::{sequence_len, usize_arg};
use crate::error::ValidationResult;
use crate::registry::Rule;

/// True iff the sequence has at least `min` elements, inclusive.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veriform_core::rules::min_length;
///
/// assert!(min_length(&json!([1, 2, 3]), 3));
/// assert!(!min_length(&json!([1, 2, 3]), 4));
/// ```
pub fn min_length(value: &Value, min: usize) -> bool {
	sequence_len("minLength", value) >= min
}

/// True iff the sequence has at most `max` elements, inclusive.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veriform_core::rules::max_length;
///
/// assert!(max_length(&json!([1, 2, 3]), 3));
/// assert!(!max_length(&json!([1, 2, 3]), 2));
/// ```
pub fn max_length(value: &Value, max: usize) -> bool {
	sequence_len("maxLength", value) <= max
}

/// Conjunction of [`min_length`] and [`max_length`].
pub fn length_in_range(value: &Value, min: usize, max: usize) -> bool {
	min_length(value, min) && max_length(value, max)
}

/// Registry rule `minLength`. One bound argument: the inclusive minimum.
pub struct MinLength;

impl Rule for MinLength {
	fn check(&self, value: &Value, args: &[Value]) -> ValidationResult<bool> {
		Ok(min_length(value, usize_arg("minLength", args, 0)))
	}
}

/// Registry rule `maxLength`. One bound argument: the inclusive maximum.
pub struct MaxLength;

impl Rule for MaxLength {
	fn check(&self, value: &Value, args: &[Value]) -> ValidationResult<bool> {
		Ok(max_length(value, usize_arg("maxLength", args, 0)))
	}
}

/// Registry rule `lengthInRange`. Two bound arguments: minimum then maximum.
pub struct LengthInRange;

impl Rule for LengthInRange {
	fn check(&self, value: &Value, args: &[Value]) -> ValidationResult<bool> {
		let min = usize_arg("lengthInRange", args, 0);
		let max = usize_arg("lengthInRange", args, 1);
		Ok(length_in_range(value, min, max))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!([1, 2, 3]), 3, true)]
	#[case(json!([1, 2, 3]), 4, false)]
	#[case(json!([]), 0, true)]
	#[case(json!([]), 1, false)]
	fn test_min_length_boundaries(#[case] value: Value, #[case] min: usize, #[case] expected: bool) {
		assert_eq!(min_length(&value, min), expected);
	}

	#[rstest]
	#[case(json!([1, 2, 3]), 3, true)]
	#[case(json!([1, 2, 3]), 2, false)]
	#[case(json!([]), 0, true)]
	fn test_max_length_boundaries(#[case] value: Value, #[case] max: usize, #[case] expected: bool) {
		assert_eq!(max_length(&value, max), expected);
	}

	#[test]
	fn test_length_in_range_is_conjunction() {
		let value = json!([1, 2, 3]);
		assert!(length_in_range(&value, 1, 5));
		assert!(length_in_range(&value, 3, 3));
		assert!(!length_in_range(&value, 4, 5));
		assert!(!length_in_range(&value, 1, 2));
	}

	#[test]
	fn test_string_length_counts_chars() {
		assert!(min_length(&json!("héllo"), 5));
		assert!(max_length(&json!("héllo"), 5));
	}

	#[test]
	fn test_registry_rules_read_bound_args() {
		let value = json!([1, 2, 3]);
		assert_eq!(MinLength.check(&value, &[json!(3)]), Ok(true));
		assert_eq!(MaxLength.check(&value, &[json!(2)]), Ok(false));
		assert_eq!(LengthInRange.check(&value, &[json!(1), json!(5)]), Ok(true));
	}

	#[test]
	#[should_panic(expected = "minLength")]
	fn test_missing_bound_is_a_caller_bug() {
		let _ = MinLength.check(&json!([1]), &[]);
	}

	#[test]
	#[should_panic(expected = "maxLength")]
	fn test_non_sequence_value_is_a_caller_bug() {
		max_length(&json!(42), 3);
	}
}
