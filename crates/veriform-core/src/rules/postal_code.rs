//! UK postcode validation, including BFPO codes

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::as_strings;
use crate::error::ValidationResult;
use crate::registry::Rule;

// Geographic shape per BS 7666: "A9 9AA", "A99 9AA", "A9A 9AA", "AA9 9AA",
// "AA99 9AA" or "AA9A 9AA". The final two letters never use C, I, K, M, O
// or V. The separating space is optional and may repeat.
static UK_POSTCODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Z]{1,2}[0-9R][0-9A-Z]? *[0-9][ABD-HJLNP-UW-Z]{2}$")
		.expect("UK_POSTCODE_REGEX: invalid regex pattern")
});

// British Forces Post Office: "BFPO 1234" or "BFPO c/o 1234", exactly four
// digits, spacing between tokens optional.
static BFPO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^BFPO *(c/o)? *[0-9]{4}$").expect("BFPO_REGEX: invalid regex pattern")
});

/// True iff every string in the value is a UK postcode after trimming
/// leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veriform_core::rules::is_uk_postcode;
///
/// assert!(is_uk_postcode(&json!("EC1V 3RP")));
/// assert!(is_uk_postcode(&json!("BFPO c/o 1234")));
/// assert!(!is_uk_postcode(&json!("EC1V 3RPP")));
/// ```
pub fn is_uk_postcode(value: &Value) -> bool {
	as_strings("isUKPostcode", value).into_iter().all(|s| {
		let candidate = s.trim();
		UK_POSTCODE_REGEX.is_match(candidate) || BFPO_REGEX.is_match(candidate)
	})
}

/// Registry rule `isUKPostcode`. No bound arguments.
pub struct IsUkPostcode;

impl Rule for IsUkPostcode {
	fn check(&self, value: &Value, _args: &[Value]) -> ValidationResult<bool> {
		Ok(is_uk_postcode(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("EC1V 3RP")]
	#[case("M1 1AE")]
	#[case("B33 8TH")]
	#[case("CR2 6XH")]
	#[case("DN55 1PT")]
	#[case("W1A 1HQ")]
	fn test_geographic_postcodes(#[case] candidate: &str) {
		assert!(is_uk_postcode(&json!(candidate)));
	}

	#[rstest]
	#[case("EC1V 3RPP")]
	#[case("XXXX 9XX")]
	#[case("EC1V 3CC")] // C is excluded from the final letter pair
	#[case("123 456")]
	#[case("")]
	fn test_invalid_postcodes(#[case] candidate: &str) {
		assert!(!is_uk_postcode(&json!(candidate)));
	}

	#[rstest]
	#[case("BFPO 1234", true)]
	#[case("BFPO c/o 1234", true)]
	#[case("BFPO1234", true)]
	#[case("  BFPO   c/o   1234  ", true)]
	#[case("  BFPOc/o1234  ", true)]
	#[case("BFPO 12345", false)]
	#[case("BFPO c/o 12345", false)]
	#[case("BFPO 123", false)]
	fn test_bfpo_postcodes(#[case] candidate: &str, #[case] valid: bool) {
		assert_eq!(is_uk_postcode(&json!(candidate)), valid);
	}

	#[rstest]
	#[case("EC1V3RP")]
	#[case("  EC1V   3RP  ")]
	fn test_whitespace_is_relaxed(#[case] candidate: &str) {
		assert!(is_uk_postcode(&json!(candidate)));
	}

	#[test]
	fn test_every_element_must_be_a_postcode() {
		assert!(is_uk_postcode(&json!(["EC1V 3RP", "BFPO 1234"])));
		assert!(!is_uk_postcode(&json!(["EC1V 3RP", "not a postcode"])));
	}
}
