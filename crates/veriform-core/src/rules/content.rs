//! Non-empty-once-rendered check for HTML fragments

use std::sync::Arc;

use serde_json::Value;

use super::as_strings;
use crate::error::{ValidationError, ValidationResult};
use crate::registry::Rule;
use crate::text::PlainTextExtractor;

/// JSON truthiness as form inputs see it: null, false, zero and the empty
/// string are falsy.
fn is_falsy(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(b) => !*b,
		Value::Number(n) => n.as_f64() == Some(0.0),
		Value::String(s) => s.is_empty(),
		_ => false,
	}
}

/// True iff every fragment still has text once markup is stripped and
/// whitespace trimmed. A falsy value fails immediately.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veriform_core::rules::has_content;
/// use veriform_core::text::TagStripper;
///
/// assert!(has_content(&json!("<p>Foo</p>"), &TagStripper));
/// assert!(!has_content(&json!("<p><span><br/><br/></span></p>"), &TagStripper));
/// assert!(!has_content(&json!(null), &TagStripper));
/// ```
pub fn has_content(value: &Value, extractor: &dyn PlainTextExtractor) -> bool {
	if is_falsy(value) {
		return false;
	}
	as_strings("hasContent", value).into_iter().all(|fragment| {
		let fragment = fragment.trim();
		!fragment.is_empty() && !extractor.extract(fragment).trim().is_empty()
	})
}

/// Registry rule `hasContent`. No bound arguments.
///
/// Carries the plain-text extractor capability. Built without one, every
/// non-falsy check fails with
/// [`ValidationError::UnsupportedEnvironment`]; falsy input still yields
/// `Ok(false)` since no extraction is needed to decide it.
pub struct HasContent {
	extractor: Option<Arc<dyn PlainTextExtractor>>,
}

impl HasContent {
	pub fn new(extractor: Option<Arc<dyn PlainTextExtractor>>) -> Self {
		Self { extractor }
	}
}

impl Rule for HasContent {
	fn check(&self, value: &Value, _args: &[Value]) -> ValidationResult<bool> {
		if is_falsy(value) {
			return Ok(false);
		}
		let extractor =
			self.extractor
				.as_deref()
				.ok_or_else(|| ValidationError::UnsupportedEnvironment {
					rule: "hasContent".to_string(),
				})?;
		Ok(has_content(value, extractor))
	}
}
