//! # Veriform
//!
//! Composable rule-based validation with collected failure messages.
//!
//! Veriform splits validation into a [`RuleRegistry`] — a fixed vocabulary
//! of named predicates — and a [`Validator`] that accumulates rule
//! invocations, runs them all against one value, and reports every failure
//! with a human-readable message. Default messages are localized through
//! [`Translations`], swappable per validator.
//!
//! ```
//! use serde_json::json;
//! use veriform::prelude::*;
//!
//! fn main() -> ValidationResult<()> {
//! 	let mut validator = Validator::new();
//! 	validator
//! 		.add("minLength", [json!(3)])?
//! 		.message("too titchy")
//! 		.add("unique", [])?
//! 		.message("unoriginal");
//!
//! 	assert!(!validator.validate(&json!([1, 1]))?);
//! 	assert_eq!(validator.errors(), ["too titchy", "unoriginal"]);
//! 	Ok(())
//! }
//! ```

pub use veriform_core::{
	PlainTextExtractor, Rule, RuleHandle, RuleInvocation, RuleRegistry, TagStripper,
	ValidationError, ValidationResult, Validator, rules,
};
pub use veriform_i18n::{MessageCatalog, Translations};

/// Re-export of the most commonly used types
pub mod prelude {
	pub use veriform_core::{
		PlainTextExtractor, Rule, RuleRegistry, ValidationError, ValidationResult, Validator,
	};
	pub use veriform_i18n::{MessageCatalog, Translations};
}
