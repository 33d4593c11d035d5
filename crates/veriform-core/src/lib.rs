//! Rule registry and composite validator engine
//!
//! Validation is split in two: a [`RuleRegistry`] owning named predicate
//! implementations, and a [`Validator`] that accumulates named rule
//! invocations and evaluates them together against one value, collecting a
//! human-readable message per failure.
//!
//! ```
//! use serde_json::json;
//! use veriform_core::{ValidationResult, Validator};
//!
//! fn main() -> ValidationResult<()> {
//! 	// Quick one-off checks go straight through the rules module
//! 	assert!(veriform_core::rules::unique(&json!([1, 2, 3])));
//!
//! 	// Composite validation collects diagnostics
//! 	let mut validator = Validator::new();
//! 	validator.add("unique", [])?;
//! 	validator.add("minLength", [json!(1)])?;
//! 	assert!(validator.validate(&json!([1, 2, 3]))?);
//! 	Ok(())
//! }
//! ```

pub mod error;
pub mod registry;
pub mod rules;
pub mod text;
pub mod validator;

pub use error::{ValidationError, ValidationResult};
pub use registry::{Rule, RuleRegistry};
pub use text::{PlainTextExtractor, TagStripper};
pub use validator::{RuleHandle, RuleInvocation, Validator};
