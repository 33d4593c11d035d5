//! Error types for rule resolution and validation

use thiserror::Error;

/// Errors surfaced by the registry and the validator engine.
///
/// Rule failures are not errors: a failing rule contributes a message to
/// [`Validator::errors`](crate::Validator::errors) and flips the boolean
/// result. Errors cover the two conditions the caller must handle
/// structurally: registering a name no rule answers to, and running a rule
/// whose runtime support is missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// The rule name has no registered implementation. Raised from `add`;
	/// the validator's invocation list is left unchanged.
	#[error("unknown validation rule: {name}")]
	UnknownRule { name: String },

	/// The rule needs a capability this registry was built without
	/// (currently only `hasContent`, which needs a plain-text extractor).
	#[error("the {rule} rule requires a plain-text extractor, but none is configured")]
	UnsupportedEnvironment { rule: String },
}

/// Result alias used across the crate
pub type ValidationResult<T> = Result<T, ValidationError>;
