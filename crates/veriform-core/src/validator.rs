//! Composite validator: accumulate named rules, run them together
//!
//! A [`Validator`] is a builder over [`RuleInvocation`]s. `add` resolves the
//! rule name against the registry immediately and appends an invocation;
//! `validate` runs every invocation against one value in registration order,
//! collecting a failure message per failing rule. The boolean result is the
//! conjunction of all rules, but evaluation never short-circuits: a caller
//! gets the full list of diagnostics in one pass.

use std::sync::Arc;

use serde_json::Value;
use veriform_i18n::Translations;

use crate::error::ValidationResult;
use crate::registry::{Rule, RuleRegistry};

/// One registered use of a rule: the resolved predicate, the arguments bound
/// at `add` time, and an optional custom failure message.
pub struct RuleInvocation {
	name: String,
	rule: Arc<dyn Rule>,
	args: Vec<Value>,
	message: Option<String>,
}

impl RuleInvocation {
	/// The rule name this invocation was registered under
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The extra arguments bound when `add` was called
	pub fn args(&self) -> &[Value] {
		&self.args
	}

	/// The custom failure message, if one was attached
	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}
}

/// A composite validator over one value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veriform_core::{ValidationResult, Validator};
///
/// fn main() -> ValidationResult<()> {
/// 	let mut validator = Validator::new();
/// 	validator.add("unique", [])?;
/// 	validator.add("minLength", [json!(1)])?;
/// 	validator.add("maxLength", [json!(5)])?;
///
/// 	assert!(validator.validate(&json!([1, 2, 3]))?);
/// 	assert!(!validator.validate(&json!([1, 2, 1]))?);
/// 	assert_eq!(
/// 		validator.errors(),
/// 		["The list must be made up of unique items"]
/// 	);
/// 	Ok(())
/// }
/// ```
///
/// Custom messages chain off `add`:
///
/// ```
/// use serde_json::json;
/// use veriform_core::{ValidationResult, Validator};
///
/// fn main() -> ValidationResult<()> {
/// 	let mut validator = Validator::new();
/// 	validator
/// 		.add("minLength", [json!(3)])?
/// 		.message("too titchy")
/// 		.add("unique", [])?
/// 		.message("unoriginal");
///
/// 	assert!(!validator.validate(&json!([1, 1]))?);
/// 	assert_eq!(validator.errors(), ["too titchy", "unoriginal"]);
/// 	Ok(())
/// }
/// ```
pub struct Validator {
	registry: Arc<RuleRegistry>,
	translations: Arc<Translations>,
	locale: String,
	invocations: Vec<RuleInvocation>,
	errors: Vec<String>,
}

impl Validator {
	/// A validator backed by the global built-in registry and the built-in
	/// message translations
	pub fn new() -> Self {
		Self::with_registry(RuleRegistry::global())
	}

	/// A validator backed by a specific registry
	pub fn with_registry(registry: Arc<RuleRegistry>) -> Self {
		let translations = Arc::new(Translations::builtin());
		let locale = translations.default_locale().to_string();
		Self {
			registry,
			translations,
			locale,
			invocations: Vec::new(),
			errors: Vec::new(),
		}
	}

	/// Replace the message translations. Resets the locale to the new
	/// set's default.
	pub fn with_translations(mut self, translations: Arc<Translations>) -> Self {
		self.locale = translations.default_locale().to_string();
		self.translations = translations;
		self
	}

	/// Select the locale used for default failure messages. Locale is
	/// per-validator state; two validators can report in different
	/// languages from the same translation set.
	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = locale.into();
		self
	}

	/// The locale default messages are drawn from
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Register a rule invocation.
	///
	/// Resolves `name` in the registry now — an unknown name fails with
	/// [`UnknownRule`](crate::ValidationError::UnknownRule) and leaves the
	/// invocation list unchanged. The same rule may be added any number of
	/// times with different bound arguments; invocations keep insertion
	/// order. The returned handle attaches a custom message to this
	/// invocation and chains further `add` calls.
	pub fn add(
		&mut self,
		name: &str,
		args: impl IntoIterator<Item = Value>,
	) -> ValidationResult<RuleHandle<'_>> {
		let rule = self.registry.lookup(name)?;
		self.invocations.push(RuleInvocation {
			name: name.to_string(),
			rule,
			args: args.into_iter().collect(),
			message: None,
		});
		let index = self.invocations.len() - 1;
		Ok(RuleHandle {
			validator: self,
			index,
		})
	}

	/// Run every registered invocation against `value`.
	///
	/// Clears the error buffer, then evaluates invocations in registration
	/// order with `value` prepended to each invocation's bound arguments.
	/// Every failing invocation appends its custom message, or the
	/// translations' default message for its rule under this validator's
	/// locale. Returns the conjunction of all results; with no invocations
	/// registered, any value is valid.
	pub fn validate(&mut self, value: &Value) -> ValidationResult<bool> {
		self.errors.clear();
		let mut passed = true;
		for invocation in &self.invocations {
			if invocation.rule.check(value, &invocation.args)? {
				continue;
			}
			passed = false;
			let message = match &invocation.message {
				Some(text) => text.clone(),
				None => self
					.translations
					.message(&self.locale, &invocation.name)
					.to_string(),
			};
			self.errors.push(message);
		}
		Ok(passed)
	}

	/// Failure messages from the most recent [`Validator::validate`] call,
	/// in registration order. Overwritten, not appended to, on each call.
	pub fn errors(&self) -> &[String] {
		&self.errors
	}

	/// The registered invocations, in insertion order
	pub fn invocations(&self) -> &[RuleInvocation] {
		&self.invocations
	}
}

impl Default for Validator {
	fn default() -> Self {
		Self::new()
	}
}

/// Handle to the invocation just created by [`Validator::add`].
///
/// `message` consumes the handle, so a custom message can be attached at
/// most once per invocation; the borrow rules make attaching it after a
/// later `add` impossible as well.
pub struct RuleHandle<'v> {
	validator: &'v mut Validator,
	index: usize,
}

impl std::fmt::Debug for RuleHandle<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RuleHandle")
			.field("index", &self.index)
			.finish_non_exhaustive()
	}
}

impl<'v> RuleHandle<'v> {
	/// Attach a custom failure message to this invocation, replacing the
	/// default from the message table. Returns the validator for further
	/// chaining.
	pub fn message(self, text: impl Into<String>) -> &'v mut Validator {
		self.validator.invocations[self.index].message = Some(text.into());
		self.validator
	}

	/// Register the next rule, keeping the fluent chain going
	pub fn add(
		self,
		name: &str,
		args: impl IntoIterator<Item = Value>,
	) -> ValidationResult<RuleHandle<'v>> {
		self.validator.add(name, args)
	}

	/// Finish the chain by validating `value`
	pub fn validate(self, value: &Value) -> ValidationResult<bool> {
		self.validator.validate(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	use crate::error::ValidationError;

	#[test]
	fn test_empty_validator_accepts_anything() {
		let mut validator = Validator::new();
		assert_eq!(validator.validate(&json!([1, 2, 1])), Ok(true));
		assert!(validator.errors().is_empty());
	}

	#[test]
	fn test_unknown_rule_leaves_invocations_unchanged() {
		let mut validator = Validator::new();
		validator.add("unique", []).unwrap();

		let err = validator.add("isIsbn", []).unwrap_err();
		assert_eq!(
			err,
			ValidationError::UnknownRule {
				name: "isIsbn".to_string()
			}
		);
		assert_eq!(validator.invocations().len(), 1);
	}

	#[test]
	fn test_duplicate_rule_names_are_independent_invocations() {
		let mut validator = Validator::new();
		validator.add("minLength", [json!(1)]).unwrap();
		validator.add("minLength", [json!(5)]).unwrap();

		assert_eq!(validator.validate(&json!([1, 2, 3])), Ok(false));
		assert_eq!(validator.errors(), ["The list is not long enough"]);

		assert_eq!(validator.validate(&json!([])), Ok(false));
		assert_eq!(
			validator.errors(),
			["The list is not long enough", "The list is not long enough"]
		);
	}

	#[test]
	fn test_errors_overwritten_each_validate() {
		let mut validator = Validator::new();
		validator.add("minLength", [json!(3)]).unwrap();

		assert_eq!(validator.validate(&json!([1])), Ok(false));
		assert_eq!(validator.errors().len(), 1);

		assert_eq!(validator.validate(&json!([1, 2, 3])), Ok(true));
		assert!(validator.errors().is_empty());
	}

	#[test]
	fn test_validate_is_idempotent() {
		let mut validator = Validator::new();
		validator.add("unique", []).unwrap();
		validator.add("minLength", [json!(3)]).unwrap();

		let value = json!([1, 1]);
		let first = validator.validate(&value);
		let first_errors = validator.errors().to_vec();
		let second = validator.validate(&value);

		assert_eq!(first, second);
		assert_eq!(validator.errors(), first_errors.as_slice());
	}

	#[test]
	fn test_custom_locale_messages() {
		use veriform_i18n::MessageCatalog;

		let mut translations = Translations::builtin();
		let mut cy = MessageCatalog::new("cy");
		cy.add("unique", "Rhaid i'r eitemau fod yn unigryw");
		translations.insert(cy);

		let mut validator = Validator::new()
			.with_translations(Arc::new(translations))
			.with_locale("cy");
		validator.add("unique", []).unwrap();
		validator.add("minLength", [json!(3)]).unwrap();

		assert_eq!(validator.validate(&json!([1, 1])), Ok(false));
		// Per-rule fallback to the default locale where cy has no entry
		assert_eq!(
			validator.errors(),
			[
				"Rhaid i'r eitemau fod yn unigryw",
				"The list is not long enough"
			]
		);
	}

	#[test]
	fn test_handle_validate_finishes_chain() {
		let mut validator = Validator::new();
		let result = validator
			.add("unique", [])
			.unwrap()
			.validate(&json!([1, 2, 3]));
		assert_eq!(result, Ok(true));
	}

	#[test]
	fn test_invocation_accessors() {
		let mut validator = Validator::new();
		validator
			.add("minLength", [json!(3)])
			.unwrap()
			.message("too titchy");

		let invocation = &validator.invocations()[0];
		assert_eq!(invocation.name(), "minLength");
		assert_eq!(invocation.args(), [json!(3)]);
		assert_eq!(invocation.message(), Some("too titchy"));
	}
}
