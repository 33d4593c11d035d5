//! Name-keyed rule registry
//!
//! The registry owns the vocabulary of rule names a
//! [`Validator`](crate::Validator) can reference. It is populated once and
//! read-only afterwards: unknown names are rejected when a rule is added to
//! a validator, not when validation runs.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::rules::{
	HasContent, IsEmail, IsUkPostcode, LengthInRange, MatchesRegex, MaxLength, MinLength, Unique,
};
use crate::text::{PlainTextExtractor, TagStripper};

/// A named validation predicate.
///
/// `check` runs the predicate against `value` with the invocation's bound
/// arguments. `Ok(false)` is an ordinary failure; `Err` means the rule could
/// not run at all (missing runtime capability). Rules must be pure and
/// synchronous.
pub trait Rule: Send + Sync {
	fn check(&self, value: &Value, args: &[Value]) -> ValidationResult<bool>;
}

/// Plain functions and closures with the right shape are rules.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use serde_json::{Value, json};
/// use veriform_core::{Rule, RuleRegistry, ValidationResult};
///
/// let mut registry = RuleRegistry::builtin();
/// registry.register(
/// 	"isAnswer",
/// 	Arc::new(|value: &Value, _args: &[Value]| -> ValidationResult<bool> {
/// 		Ok(value == &json!(42))
/// 	}),
/// );
/// assert!(registry.contains("isAnswer"));
/// ```
impl<F> Rule for F
where
	F: Fn(&Value, &[Value]) -> ValidationResult<bool> + Send + Sync,
{
	fn check(&self, value: &Value, args: &[Value]) -> ValidationResult<bool> {
		self(value, args)
	}
}

/// Global built-in registry singleton
static GLOBAL_REGISTRY: OnceLock<Arc<RuleRegistry>> = OnceLock::new();

/// Registry mapping rule names to predicate implementations.
///
/// # Examples
///
/// ```
/// use veriform_core::RuleRegistry;
///
/// let registry = RuleRegistry::builtin();
/// assert!(registry.contains("minLength"));
/// assert!(registry.lookup("noSuchRule").is_err());
/// ```
pub struct RuleRegistry {
	rules: HashMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
	/// An empty registry with no rules at all
	pub fn empty() -> Self {
		Self {
			rules: HashMap::new(),
		}
	}

	/// All built-in rules, with [`TagStripper`] backing `hasContent`
	pub fn builtin() -> Self {
		Self::assemble(Some(Arc::new(TagStripper)))
	}

	/// All built-in rules, with a caller-supplied plain-text extractor
	pub fn with_extractor(extractor: Arc<dyn PlainTextExtractor>) -> Self {
		Self::assemble(Some(extractor))
	}

	/// All built-in rules but no plain-text extractor: `hasContent` fails
	/// with `UnsupportedEnvironment`
	pub fn without_extractor() -> Self {
		Self::assemble(None)
	}

	fn assemble(extractor: Option<Arc<dyn PlainTextExtractor>>) -> Self {
		let mut registry = Self::empty();
		registry.register("unique", Arc::new(Unique));
		registry.register("minLength", Arc::new(MinLength));
		registry.register("maxLength", Arc::new(MaxLength));
		registry.register("lengthInRange", Arc::new(LengthInRange));
		registry.register("matchesRegex", Arc::new(MatchesRegex));
		registry.register("isEmail", Arc::new(IsEmail));
		registry.register("isUKPostcode", Arc::new(IsUkPostcode));
		registry.register("hasContent", Arc::new(HasContent::new(extractor)));
		registry
	}

	/// Get the process-wide built-in registry.
	///
	/// Initialized on first use and read-only afterwards, so it is safe to
	/// share across threads and validators.
	pub fn global() -> Arc<RuleRegistry> {
		GLOBAL_REGISTRY
			.get_or_init(|| Arc::new(Self::builtin()))
			.clone()
	}

	/// Register a rule under a name. Replaces any existing rule with the
	/// same name. Registration happens before a registry is shared; a
	/// shared registry is read-only.
	pub fn register(&mut self, name: impl Into<String>, rule: Arc<dyn Rule>) {
		self.rules.insert(name.into(), rule);
	}

	/// Resolve a rule name, failing with
	/// [`ValidationError::UnknownRule`] if nothing is registered under it.
	pub fn lookup(&self, name: &str) -> ValidationResult<Arc<dyn Rule>> {
		self.rules
			.get(name)
			.cloned()
			.ok_or_else(|| ValidationError::UnknownRule {
				name: name.to_string(),
			})
	}

	/// True if a rule is registered under `name`
	pub fn contains(&self, name: &str) -> bool {
		self.rules.contains_key(name)
	}

	/// Iterate over the registered rule names, in no particular order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.rules.keys().map(String::as_str)
	}
}

impl Default for RuleRegistry {
	fn default() -> Self {
		Self::builtin()
	}
}
