//! Message catalog holding per-rule failure messages for one locale

use std::collections::HashMap;

/// A message catalog containing the default failure message for each rule
/// name under a single locale.
///
/// # Example
/// ```
/// use veriform_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add("unique", "La liste doit être composée d'éléments uniques");
///
/// assert_eq!(catalog.locale(), "fr");
/// assert_eq!(
/// 	catalog.get("unique"),
/// 	Some("La liste doit être composée d'éléments uniques")
/// );
/// assert_eq!(catalog.get("minLength"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new empty catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add or replace the message for a rule name
	pub fn add(&mut self, rule: impl Into<String>, message: impl Into<String>) {
		self.messages.insert(rule.into(), message.into());
	}

	/// Get the message for a rule name, if this catalog has one
	pub fn get(&self, rule: &str) -> Option<&str> {
		self.messages.get(rule).map(String::as_str)
	}

	/// Number of messages in this catalog
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// True if the catalog holds no messages
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_add_and_get() {
		let mut catalog = MessageCatalog::new("en");
		catalog.add("unique", "The list must be made up of unique items");

		assert_eq!(
			catalog.get("unique"),
			Some("The list must be made up of unique items")
		);
		assert_eq!(catalog.get("maxLength"), None);
	}

	#[test]
	fn test_add_replaces_existing_message() {
		let mut catalog = MessageCatalog::new("en");
		catalog.add("unique", "first");
		catalog.add("unique", "second");

		assert_eq!(catalog.get("unique"), Some("second"));
		assert_eq!(catalog.len(), 1);
	}

	#[test]
	fn test_empty_catalog() {
		let catalog = MessageCatalog::new("de");
		assert!(catalog.is_empty());
		assert_eq!(catalog.locale(), "de");
	}
}
