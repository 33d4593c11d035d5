//! Locale-keyed catalog set with default-locale fallback

use std::collections::HashMap;

use crate::catalog::MessageCatalog;

/// Rule names known to the built-in English catalog.
const BUILTIN_EN: &[(&str, &str)] = &[
	("unique", "The list must be made up of unique items"),
	("minLength", "The list is not long enough"),
	("maxLength", "The list is too long"),
	("lengthInRange", "The list is not within the length range"),
	("matchesRegex", "The content is not well formed"),
	("isEmail", "Must be a valid email address"),
	("isUKPostcode", "Must be a valid postcode"),
	("hasContent", "Must not be empty"),
];

/// A set of [`MessageCatalog`]s plus a default locale used as fallback.
///
/// Lookup tries the requested locale first and falls back to the default
/// locale. A rule unknown to both catalogs yields an empty placeholder from
/// [`Translations::message`] rather than an error.
///
/// # Example
/// ```
/// use veriform_i18n::{MessageCatalog, Translations};
///
/// let mut translations = Translations::builtin();
/// let mut welsh = MessageCatalog::new("cy");
/// welsh.add("isUKPostcode", "Rhaid bod yn god post dilys");
/// translations.insert(welsh);
///
/// assert_eq!(
/// 	translations.message("cy", "isUKPostcode"),
/// 	"Rhaid bod yn god post dilys"
/// );
/// // Falls back to the default locale for rules the Welsh catalog lacks
/// assert_eq!(translations.message("cy", "unique"), "The list must be made up of unique items");
/// ```
#[derive(Debug, Clone)]
pub struct Translations {
	catalogs: HashMap<String, MessageCatalog>,
	default_locale: String,
}

impl Translations {
	/// Create an empty translation set with the given default locale
	pub fn new(default_locale: &str) -> Self {
		Self {
			catalogs: HashMap::new(),
			default_locale: default_locale.to_string(),
		}
	}

	/// The built-in translation set: English messages, default locale `en`
	pub fn builtin() -> Self {
		let mut catalog = MessageCatalog::new("en");
		for (rule, message) in BUILTIN_EN {
			catalog.add(*rule, *message);
		}
		let mut translations = Self::new("en");
		translations.insert(catalog);
		translations
	}

	/// The configured default locale
	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	/// Insert a catalog, keyed by its locale. Replaces any existing catalog
	/// for that locale.
	pub fn insert(&mut self, catalog: MessageCatalog) {
		self.catalogs.insert(catalog.locale().to_string(), catalog);
	}

	/// Look up the message for `rule` under `locale`, falling back to the
	/// default locale. `None` if neither catalog has an entry.
	pub fn lookup(&self, locale: &str, rule: &str) -> Option<&str> {
		if let Some(catalog) = self.catalogs.get(locale)
			&& let Some(message) = catalog.get(rule)
		{
			return Some(message);
		}
		self.catalogs
			.get(&self.default_locale)
			.and_then(|catalog| catalog.get(rule))
	}

	/// Like [`Translations::lookup`], but yields an empty placeholder
	/// instead of `None`. Never fails.
	pub fn message(&self, locale: &str, rule: &str) -> &str {
		self.lookup(locale, rule).unwrap_or("")
	}
}

impl Default for Translations {
	fn default() -> Self {
		Self::builtin()
	}
}
