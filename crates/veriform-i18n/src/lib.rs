//! Localized default failure messages for veriform rules
//!
//! Rules report failures with human-readable messages. This crate owns the
//! table of default messages: one [`MessageCatalog`] per locale, collected
//! into a [`Translations`] set with a configurable default locale. Host
//! applications add locales by inserting catalogs; the validator engine
//! never needs to change.

pub mod catalog;
pub mod translations;

pub use catalog::MessageCatalog;
pub use translations::Translations;
