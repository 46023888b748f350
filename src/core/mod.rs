//! Core translation engine.
//!
//! Everything in this module is free of CLI and presentation concerns:
//!
//! - `loader`: reads raw per-locale translations from disk
//! - `layout`: collapses a locale's resource files into one mapping
//! - `merge`: fallback-chain resolution and precedence merging
//! - `catalog`: the entry point tying loading and merging together
//! - `error`: typed failures surfaced to callers

use std::collections::BTreeMap;

use serde_json::{Map, Value};

pub mod catalog;
pub mod error;
pub mod layout;
pub mod loader;
pub mod merge;

pub use catalog::Catalog;
pub use error::{Result, TranslationError};
pub use layout::KeyLayout;
pub use loader::{RESOURCE_EXTENSION, load_json_translations, load_resource_translations};
pub use merge::{
    candidate_locales, merge, merge_all, merge_by_precedence, merge_locale, resolve_fallback_chain,
    select_for_chain,
};

/// Locale identifier, e.g. `en` or `pt_BR`. Opaque to the engine.
pub type LocaleCode = String;

/// Name of one resource file inside a locale directory (`messages` for `en/messages.json`).
pub type ResourceName = String;

/// Key to value mapping. Values are strings or nested objects.
///
/// Insertion order is kept so that rendered output follows the source files.
pub type Translations = Map<String, Value>;

/// One source's translations for every locale it knows about.
pub type LocaleTable = BTreeMap<LocaleCode, Translations>;

/// Resource-file translations: `{locale -> {resource -> {key -> value}}}`.
pub type RawResourceTranslations = BTreeMap<LocaleCode, BTreeMap<ResourceName, Translations>>;

/// JSON-file translations: `{locale -> {key -> value}}`.
pub type RawJsonTranslations = LocaleTable;

/// The merged result for a single locale.
pub type EffectiveTranslations = Translations;
