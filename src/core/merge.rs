//! Locale fallback and source precedence.
//!
//! A *source* is a [`LocaleTable`]: one origin of translations (resource files,
//! JSON files, packages) indexed by locale. Sources are always passed in
//! ascending precedence, so a later source overrides an earlier one key by key.
//!
//! Fallback is applied per source and per locale, never per key: for each
//! source, the first locale of the chain that the source knows about supplies
//! the whole mapping for that source.

use std::collections::{BTreeMap, BTreeSet};

use super::{
    EffectiveTranslations, KeyLayout, LocaleCode, LocaleTable, RawJsonTranslations,
    RawResourceTranslations, Translations,
};

/// Locales to try, in order, when resolving `locale`.
///
/// The fallback locale is appended unless it is `locale` itself.
pub fn resolve_fallback_chain<'a>(locale: &'a str, fallback_locale: &'a str) -> Vec<&'a str> {
    let mut chain = vec![locale];
    if fallback_locale != locale {
        chain.push(fallback_locale);
    }
    chain
}

/// The mapping of the first chain locale present in `source`, if any.
///
/// A locale that is present with an empty mapping still counts as present.
pub fn select_for_chain<'a>(source: &'a LocaleTable, chain: &[&str]) -> Option<&'a Translations> {
    chain.iter().find_map(|locale| source.get(*locale))
}

/// Shallow merge of `layers`, later layers overwriting earlier ones key by key.
pub fn merge_by_precedence<'a>(layers: impl IntoIterator<Item = &'a Translations>) -> Translations {
    let mut result = Translations::new();
    for layer in layers {
        for (key, value) in layer {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Union of the locales known to any source.
pub fn candidate_locales(sources: &[&LocaleTable]) -> BTreeSet<LocaleCode> {
    sources
        .iter()
        .flat_map(|source| source.keys().cloned())
        .collect()
}

/// Effective translations for `locale`.
///
/// `sources` must be ordered from lowest to highest precedence.
pub fn merge(
    locale: &str,
    sources: &[&LocaleTable],
    fallback_locale: &str,
) -> EffectiveTranslations {
    let chain = resolve_fallback_chain(locale, fallback_locale);
    merge_by_precedence(
        sources
            .iter()
            .filter_map(|source| select_for_chain(source, &chain)),
    )
}

/// Effective translations for `locale` from the two lang directory sources.
///
/// Resource files are collapsed with `layout` and rank below JSON files.
pub fn merge_locale(
    locale: &str,
    resources: &RawResourceTranslations,
    json: &RawJsonTranslations,
    layout: KeyLayout,
    fallback_locale: &str,
) -> EffectiveTranslations {
    let resources = layout.collapse_all(resources);
    merge(locale, &[&resources, json], fallback_locale)
}

/// Effective translations for every locale known to any source.
pub fn merge_all(
    sources: &[&LocaleTable],
    fallback_locale: &str,
) -> BTreeMap<LocaleCode, EffectiveTranslations> {
    candidate_locales(sources)
        .into_iter()
        .map(|locale| {
            let translations = merge(&locale, sources, fallback_locale);
            (locale, translations)
        })
        .collect()
}
