//! Serialization of effective translations for client-side delivery.
//!
//! Two script shapes are supported:
//!
//! - a switch over the page language, holding every locale, with the fallback
//!   locale as the `default` branch
//! - a plain assignment of one locale's translations
//!
//! All JSON embedded in a script is escaped so that no value can close the
//! `<script>` element or break the JavaScript string grammar.

use std::collections::BTreeMap;

use crate::core::{EffectiveTranslations, LocaleCode};

/// JavaScript expression evaluated in the browser to pick a locale.
pub const LOCALE_EXPRESSION: &str = "document.documentElement.lang";

/// JSON-encode `value` for embedding inside a `<script>` element.
pub fn to_script_json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value).map(|json| escape_script_json(&json))
}

/// Escape characters that are valid in JSON but unsafe inside `<script>`.
///
/// The replaced characters only ever occur inside JSON strings, where a
/// `\uXXXX` escape decodes to the same value.
pub fn escape_script_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `<script>` assigning the translations matching the page language.
///
/// Locales without a case of their own get the fallback locale's
/// translations, or `{}` when the fallback locale has none.
pub fn render_switch_script(
    window_key: &str,
    translations: &BTreeMap<LocaleCode, EffectiveTranslations>,
    fallback_locale: &str,
) -> serde_json::Result<String> {
    let mut cases = Vec::with_capacity(translations.len() + 1);
    for (locale, entries) in translations {
        if locale == fallback_locale {
            continue;
        }
        let mut labels = vec![format!("case {}:", to_script_json(locale)?)];
        let alternate = alternate_spelling(locale).filter(|a| !translations.contains_key(a));
        if let Some(alternate) = alternate {
            labels.push(format!("case {}:", to_script_json(&alternate)?));
        }
        cases.push(format!("{} return {};", labels.join(" "), to_script_json(entries)?));
    }
    let default = match translations.get(fallback_locale) {
        Some(entries) => to_script_json(entries)?,
        None => "{}".to_string(),
    };
    cases.push(format!("default: return {};", default));

    Ok(format!(
        "<script>window[{}] = (function (locale) {{ switch (locale) {{ {} }} }})({});</script>",
        to_script_json(window_key)?,
        cases.join(" "),
        LOCALE_EXPRESSION
    ))
}

/// `pt_BR` for `pt-BR` and the reverse.
///
/// Lang directories name regional locales with `_`, while the `lang`
/// attribute of a page uses the BCP 47 `-` form.
fn alternate_spelling(locale: &str) -> Option<String> {
    if locale.contains('_') {
        Some(locale.replace('_', "-"))
    } else if locale.contains('-') {
        Some(locale.replace('-', "_"))
    } else {
        None
    }
}

/// `<script>` assigning a single locale's translations.
pub fn render_single_script(
    window_key: &str,
    translations: &EffectiveTranslations,
) -> serde_json::Result<String> {
    Ok(format!(
        "<script>window[{}] = {};</script>",
        to_script_json(window_key)?,
        to_script_json(translations)?
    ))
}

/// Plain JSON, not escaped for script embedding.
pub fn render_json<T: serde::Serialize + ?Sized>(
    value: &T,
    pretty: bool,
) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
