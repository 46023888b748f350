use std::{collections::BTreeMap, fmt};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{LocaleTable, RawResourceTranslations, ResourceName, Translations};

/// How a locale's resource files are folded into a single key/value mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyLayout {
    /// Keys of all resources share one namespace: `{"hello": "Hi"}`.
    ///
    /// Resources are folded in name order, so on a conflict the resource
    /// whose name sorts last wins.
    #[default]
    Flat,
    /// Each resource is a top-level key: `{"messages": {"hello": "Hi"}}`.
    Grouped,
}

impl fmt::Display for KeyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyLayout::Flat => write!(f, "flat"),
            KeyLayout::Grouped => write!(f, "grouped"),
        }
    }
}

impl KeyLayout {
    /// Fold one locale's resources into a single mapping.
    pub fn collapse(self, resources: &BTreeMap<ResourceName, Translations>) -> Translations {
        self.collapse_with_prefix("", resources)
    }

    /// Like [`collapse`](Self::collapse), with every top-level key prefixed by
    /// `<namespace>::`.
    pub fn collapse_namespaced(
        self,
        namespace: &str,
        resources: &BTreeMap<ResourceName, Translations>,
    ) -> Translations {
        self.collapse_with_prefix(&format!("{}::", namespace), resources)
    }

    /// Apply [`collapse`](Self::collapse) to every locale of a resource source.
    pub fn collapse_all(self, raw: &RawResourceTranslations) -> LocaleTable {
        raw.iter()
            .map(|(locale, resources)| (locale.clone(), self.collapse(resources)))
            .collect()
    }

    fn collapse_with_prefix(
        self,
        prefix: &str,
        resources: &BTreeMap<ResourceName, Translations>,
    ) -> Translations {
        let mut result = Translations::new();
        for (name, translations) in resources {
            match self {
                KeyLayout::Flat => {
                    for (key, value) in translations {
                        result.insert(format!("{}{}", prefix, key), value.clone());
                    }
                }
                KeyLayout::Grouped => {
                    result.insert(
                        format!("{}{}", prefix, name),
                        Value::Object(translations.clone()),
                    );
                }
            }
        }
        result
    }
}
