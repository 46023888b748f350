use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use super::{
    EffectiveTranslations, KeyLayout, LocaleCode, LocaleTable, ResourceName,
    error::Result,
    loader::{load_json_translations, load_resource_translations},
    merge::{merge, merge_all},
};

/// Entry point for computing effective translations from a lang directory.
///
/// A `Catalog` holds configuration only. Every query reads the directory again,
/// so results always reflect the current files and concurrent queries never
/// share state.
///
/// Sources, from lowest to highest precedence:
///
/// 1. package translations (only when packages are registered)
/// 2. resource files `<lang>/<locale>/<resource>.json`
/// 3. JSON files `<lang>/<locale>.json`
///
/// # Example
///
/// ```no_run
/// use lingo::core::Catalog;
///
/// let catalog = Catalog::new(Some("lang".into()), "en");
/// let translations = catalog.get_translations("fr", &["messages", "validation"])?;
/// # Ok::<(), lingo::core::TranslationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    base_dir: Option<PathBuf>,
    fallback_locale: LocaleCode,
    layout: KeyLayout,
    packages: BTreeMap<String, PathBuf>,
}

impl Catalog {
    /// `base_dir` is `None` when no lang directory exists; every query then
    /// yields empty translations (unless packages are registered).
    pub fn new(base_dir: Option<PathBuf>, fallback_locale: impl Into<LocaleCode>) -> Self {
        Self {
            base_dir,
            fallback_locale: fallback_locale.into(),
            layout: KeyLayout::default(),
            packages: BTreeMap::new(),
        }
    }

    pub fn with_layout(mut self, layout: KeyLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Register a package lang directory under `namespace`.
    ///
    /// Package keys are prefixed with `<namespace>::` and are overridden by
    /// application translations.
    pub fn with_package(mut self, namespace: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.packages.insert(namespace.into(), dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    pub fn layout(&self) -> KeyLayout {
        self.layout
    }

    /// Effective translations for `locale`, restricted to the resources in
    /// `include_names`. JSON translations are always included in full.
    pub fn get_translations<S: AsRef<str>>(
        &self,
        locale: &str,
        include_names: &[S],
    ) -> Result<EffectiveTranslations> {
        let sources = self.load_sources(&to_name_set(include_names))?;
        let sources: Vec<&LocaleTable> = sources.iter().collect();
        Ok(merge(locale, &sources, &self.fallback_locale))
    }

    /// Effective translations for every locale found in any source.
    pub fn all_translations<S: AsRef<str>>(
        &self,
        include_names: &[S],
    ) -> Result<BTreeMap<LocaleCode, EffectiveTranslations>> {
        let sources = self.load_sources(&to_name_set(include_names))?;
        let sources: Vec<&LocaleTable> = sources.iter().collect();
        Ok(merge_all(&sources, &self.fallback_locale))
    }

    /// Load every source, ordered from lowest to highest precedence.
    fn load_sources(&self, include_names: &BTreeSet<ResourceName>) -> Result<Vec<LocaleTable>> {
        let mut sources = Vec::with_capacity(3);

        if !self.packages.is_empty() {
            sources.push(self.load_packages(include_names)?);
        }

        let Some(base_dir) = &self.base_dir else {
            return Ok(sources);
        };

        let (resources, json) = rayon::join(
            || load_resource_translations(base_dir, include_names),
            || load_json_translations(base_dir),
        );

        sources.push(self.layout.collapse_all(&resources?));
        sources.push(json?);
        Ok(sources)
    }

    fn load_packages(&self, include_names: &BTreeSet<ResourceName>) -> Result<LocaleTable> {
        let mut table = LocaleTable::new();
        for (namespace, dir) in &self.packages {
            for (locale, resources) in load_resource_translations(dir, include_names)? {
                table
                    .entry(locale)
                    .or_default()
                    .extend(self.layout.collapse_namespaced(namespace, &resources));
            }
        }
        Ok(table)
    }
}

fn to_name_set<S: AsRef<str>>(names: &[S]) -> BTreeSet<ResourceName> {
    names.iter().map(|n| n.as_ref().to_string()).collect()
}
