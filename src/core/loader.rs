//! Reading raw translations from a lang directory.
//!
//! Expected layout:
//!
//! ```text
//! lang/
//! ├── en/
//! │   ├── messages.json      resource "messages" for locale "en"
//! │   └── validation.json
//! ├── fr/
//! │   └── messages.json
//! ├── en.json                flat JSON translations for "en"
//! └── fr.json
//! ```
//!
//! Nothing is cached: each call walks the directory again.

use std::{
    collections::BTreeMap,
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use super::{
    LocaleCode, RawJsonTranslations, RawResourceTranslations, ResourceName, Translations,
    error::{Result, TranslationError},
};

/// File extension of resource files inside locale directories.
pub const RESOURCE_EXTENSION: &str = "json";

/// Load resource-file translations for every locale directory under `base_dir`.
///
/// Only resources named in `include_names` are read. A locale directory with no
/// included resource still shows up with an empty map. A missing `base_dir`
/// yields an empty result.
pub fn load_resource_translations(
    base_dir: &Path,
    include_names: &BTreeSet<ResourceName>,
) -> Result<RawResourceTranslations> {
    if !base_dir.is_dir() {
        return Ok(RawResourceTranslations::new());
    }

    let locale_dirs: Vec<(LocaleCode, PathBuf)> = list_entries(base_dir)?
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| file_name(&path).map(|locale| (locale, path)))
        .collect();

    locale_dirs
        .into_par_iter()
        .map(|(locale, dir)| {
            load_locale_resources(&dir, include_names).map(|resources| (locale, resources))
        })
        .collect()
}

/// Load every `<locale>.json` file directly inside `base_dir`.
///
/// Fails on the first file that is not a JSON object; a corrupt file must
/// never look like an empty one.
pub fn load_json_translations(base_dir: &Path) -> Result<RawJsonTranslations> {
    if !base_dir.is_dir() {
        return Ok(RawJsonTranslations::new());
    }

    let files: Vec<(LocaleCode, PathBuf)> = list_entries(base_dir)?
        .into_iter()
        .filter(|path| path.is_file() && has_extension(path, "json"))
        .filter_map(|path| file_stem(&path).map(|locale| (locale, path)))
        .collect();

    files
        .into_par_iter()
        .map(|(locale, path)| {
            let content = read_file(&path)?;
            let translations: Translations = serde_json::from_str(&content)
                .map_err(|source| TranslationError::MalformedJson { path, source })?;
            Ok((locale, translations))
        })
        .collect()
}

fn load_locale_resources(
    dir: &Path,
    include_names: &BTreeSet<ResourceName>,
) -> Result<BTreeMap<ResourceName, Translations>> {
    let mut resources = BTreeMap::new();

    // The directory may vanish between listing and reading.
    if !dir.is_dir() {
        return Ok(resources);
    }

    for path in list_entries(dir)? {
        if !path.is_file() || !has_extension(&path, RESOURCE_EXTENSION) {
            continue;
        }
        let Some(name) = file_stem(&path) else {
            continue;
        };
        if !include_names.contains(&name) {
            continue;
        }

        let content = read_file(&path)?;
        let translations: Translations = serde_json::from_str(&content)
            .map_err(|source| TranslationError::InvalidResourceFile { path, source })?;
        resources.insert(name, translations);
    }

    Ok(resources)
}

/// Visible immediate children of `dir`, sorted by file name.
///
/// Dot entries are skipped. Symlinks are not resolved here; `is_dir` and
/// `is_file` follow them, so a dangling link matches neither.
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .map(|entry| {
            entry.map(|e| e.into_path()).map_err(|err| {
                let path = err.path().unwrap_or(dir).to_path_buf();
                TranslationError::io(path, err.into())
            })
        })
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TranslationError::io(path, source))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
