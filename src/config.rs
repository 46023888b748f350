use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{Catalog, KeyLayout};

pub const CONFIG_FILE_NAME: &str = ".lingorc.json";

/// Conventional lang directory locations, tried in order.
pub const DEFAULT_LANG_DIRS: &[&str] = &[
    "lang",
    "resources/lang",
    "vendor/laravel/framework/src/Illuminate/Translation/lang",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// A single directory or a list of candidates.
    #[serde(default = "default_lang_dirs", deserialize_with = "one_or_many")]
    pub lang_dirs: Vec<String>,
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
    #[serde(default = "default_window_key")]
    pub window_key: String,
    #[serde(default)]
    pub layout: KeyLayout,
    /// Package namespace -> package lang directory.
    #[serde(default)]
    pub packages: BTreeMap<String, String>,
}

fn default_lang_dirs() -> Vec<String> {
    DEFAULT_LANG_DIRS.iter().map(|s| s.to_string()).collect()
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    OneOrMany::deserialize(deserializer).map(|dirs| match dirs {
        OneOrMany::One(dir) => vec![dir],
        OneOrMany::Many(dirs) => dirs,
    })
}

fn default_fallback_locale() -> String {
    "en".to_string()
}

fn default_window_key() -> String {
    "translations".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_dirs: default_lang_dirs(),
            fallback_locale: default_fallback_locale(),
            window_key: default_window_key(),
            layout: KeyLayout::default(),
            packages: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_locale.trim().is_empty() {
            bail!("'fallbackLocale' must not be empty");
        }
        if self.window_key.is_empty() {
            bail!("'windowKey' must not be empty");
        }
        for namespace in self.packages.keys() {
            if namespace.trim().is_empty() {
                bail!("Package namespaces in 'packages' must not be empty");
            }
        }
        Ok(())
    }

    /// First candidate of `lang_dirs` that exists as a directory under `root`.
    ///
    /// Absolute candidates are used as-is.
    pub fn resolve_lang_dir(&self, root: &Path) -> Option<PathBuf> {
        self.lang_dirs
            .iter()
            .map(|dir| root.join(dir))
            .find(|path| path.is_dir())
    }

    /// Build a catalog for the project at `root`.
    pub fn catalog(&self, root: &Path) -> Catalog {
        self.packages.iter().fold(
            Catalog::new(self.resolve_lang_dir(root), self.fallback_locale.clone())
                .with_layout(self.layout),
            |catalog, (namespace, dir)| catalog.with_package(namespace.clone(), root.join(dir)),
        )
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
