use std::path::PathBuf;

use anyhow::Result;

use super::{args::CommonArgs, report};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::Catalog,
};

/// Configuration and catalog shared by the translation commands.
///
/// Values are resolved as CLI args > config file > defaults.
pub struct CommandContext {
    pub config: Config,
    pub catalog: Catalog,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let verbose = args.verbose;
        let root_dir = args.root.clone().unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            report::note(format!(
                "No {} found, using default configuration",
                CONFIG_FILE_NAME
            ));
        }

        let mut config = config_result.config;

        if let Some(ref lang_dir) = args.lang_dir {
            config.lang_dirs = vec![lang_dir.to_string_lossy().to_string()];
        }
        if let Some(ref fallback_locale) = args.fallback_locale {
            config.fallback_locale = fallback_locale.clone();
        }
        if let Some(layout) = args.layout {
            config.layout = layout;
        }
        config.validate()?;

        let catalog = config.catalog(&root_dir);

        match catalog.base_dir() {
            Some(dir) if verbose => {
                report::note(format!("Using lang directory {}", dir.display()));
            }
            Some(_) => {}
            None => report::warning(format!(
                "No lang directory found (tried: {}), translations will be empty",
                config.lang_dirs.join(", ")
            )),
        }

        for (namespace, dir) in &config.packages {
            let dir = root_dir.join(dir);
            if !dir.is_dir() {
                report::warning(format!(
                    "Package '{}' lang directory {} does not exist",
                    namespace,
                    dir.display()
                ));
            }
        }

        Ok(Self {
            config,
            catalog,
            verbose,
        })
    }
}
