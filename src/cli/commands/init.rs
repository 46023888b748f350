use std::{fs, path::Path};

use anyhow::{Result, anyhow};

use super::super::{exit_status::ExitStatus, report};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        report::error(&anyhow!("{} already exists", CONFIG_FILE_NAME));
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)?;
    report::success(format!("Created {}", CONFIG_FILE_NAME));

    Ok(ExitStatus::Success)
}
