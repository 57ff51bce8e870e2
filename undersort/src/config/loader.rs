// src/config/loader.rs
use crate::config::Config;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "pyproject.toml";

/// Finds the nearest `pyproject.toml`, starting at `dir` and walking up
/// through its parents.
#[inline]
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Loads the configuration from the nearest `pyproject.toml` at or above `dir`.
///
/// # Returns
///
/// * `Ok(Config)` with the defaults when no `pyproject.toml` is found or it has
///   no `[tool.undersort]` table
///
/// # Errors
///
/// This function may return an error if:
/// * The `pyproject.toml` file exists but cannot be read
/// * The file is not valid TOML or the table holds invalid settings
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let Some(config_file) = find_config_file(dir) else {
        log::debug!("no {CONFIG_FILE_NAME} found above {}", dir.display());
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", config_file.display());
    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed to read {}", config_file.display()))?;

    Config::from_pyproject_str(&content)
        .with_context(|| format!("Invalid configuration in {}", config_file.display()))
}
