// src/config.rs
mod loader;

pub use loader::{CONFIG_FILE_NAME, find_config_file, load_config};

use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::models::{MethodType, Visibility};

/// Settings read from the `[tool.undersort]` table of `pyproject.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Visibility ranks, first sorts first. Lists every visibility once.
    pub order: Vec<Visibility>,
    /// Optional tie-breaker between methods of the same visibility.
    pub method_type_order: Option<Vec<MethodType>>,
    /// Exclusion globs applied before any given on the command line.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            order: Visibility::ALL.to_vec(),
            method_type_order: None,
            exclude: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct PyProject {
    tool: Option<Tools>,
}

#[derive(Deserialize, Debug, Default)]
struct Tools {
    undersort: Option<RawConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    order: Option<Vec<Visibility>>,
    method_type_order: Option<Vec<MethodType>>,
    exclude: Option<Vec<String>>,
}

impl Config {
    /// Parses the contents of a `pyproject.toml` file.
    ///
    /// A document without a `[tool.undersort]` table yields the defaults.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The content is not valid TOML
    /// * The `[tool.undersort]` table has unknown keys or values of the wrong type
    /// * `order` or `method_type_order` repeat or omit an entry
    pub fn from_pyproject_str(content: &str) -> Result<Self> {
        let pyproject: PyProject =
            toml::from_str(content).context("Failed to parse pyproject.toml")?;
        let raw = pyproject
            .tool
            .and_then(|tools| tools.undersort)
            .unwrap_or_default();
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let defaults = Self::default();

        let order = raw.order.unwrap_or(defaults.order);
        validate_permutation("order", &order, &Visibility::ALL)?;

        if let Some(method_type_order) = &raw.method_type_order {
            validate_permutation("method_type_order", method_type_order, &MethodType::ALL)?;
        }

        Ok(Self {
            order,
            method_type_order: raw.method_type_order,
            exclude: raw.exclude.unwrap_or_default(),
        })
    }
}

/// Checks that `values` lists every member of `all` exactly once.
fn validate_permutation<T>(key: &str, values: &[T], all: &[T]) -> Result<()>
where
    T: Copy + Eq + Hash + Display,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(*value) {
            bail!("`{key}` lists `{value}` more than once");
        }
    }

    let missing: Vec<String> = all
        .iter()
        .filter(|value| !seen.contains(*value))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        bail!("`{key}` is missing {}", missing.join(", "));
    }

    Ok(())
}
