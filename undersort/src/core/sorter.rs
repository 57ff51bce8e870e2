// src/core/sorter.rs
mod diff;
mod source;

pub use diff::unified_diff;
pub use source::sort_source;

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::logger::Logger;
use crate::models::{MethodType, Visibility};

/// Per-run parameters handed to a [`Sorter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    pub order: Vec<Visibility>,
    pub method_type_order: Option<Vec<MethodType>>,
    /// Report whether the file would change, without writing it.
    pub check_only: bool,
    pub show_diff: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            order: Visibility::ALL.to_vec(),
            method_type_order: None,
            check_only: false,
            show_diff: false,
        }
    }
}

impl SortOptions {
    #[inline]
    #[must_use]
    pub fn from_config(config: &Config, check_only: bool, show_diff: bool) -> Self {
        Self {
            order: config.order.clone(),
            method_type_order: config.method_type_order.clone(),
            check_only,
            show_diff,
        }
    }
}

/// Reorders the methods of one file.
pub trait Sorter {
    /// Returns `Ok(true)` if the file was modified, or would be in check mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, decoded or written.
    fn sort_file(&self, path: &Path, options: &SortOptions) -> Result<bool>;
}

/// Sorts Python source files in place.
pub struct SourceSorter<'a> {
    logger: &'a dyn Logger,
}

impl<'a> SourceSorter<'a> {
    /// Diffs requested through [`SortOptions::show_diff`] are printed to `logger`.
    #[inline]
    #[must_use]
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self { logger }
    }
}

impl Sorter for SourceSorter<'_> {
    fn sort_file(&self, path: &Path, options: &SortOptions) -> Result<bool> {
        let original = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let sorted = sort_source(&original, options);
        if sorted == original {
            log::debug!("{} is already sorted", path.display());
            return Ok(false);
        }

        if options.show_diff {
            for line in unified_diff(path, &original, &sorted).lines() {
                self.logger.print(&diff::colorize_line(line));
            }
        }

        if !options.check_only {
            fs::write(path, &sorted)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(true)
    }
}
