// src/cli.rs
use clap::Parser;
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use crate::config::{Config, load_config};
use crate::core::collector::collect_python_files;
use crate::core::sorter::{SortOptions, Sorter, SourceSorter};
use crate::logger::Logger;
use crate::models::RunOutcome;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sort class methods by visibility (public, protected, private)",
    long_about = None
)]
pub struct Args {
    /// Python files or directories to sort
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Check if files need sorting without modifying them
    #[arg(long)]
    pub check: bool,

    /// Show diff of changes
    #[arg(long)]
    pub diff: bool,

    /// Don't recursively search directories
    #[arg(long)]
    pub no_recursive: bool,

    /// Exclude files/directories matching pattern (can be used multiple times)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,
}

impl Args {
    #[inline]
    #[must_use]
    pub const fn recursive(&self) -> bool {
        !self.no_recursive
    }
}

/// Loads the configuration from the working directory and sorts every file
/// named by `args`. Returns the process exit code.
#[inline]
pub fn execute(args: &Args, logger: &dyn Logger) -> u8 {
    let config = match env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| load_config(&cwd))
    {
        Ok(config) => config,
        Err(err) => {
            logger.error(&format!("Failed to load configuration: {err:#}"));
            return 1;
        }
    };

    let sorter = SourceSorter::new(logger);
    run(args, &config, &sorter, logger)
}

/// Collects the files named by `args`, sorts each one with `sorter` and
/// reports the outcome through `logger`.
///
/// # Returns
///
/// The process exit code: `1` when check mode finds files to sort or any file
/// failed, `0` otherwise.
#[inline]
pub fn run(args: &Args, config: &Config, sorter: &dyn Sorter, logger: &dyn Logger) -> u8 {
    let exclude_patterns: Vec<&str> = config
        .exclude
        .iter()
        .chain(&args.exclude)
        .map(String::as_str)
        .collect();

    let files = gather_files(args, &exclude_patterns, logger);
    if files.is_empty() {
        logger.warning("No Python files found");
        return 0;
    }

    let options = SortOptions::from_config(config, args.check, args.diff);
    let outcome = process_files(&files, sorter, &options, logger);
    report(&outcome, args.check, logger)
}

fn gather_files(args: &Args, exclude_patterns: &[&str], logger: &dyn Logger) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for path in &args.paths {
        if !path.exists() {
            logger.error(&format!("Path not found: {}", path.display()));
            continue;
        }

        for file in collect_python_files(path, args.recursive(), exclude_patterns) {
            if seen.insert(file.clone()) {
                files.push(file);
            } else {
                logger.warning(&format!("Skipping duplicate path: {}", file.display()));
            }
        }
    }

    files
}

fn process_files(
    files: &[PathBuf],
    sorter: &dyn Sorter,
    options: &SortOptions,
    logger: &dyn Logger,
) -> RunOutcome {
    let mut outcome = RunOutcome::new();

    for file in files {
        match sorter.sort_file(file, options) {
            Ok(false) => {}
            Ok(true) => {
                if !options.check_only {
                    logger.success(&format!("Sorted {}", file.display()));
                }
                outcome.modified.push(file.clone());
            }
            Err(err) => {
                logger.error(&format!("Error processing {}: {err:#}", file.display()));
                outcome.errored = true;
            }
        }
    }

    outcome
}

fn report(outcome: &RunOutcome, check: bool, logger: &dyn Logger) -> u8 {
    if check && !outcome.modified.is_empty() {
        logger.warning(&format!(
            "Files that need sorting: {}",
            outcome.modified.len()
        ));
        for file in &outcome.modified {
            logger.print(&format!("  - {}", file.display()));
        }
        return 1;
    }

    if outcome.modified.is_empty() && !outcome.errored {
        logger.info("All files are already sorted correctly");
    } else if !outcome.modified.is_empty() && !check {
        logger.success(&format!(
            "Sorted {} file(s) successfully",
            outcome.modified.len()
        ));
    }

    outcome.exit_code()
}
