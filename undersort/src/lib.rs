// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod models;

pub use cli::{Args, execute, run};
pub use config::{Config, load_config};
pub use crate::core::collector::{EXCLUDED_DIRS, collect_python_files};
pub use crate::core::exclude::{ExcludePatterns, matches};
pub use crate::core::sorter::{SortOptions, Sorter, SourceSorter, sort_source};
pub use logger::{ConsoleLogger, Level, Logger, MemoryLogger};
pub use models::{MethodType, RunOutcome, Visibility};
