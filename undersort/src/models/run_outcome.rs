// src/models/run_outcome.rs
use std::path::PathBuf;

/// Aggregated result of processing every collected file in one invocation.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Files that were sorted, or would be sorted in check mode.
    pub modified: Vec<PathBuf>,
    pub errored: bool,
}

impl RunOutcome {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modified: Vec::new(),
            errored: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.errored { 1 } else { 0 }
    }
}
