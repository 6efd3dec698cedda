//! Process-level knobs for the backends.

use std::path::PathBuf;
use std::time::Duration;

/// Default deadline for one pandoc run.
pub const DEFAULT_PANDOC_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every request handled by one dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    /// Program name (looked up on `PATH`) or path of the pandoc executable
    pub pandoc_program: PathBuf,
    /// Deadline for a single pandoc invocation
    pub pandoc_timeout: Duration,
}

impl BackendSettings {
    pub fn with_pandoc_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.pandoc_program = program.into();
        self
    }

    pub fn with_pandoc_timeout(mut self, timeout: Duration) -> Self {
        self.pandoc_timeout = timeout;
        self
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            pandoc_program: PathBuf::from("pandoc"),
            pandoc_timeout: DEFAULT_PANDOC_TIMEOUT,
        }
    }
}
