//! Availability of optional backends.
//!
//! Which optional pieces are usable is decided once, by [`Capabilities::detect`], and the
//! result is handed to the [`RenderDispatcher`](crate::RenderDispatcher). Backends never look
//! this up on their own. Tests build a [`Capabilities`] by hand to simulate missing pieces.

use crate::backend::Dependency;
use crate::settings::BackendSettings;

/// The set of optional dependencies present in this process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pymdown: bool,
    commonmark: bool,
    pandoc: bool,
}

impl Capabilities {
    /// Inspect compiled features and look the pandoc program up on `PATH`.
    pub fn detect(settings: &BackendSettings) -> Self {
        let capabilities = Self {
            pymdown: cfg!(feature = "pymdown"),
            commonmark: cfg!(feature = "commonmark"),
            pandoc: pandoc_present(settings),
        };
        tracing::debug!(?capabilities, "backend capabilities detected");
        capabilities
    }

    /// Only the dependency-free backends.
    pub fn builtin_only() -> Self {
        Self {
            pymdown: false,
            commonmark: false,
            pandoc: false,
        }
    }

    pub fn with_pymdown(mut self, present: bool) -> Self {
        self.pymdown = present;
        self
    }

    pub fn with_commonmark(mut self, present: bool) -> Self {
        self.commonmark = present;
        self
    }

    pub fn with_pandoc(mut self, present: bool) -> Self {
        self.pandoc = present;
        self
    }

    /// Whether `dependency` can be relied upon.
    pub fn provides(&self, dependency: Dependency) -> bool {
        match dependency {
            Dependency::Builtin => true,
            Dependency::PymdownExtensions => self.pymdown,
            Dependency::CommonMarkParser => self.commonmark,
            Dependency::PandocProgram => self.pandoc,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect(&BackendSettings::default())
    }
}

#[cfg(feature = "external")]
fn pandoc_present(settings: &BackendSettings) -> bool {
    match which::which(&settings.pandoc_program) {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "pandoc found");
            true
        }
        Err(err) => {
            tracing::debug!(program = %settings.pandoc_program.display(), error = %err, "pandoc not found");
            false
        }
    }
}

#[cfg(not(feature = "external"))]
fn pandoc_present(_settings: &BackendSettings) -> bool {
    false
}
