//! Shared configuration loader for mdpeek.
//!
//! `defaults/mdpeek.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PeekConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use mdpeek_render::{BackendSettings, RenderRequest, ThemeMode};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/mdpeek.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "mdpeek.toml";

/// Top-level configuration consumed by mdpeek applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PeekConfig {
    pub render: RenderConfig,
    pub pandoc: PandocConfig,
    pub theme: ThemeConfig,
}

/// Defaults for each render request.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub flavor: String,
    pub detect_flavor: bool,
    pub theme: ThemeSetting,
    pub math: bool,
    pub diagrams: bool,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    Light,
    Dark,
    Auto,
}

impl From<ThemeSetting> for ThemeMode {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Light => ThemeMode::Light,
            ThemeSetting::Dark => ThemeMode::Dark,
            ThemeSetting::Auto => ThemeMode::Auto,
        }
    }
}

/// External converter knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct PandocConfig {
    pub program: PathBuf,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub probe_timeout_ms: u64,
}

impl PeekConfig {
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings::default()
            .with_pandoc_program(self.pandoc.program.clone())
            .with_pandoc_timeout(Duration::from_secs(self.pandoc.timeout_secs))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.theme.probe_timeout_ms)
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.render.theme.into()
    }

    /// A request for `source` carrying the configured render defaults.
    pub fn request(&self, source: impl Into<String>) -> RenderRequest {
        RenderRequest::new(source)
            .with_flavor(self.render.flavor.clone())
            .with_theme(self.theme_mode())
            .with_math(self.render.math)
            .with_diagrams(self.render.diagrams)
            .with_title(self.render.title.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PeekConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PeekConfig, ConfigError> {
    Loader::new().build()
}
