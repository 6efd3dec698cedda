//! Theme resolution
//!
//! A request asks for [`ThemeMode::Light`], [`ThemeMode::Dark`] or [`ThemeMode::Auto`]. The
//! [`ThemeResolver`] turns that into a concrete [`Theme`], consulting a [`ThemeProbe`] only for
//! `Auto`. Probing is allowed to fail in every possible way; the answer is then `Light`.

use crate::error::RenderError;
use crate::process::run_with_timeout;
use std::process::Command;
use std::time::{Duration, Instant};

/// Default upper bound for a single system theme query.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Theme requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the desktop setting
    #[default]
    Auto,
}

impl ThemeMode {
    pub fn from_name(name: &str) -> Option<ThemeMode> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "auto" => Some(ThemeMode::Auto),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }
}

/// Concrete theme used for styling and highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Source of the desktop's light/dark preference.
pub trait ThemeProbe: Send + Sync {
    /// Query the system theme. Implementations must return within a bounded time.
    fn detect(&self) -> Result<Theme, RenderError>;
}

/// Probe that asks GNOME through `gsettings`.
///
/// The `color-scheme` key is consulted first; older desktops only expose the GTK theme name,
/// which is checked second. A value containing `dark` means [`Theme::Dark`]. Both queries
/// share one timeout.
#[derive(Debug, Clone)]
pub struct GsettingsProbe {
    program: String,
    timeout: Duration,
}

impl GsettingsProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            program: "gsettings".to_string(),
            timeout,
        }
    }

    /// Use a different executable (mainly useful for tests).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn query(&self, key: &str, timeout: Duration) -> Result<String, RenderError> {
        if timeout.is_zero() {
            return Err(RenderError::ProcessTimeout {
                program: self.program.clone(),
                after: self.timeout,
            });
        }
        let mut command = Command::new(&self.program);
        command.args(["get", "org.gnome.desktop.interface", key]);
        let output = run_with_timeout(&mut command, None, timeout)?;
        Ok(output
            .stdout
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .to_lowercase())
    }
}

impl Default for GsettingsProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

impl ThemeProbe for GsettingsProbe {
    fn detect(&self) -> Result<Theme, RenderError> {
        let started = Instant::now();
        let scheme = self.query("color-scheme", self.timeout);
        if let Ok(value) = &scheme {
            if value.contains("dark") {
                return Ok(Theme::Dark);
            }
        }

        let remaining = self.timeout.saturating_sub(started.elapsed());
        match self.query("gtk-theme", remaining) {
            Ok(name) if name.contains("dark") => Ok(Theme::Dark),
            Ok(_) => Ok(Theme::Light),
            // Only a failure on both keys counts as a probe failure.
            Err(err) => scheme.map(|_| Theme::Light).map_err(|_| err),
        }
    }
}

/// Probe that always answers the same theme.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub Theme);

impl ThemeProbe for FixedProbe {
    fn detect(&self) -> Result<Theme, RenderError> {
        Ok(self.0)
    }
}

/// Resolves a [`ThemeMode`] to a concrete [`Theme`]
pub struct ThemeResolver {
    probe: Box<dyn ThemeProbe>,
}

impl ThemeResolver {
    pub fn new(probe: impl ThemeProbe + 'static) -> Self {
        Self {
            probe: Box::new(probe),
        }
    }

    /// `Light` and `Dark` map to themselves; `Auto` asks the probe once and degrades to `Light`.
    pub fn resolve(&self, mode: ThemeMode) -> Theme {
        match mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Auto => match self.probe.detect() {
                Ok(theme) => {
                    tracing::debug!(?theme, "system theme detected");
                    theme
                }
                Err(err) => {
                    tracing::warn!(error = %err, "system theme probe failed, using light theme");
                    Theme::Light
                }
            },
        }
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(GsettingsProbe::default())
    }
}
