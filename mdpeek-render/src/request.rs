//! Render requests.

use crate::flavor::DEFAULT_FLAVOR;
use crate::theme::ThemeMode;

/// Title used when the caller gives none.
pub const DEFAULT_TITLE: &str = "Markdown Preview";

/// Everything needed to render one document. Read-only once handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Markdown source
    pub source_text: String,
    /// Requested flavor name, normalized at render time
    pub flavor: String,
    pub theme: ThemeMode,
    pub math_enabled: bool,
    pub diagrams_enabled: bool,
    /// Document title, escaped on output
    pub title: String,
}

impl RenderRequest {
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            flavor: DEFAULT_FLAVOR.name().to_string(),
            theme: ThemeMode::default(),
            math_enabled: true,
            diagrams_enabled: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_math(mut self, enabled: bool) -> Self {
        self.math_enabled = enabled;
        self
    }

    pub fn with_diagrams(mut self, enabled: bool) -> Self {
        self.diagrams_enabled = enabled;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
