//! Backend trait definition
//!
//! A [`FlavorBackend`] turns Markdown text into an HTML fragment according to one dialect. It
//! declares the [`Dependency`] it needs so the dispatcher can skip it without trying when the
//! dependency is known to be absent, and it may still fail at render time (a converter process
//! can crash), in which case the dispatcher moves on along the flavor's fallback chain.

use crate::error::RenderError;
use crate::flavor::FlavorId;
use crate::theme::Theme;
use std::fmt;

/// What a backend needs beyond this crate's always-present code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// Nothing; the backend can always run
    Builtin,
    /// The PyMdown-style extension set (syntax highlighting)
    PymdownExtensions,
    /// The strict CommonMark parser
    CommonMarkParser,
    /// The external pandoc program
    PandocProgram,
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dependency::Builtin => "builtin",
            Dependency::PymdownExtensions => "pymdown extensions",
            Dependency::CommonMarkParser => "commonmark parser",
            Dependency::PandocProgram => "pandoc",
        };
        f.write_str(name)
    }
}

/// Per-request inputs a backend may consult besides the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Resolved theme, used for syntax-highlight styles
    pub theme: Theme,
    /// Whether math rendering was requested
    pub math_enabled: bool,
}

/// HTML produced for the document body only.
///
/// Ownership passes to the dispatcher; backends keep no reference to what they returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedFragment(String);

impl RenderedFragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Apply a text-to-text transform to the fragment.
    pub fn map(self, transform: impl FnOnce(String) -> String) -> Self {
        Self(transform(self.0))
    }
}

impl From<String> for RenderedFragment {
    fn from(html: String) -> Self {
        Self(html)
    }
}

/// Trait for flavor backends
///
/// # Examples
///
/// ```ignore
/// struct Echo;
///
/// impl FlavorBackend for Echo {
///     fn flavor(&self) -> FlavorId {
///         FlavorId::Standard
///     }
///
///     fn render(&self, source: &str, _ctx: &RenderContext) -> Result<RenderedFragment, RenderError> {
///         Ok(RenderedFragment::new(format!("<pre>{source}</pre>")))
///     }
/// }
/// ```
pub trait FlavorBackend: Send + Sync {
    /// The flavor this backend implements
    fn flavor(&self) -> FlavorId;

    /// The dependency that must be present for this backend to run
    fn dependency(&self) -> Dependency {
        Dependency::Builtin
    }

    /// Whether task-list items already come out as checkbox inputs.
    ///
    /// When `false`, the dispatcher applies the textual task-list rewrite afterwards.
    fn renders_task_lists(&self) -> bool {
        false
    }

    /// Render Markdown `source` into an HTML fragment
    fn render(
        &self,
        source: &str,
        context: &RenderContext,
    ) -> Result<RenderedFragment, RenderError>;
}
