//! Flavor identifiers
//!
//! A flavor names a Markdown dialect: which syntax is recognized, which backend renders it,
//! where it degrades to when that backend cannot run, and how references are linked afterwards.
//! The set is closed; adding a flavor means adding a variant here, registering a backend in
//! [`BackendRegistry::with_defaults`](crate::BackendRegistry::with_defaults) and choosing its
//! fallback and rewriter binding below. The dispatch algorithm itself never changes.

use crate::rewrite::ReferenceStyle;
use std::fmt;
use std::path::Path;

/// Flavor used when a request names something outside the catalogue.
pub const DEFAULT_FLAVOR: FlavorId = FlavorId::Gfm;

/// Supported Markdown dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorId {
    Standard,
    Gfm,
    CommonMark,
    PyMdownLike,
    Pandoc,
    GitLab,
    Extra,
    MultiMarkdownViaPandoc,
}

impl FlavorId {
    /// Every flavor, in catalogue order.
    pub const ALL: [FlavorId; 8] = [
        FlavorId::Standard,
        FlavorId::Gfm,
        FlavorId::CommonMark,
        FlavorId::PyMdownLike,
        FlavorId::Pandoc,
        FlavorId::GitLab,
        FlavorId::Extra,
        FlavorId::MultiMarkdownViaPandoc,
    ];

    /// Name used on the command line and in configuration files
    pub fn name(self) -> &'static str {
        match self {
            FlavorId::Standard => "standard",
            FlavorId::Gfm => "gfm",
            FlavorId::CommonMark => "commonmark",
            FlavorId::PyMdownLike => "pymdown",
            FlavorId::Pandoc => "pandoc",
            FlavorId::GitLab => "gitlab",
            FlavorId::Extra => "extra",
            FlavorId::MultiMarkdownViaPandoc => "mmd",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FlavorId::Standard => "Standard Markdown with tables and footnotes",
            FlavorId::Gfm => "GitHub Flavored Markdown",
            FlavorId::CommonMark => "Strict CommonMark specification",
            FlavorId::PyMdownLike => "PyMdown-style extensions (GitHub-like, highlighted)",
            FlavorId::Pandoc => "Pandoc (external)",
            FlavorId::GitLab => "GitLab Flavored Markdown",
            FlavorId::Extra => "Markdown Extra",
            FlavorId::MultiMarkdownViaPandoc => "MultiMarkdown (via pandoc)",
        }
    }

    /// Look a flavor up by name. Leading/trailing whitespace and ASCII case are ignored.
    pub fn from_name(name: &str) -> Option<FlavorId> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|flavor| flavor.name() == wanted)
    }

    /// Like [`FlavorId::from_name`], but substitutes [`DEFAULT_FLAVOR`] for unknown names and
    /// records the substitution as a diagnostic.
    pub fn normalize(name: &str) -> FlavorId {
        match Self::from_name(name) {
            Some(flavor) => flavor,
            None => {
                tracing::warn!(
                    requested = name,
                    default = DEFAULT_FLAVOR.name(),
                    "unknown flavor, using default"
                );
                DEFAULT_FLAVOR
            }
        }
    }

    /// The flavor this one behaves like when its own backend cannot run.
    ///
    /// `Standard` is terminal: it has no external dependency and is always available.
    pub fn fallback(self) -> Option<FlavorId> {
        match self {
            FlavorId::Standard => None,
            FlavorId::PyMdownLike => Some(FlavorId::Gfm),
            FlavorId::Gfm
            | FlavorId::CommonMark
            | FlavorId::Pandoc
            | FlavorId::GitLab
            | FlavorId::Extra
            | FlavorId::MultiMarkdownViaPandoc => Some(FlavorId::Standard),
        }
    }

    /// Ordered list of flavors to attempt, starting with `self` and ending with `Standard`.
    pub fn chain(self) -> Vec<FlavorId> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(next) = current.fallback() {
            chain.push(next);
            current = next;
        }
        chain
    }

    /// Reference rewriting applied after this flavor's backend ran.
    ///
    /// Pandoc-routed flavors return `None`: their output is taken as final.
    pub fn reference_style(self) -> Option<ReferenceStyle> {
        match self {
            FlavorId::Pandoc | FlavorId::MultiMarkdownViaPandoc => None,
            FlavorId::GitLab => Some(ReferenceStyle::GitLab),
            FlavorId::Standard
            | FlavorId::Gfm
            | FlavorId::CommonMark
            | FlavorId::PyMdownLike
            | FlavorId::Extra => Some(ReferenceStyle::GitHub),
        }
    }

    /// Guess a flavor from a file name, the way a desktop previewer would.
    ///
    /// Returns `None` when nothing in the name hints at a dialect, so callers can apply
    /// their own default.
    pub fn detect_from_filename(filename: &str) -> Option<FlavorId> {
        let basename = Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(filename)
            .to_lowercase();

        if basename.contains("readme") || basename.contains("github") {
            Some(FlavorId::Gfm)
        } else if basename.contains("gitlab") {
            Some(FlavorId::GitLab)
        } else if basename.ends_with(".mmd") {
            Some(FlavorId::MultiMarkdownViaPandoc)
        } else {
            None
        }
    }
}

impl fmt::Display for FlavorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(name, description)` pairs for every flavor, in catalogue order.
pub fn list_flavors() -> Vec<(&'static str, &'static str)> {
    FlavorId::ALL
        .into_iter()
        .map(|flavor| (flavor.name(), flavor.description()))
        .collect()
}
