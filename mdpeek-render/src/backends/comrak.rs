//! Flavors built on the comrak base converter
//!
//! Standard, Extra, GFM and GitLab share one converter and differ only in the extension set
//! switched on. GitLab parses exactly like GFM; what sets it apart is the reference rewriting
//! bound to it in [`FlavorId::reference_style`].
//!
//! | Flavor   | Tables | Footnotes | Anchors | Def. lists | Strike | Autolink | Tasks | Hard breaks |
//! |----------|--------|-----------|---------|------------|--------|----------|-------|-------------|
//! | standard | x      | x         | x       |            |        |          |       |             |
//! | extra    | x      | x         | x       | x          |        |          |       |             |
//! | gfm      | x      | x         | x       | x          | x      | x        | x     | x           |
//! | gitlab   | x      | x         | x       | x          | x      | x        | x     | x           |

use crate::backend::{FlavorBackend, RenderContext, RenderedFragment};
use crate::error::RenderError;
use crate::flavor::FlavorId;
use comrak::{markdown_to_html, Options};

/// Backend for the comrak-based flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComrakBackend {
    flavor: FlavorId,
}

impl ComrakBackend {
    pub fn standard() -> Self {
        Self {
            flavor: FlavorId::Standard,
        }
    }

    pub fn extra() -> Self {
        Self {
            flavor: FlavorId::Extra,
        }
    }

    pub fn gfm() -> Self {
        Self {
            flavor: FlavorId::Gfm,
        }
    }

    pub fn gitlab() -> Self {
        Self {
            flavor: FlavorId::GitLab,
        }
    }

    fn options(&self) -> Options<'static> {
        match self.flavor {
            FlavorId::Gfm | FlavorId::GitLab => github_options(),
            FlavorId::Extra => {
                let mut options = standard_options();
                options.extension.description_lists = true;
                options
            }
            _ => standard_options(),
        }
    }
}

impl FlavorBackend for ComrakBackend {
    fn flavor(&self) -> FlavorId {
        self.flavor
    }

    fn renders_task_lists(&self) -> bool {
        matches!(self.flavor, FlavorId::Gfm | FlavorId::GitLab)
    }

    fn render(
        &self,
        source: &str,
        _context: &RenderContext,
    ) -> Result<RenderedFragment, RenderError> {
        Ok(RenderedFragment::new(markdown_to_html(
            source,
            &self.options(),
        )))
    }
}

/// Options shared by every comrak flavor.
pub(crate) fn standard_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.header_ids = Some(String::new());
    options.render.unsafe_ = true;
    options
}

/// GitHub-style extension set, the base for GFM, GitLab and PyMdown.
pub(crate) fn github_options() -> Options<'static> {
    let mut options = standard_options();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.description_lists = true;
    options.render.hardbreaks = true;
    options
}
