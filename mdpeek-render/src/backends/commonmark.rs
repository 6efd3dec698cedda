//! Strict CommonMark rendering through pulldown-cmark.
//!
//! No extensions are enabled: tables, strikethrough and task markers stay literal text.

use crate::backend::{Dependency, FlavorBackend, RenderContext, RenderedFragment};
use crate::error::RenderError;
use crate::flavor::FlavorId;
use pulldown_cmark::{html, Options, Parser};

/// Backend for [`FlavorId::CommonMark`]
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonMarkBackend;

impl FlavorBackend for CommonMarkBackend {
    fn flavor(&self) -> FlavorId {
        FlavorId::CommonMark
    }

    fn dependency(&self) -> Dependency {
        Dependency::CommonMarkParser
    }

    fn render(
        &self,
        source: &str,
        _context: &RenderContext,
    ) -> Result<RenderedFragment, RenderError> {
        let parser = Parser::new_ext(source, Options::empty());
        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(RenderedFragment::new(out))
    }
}
