//! PyMdown-style rendering
//!
//! The richest GitHub-like flavor: the GFM extension set plus superscript and smart
//! punctuation, syntax highlighting through comrak's syntect plugin, and `mermaid` fences
//! turned into diagram containers instead of code blocks.
//!
//! Pipeline: Markdown string → comrak AST → mermaid fences swapped for HTML blocks →
//! highlighted HTML.

use crate::assets::DIAGRAM_CONTAINER;
use crate::backend::{Dependency, FlavorBackend, RenderContext, RenderedFragment};
use crate::backends::comrak::github_options;
use crate::document::html_escape;
use crate::error::RenderError;
use crate::flavor::FlavorId;
use crate::theme::Theme;
use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{format_html_with_plugins, parse_document, Arena, Options, Plugins};

const LIGHT_HIGHLIGHT_THEME: &str = "InspiredGitHub";
const DARK_HIGHLIGHT_THEME: &str = "base16-ocean.dark";

/// Fence info string that marks a diagram.
pub const MERMAID_LANGUAGE: &str = "mermaid";

/// Backend for [`FlavorId::PyMdownLike`]
pub struct PymdownBackend {
    light: SyntectAdapter,
    dark: SyntectAdapter,
}

impl PymdownBackend {
    pub fn new() -> Self {
        Self {
            light: SyntectAdapter::new(Some(LIGHT_HIGHLIGHT_THEME)),
            dark: SyntectAdapter::new(Some(DARK_HIGHLIGHT_THEME)),
        }
    }

    fn adapter(&self, theme: Theme) -> &SyntectAdapter {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

impl Default for PymdownBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FlavorBackend for PymdownBackend {
    fn flavor(&self) -> FlavorId {
        FlavorId::PyMdownLike
    }

    fn dependency(&self) -> Dependency {
        Dependency::PymdownExtensions
    }

    fn renders_task_lists(&self) -> bool {
        true
    }

    fn render(
        &self,
        source: &str,
        context: &RenderContext,
    ) -> Result<RenderedFragment, RenderError> {
        let arena = Arena::new();
        let options = pymdown_options();
        let root = parse_document(&arena, source, &options);

        convert_mermaid_fences(root);

        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(self.adapter(context.theme));

        let mut html = Vec::new();
        format_html_with_plugins(root, &options, &mut html, &plugins)?;
        let html = String::from_utf8(html)
            .map_err(|e| RenderError::MalformedOutput(format!("invalid UTF-8 from comrak: {e}")))?;

        Ok(RenderedFragment::new(html))
    }
}

fn pymdown_options() -> Options<'static> {
    let mut options = github_options();
    options.extension.superscript = true;
    options.parse.smart = true;
    options
}

/// Replace fenced `mermaid` code blocks with `<div class="mermaid">` containers.
fn convert_mermaid_fences<'a>(root: &'a AstNode<'a>) {
    let fences: Vec<_> = root
        .descendants()
        .filter(|node| match &node.data.borrow().value {
            NodeValue::CodeBlock(block) => {
                block.fenced && block.info.split_whitespace().next() == Some(MERMAID_LANGUAGE)
            }
            _ => false,
        })
        .collect();

    for node in fences {
        let mut data = node.data.borrow_mut();
        let literal = match &data.value {
            NodeValue::CodeBlock(block) => block.literal.clone(),
            _ => continue,
        };
        data.value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 0,
            literal: format!("{DIAGRAM_CONTAINER}{}</div>\n", html_escape(&literal)),
        });
    }
}
