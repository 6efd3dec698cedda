//! Rendering through the external pandoc program.
//!
//! Two flavors go through here: `pandoc` (pandoc's own GitHub reader) and `mmd`
//! (MultiMarkdown). The source is written to pandoc's stdin and a standalone HTML5 page is read
//! back; only the inner `<body>` is kept since the document shell is built by this crate.

use crate::backend::{Dependency, FlavorBackend, RenderContext, RenderedFragment};
use crate::error::RenderError;
use crate::flavor::FlavorId;
use crate::process::run_with_timeout;
use crate::settings::BackendSettings;
use crate::theme::Theme;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// Backend that shells out to pandoc
#[derive(Debug, Clone)]
pub struct PandocBackend {
    flavor: FlavorId,
    input_format: &'static str,
    program: PathBuf,
    timeout: Duration,
}

impl PandocBackend {
    /// `pandoc` flavor, reading with pandoc's `gfm` reader
    pub fn github(settings: &BackendSettings) -> Self {
        Self::new(FlavorId::Pandoc, "gfm", settings)
    }

    /// `mmd` flavor, reading with pandoc's `markdown_mmd` reader
    pub fn multimarkdown(settings: &BackendSettings) -> Self {
        Self::new(FlavorId::MultiMarkdownViaPandoc, "markdown_mmd", settings)
    }

    fn new(flavor: FlavorId, input_format: &'static str, settings: &BackendSettings) -> Self {
        Self {
            flavor,
            input_format,
            program: settings.pandoc_program.clone(),
            timeout: settings.pandoc_timeout,
        }
    }

    pub fn input_format(&self) -> &'static str {
        self.input_format
    }

    /// Command line handed to pandoc, without the program name.
    pub fn arguments(&self, context: &RenderContext) -> Vec<&'static str> {
        let mut args = vec![
            "-f",
            self.input_format,
            "-t",
            "html5",
            "--standalone",
            "--highlight-style",
            highlight_style(context.theme),
        ];
        if context.math_enabled {
            args.push("--mathjax");
        }
        args
    }
}

impl FlavorBackend for PandocBackend {
    fn flavor(&self) -> FlavorId {
        self.flavor
    }

    fn dependency(&self) -> Dependency {
        Dependency::PandocProgram
    }

    fn render(
        &self,
        source: &str,
        context: &RenderContext,
    ) -> Result<RenderedFragment, RenderError> {
        let mut command = Command::new(&self.program);
        command.args(self.arguments(context));

        tracing::debug!(
            program = %self.program.display(),
            format = self.input_format,
            "running pandoc"
        );
        let output = run_with_timeout(&mut command, Some(source), self.timeout)?;
        Ok(RenderedFragment::new(extract_body(&output.stdout)))
    }
}

fn highlight_style(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "pygments",
        Theme::Dark => "zenburn",
    }
}

/// Inner HTML between the first `<body…>` tag and the following `</body>`, trimmed.
///
/// Output without both markers is returned untouched.
pub fn extract_body(html: &str) -> String {
    let Some(open) = html.find("<body") else {
        return html.to_string();
    };
    let Some(tag_end) = html[open..].find('>') else {
        return html.to_string();
    };
    let start = open + tag_end + 1;
    match html[start..].find("</body>") {
        Some(len) => html[start..start + len].trim().to_string(),
        None => html.to_string(),
    }
}
