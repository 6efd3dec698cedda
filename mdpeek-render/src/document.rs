//! HTML document shell
//!
//! Wraps a rendered fragment with the head (charset, viewport, title, stylesheet, scripts) so
//! the result opens standalone in any browser or web view. [`error_document`] builds the
//! minimal page shown when rendering failed unexpectedly.

use std::fmt;

/// Generator name written into every document.
pub const GENERATOR: &str = concat!("mdpeek ", env!("CARGO_PKG_VERSION"));

/// A complete, self-contained HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Put `fragment` inside a full page.
///
/// `title` is escaped here; `stylesheet`, `scripts` and `fragment` are inserted verbatim.
pub fn assemble(title: &str, stylesheet: &str, scripts: &str, fragment: &str) -> RenderedDocument {
    let title = html_escape(title);
    let scripts = if scripts.is_empty() {
        String::new()
    } else {
        format!("{scripts}\n")
    };

    RenderedDocument(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="generator" content="{GENERATOR}">
  <title>{title}</title>
  <style>
{stylesheet}
  </style>
{scripts}</head>
<body>
{fragment}
</body>
</html>
"#
    ))
}

/// Minimal page reporting a failure. `message` is escaped.
pub fn error_document(message: &str) -> RenderedDocument {
    let message = html_escape(message);

    RenderedDocument(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="generator" content="{GENERATOR}">
  <title>Markdown Preview Error</title>
  <style>
body {{ font-family: sans-serif; max-width: 800px; margin: 40px auto; padding: 0 20px; }}
pre {{ white-space: pre-wrap; background: #f6f8fa; padding: 16px; border-radius: 6px; }}
  </style>
</head>
<body>
<h1>Markdown Preview Error</h1>
<p>The document could not be rendered:</p>
<pre>{message}</pre>
<ul>
<li>Check that the file is valid UTF-8 Markdown.</li>
<li>Try another flavor, for example <code>standard</code>.</li>
<li>Run with <code>RUST_LOG=debug</code> to see renderer diagnostics.</li>
</ul>
</body>
</html>
"#
    ))
}

/// Escape text for use in element content and double-quoted attributes.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
