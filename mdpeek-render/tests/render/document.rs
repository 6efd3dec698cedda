//! Shape of the assembled document.

use crate::common::{dispatcher, request, without_styles};
use insta::assert_snapshot;
use mdpeek_render::Capabilities;

fn normalized(html: &str) -> String {
    without_styles(html).replace(env!("CARGO_PKG_VERSION"), "[version]")
}

#[test]
fn test_document_shell() {
    let d = dispatcher(Capabilities::builtin_only());
    let doc = d.render(&request("World @alice\n", "gfm").with_title("Notes"));

    assert_snapshot!(normalized(doc.as_str()), @r#"
<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="generator" content="mdpeek [version]">
  <title>Notes</title>
  <style data-snapshot="removed"></style>
</head>
<body>
<p>World <a href="https://github.com/alice" class="mention">@alice</a></p>

</body>
</html>
"#);
}

#[test]
fn test_document_shell_with_scripts() {
    let d = dispatcher(Capabilities::builtin_only());
    let doc = d.render(&request("$a$\n", "standard"));
    let html = normalized(doc.as_str());

    let head_end = html.find("</head>").unwrap();
    let math = html.find("MathJax-script").unwrap();
    assert!(math < head_end);
    assert!(html.contains("inlineMath: [['$', '$'], ['\\\\(', '\\\\)']]"));
    assert!(html.contains("<title>Markdown Preview</title>"));
}

#[test]
fn test_stylesheet_is_embedded_once() {
    let d = dispatcher(Capabilities::builtin_only());
    let doc = d.render(&request("x", "gfm"));
    let html = doc.as_str();
    assert_eq!(html.matches("<style>").count(), 1);
    assert!(html.contains("@media print"));
    assert!(!html.contains("<link"));
}
