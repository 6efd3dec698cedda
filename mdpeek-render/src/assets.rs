//! Conditional script injection
//!
//! Math and diagram support each cost a script download, so their blocks are only emitted
//! when the document plausibly needs them. Detection is substring matching on the Markdown
//! source (and, for diagrams, on the rendered fragment); nothing is parsed.

/// Opening tag of a pre-rendered diagram container.
pub const DIAGRAM_CONTAINER: &str = "<div class=\"mermaid\">";

/// MathJax 3, configured before the loader runs.
pub const MATH_SCRIPT: &str = r#"<script>
MathJax = {
  tex: {
    inlineMath: [['$', '$'], ['\\(', '\\)']],
    displayMath: [['$$', '$$'], ['\\[', '\\]']]
  }
};
</script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>"#;

/// Mermaid 10, rendering every diagram container on load.
pub const DIAGRAM_SCRIPT: &str = r#"<script src="https://unpkg.com/mermaid@10/dist/mermaid.min.js"></script>
<script>mermaid.initialize({ startOnLoad: true, theme: 'neutral' });</script>"#;

const MATH_DELIMITERS: [&str; 3] = ["$", "\\(", "\\["];
const DIAGRAM_FENCES: [&str; 2] = ["```mermaid", "~~~mermaid"];

/// Whether the source contains any math delimiter.
pub fn needs_math(source: &str) -> bool {
    MATH_DELIMITERS.iter().any(|d| source.contains(d))
}

/// Whether the source has a diagram fence or the fragment already holds a diagram container.
pub fn needs_diagrams(source: &str, fragment: &str) -> bool {
    DIAGRAM_FENCES.iter().any(|f| source.contains(f)) || fragment.contains(DIAGRAM_CONTAINER)
}

/// Script blocks to place in the document head, possibly empty.
pub fn scripts(source: &str, fragment: &str, math_enabled: bool, diagrams_enabled: bool) -> String {
    let mut blocks = Vec::new();
    if math_enabled && needs_math(source) {
        blocks.push(MATH_SCRIPT);
    }
    if diagrams_enabled && needs_diagrams(source, fragment) {
        blocks.push(DIAGRAM_SCRIPT);
    }
    blocks.join("\n")
}
