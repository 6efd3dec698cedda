//! Pandoc-routed flavors against stub executables.

use crate::common::{body, dispatcher_with, request, write_stub};
use mdpeek_render::{BackendSettings, Capabilities, Theme, ThemeMode};
use std::time::Duration;
use tempfile::TempDir;
use tracing_test::traced_test;

/// Echoes its arguments and stdin inside a standalone page.
const ECHO_STUB: &str = r#"#!/bin/sh
printf '<!DOCTYPE html>\n<html>\n<head><title>pandoc</title></head>\n<body class="stub">\n'
printf '<p class="args">%s</p>\n' "$*"
cat
printf '\n</body>\n</html>\n'
"#;

fn pandoc_dispatcher(script: &str, timeout: Duration) -> (TempDir, mdpeek_render::RenderDispatcher) {
    let dir = TempDir::new().unwrap();
    let program = write_stub(dir.path(), "pandoc", script);
    let settings = BackendSettings::default()
        .with_pandoc_program(program)
        .with_pandoc_timeout(timeout);
    let d = dispatcher_with(
        &settings,
        Capabilities::builtin_only().with_pandoc(true),
        Theme::Light,
    );
    (dir, d)
}

#[test]
fn body_is_extracted_and_not_rewritten() {
    let (_dir, d) = pandoc_dispatcher(ECHO_STUB, Duration::from_secs(10));
    let doc = d.render(&request("@alice #42\n", "pandoc"));
    assert_eq!(doc.as_str().matches("<html>").count(), 1);
    assert!(!doc.as_str().contains("<title>pandoc</title>"));
    assert!(!doc.as_str().contains("class=\"stub\""));

    let html = body(doc.as_str());
    assert!(html.contains("@alice #42"));
    assert!(!html.contains("class=\"mention\""));
}

#[test]
fn arguments_carry_reader_theme_and_math() {
    let (_dir, d) = pandoc_dispatcher(ECHO_STUB, Duration::from_secs(10));

    let doc = d.render(&request("x", "pandoc").with_theme(ThemeMode::Dark));
    assert!(doc.as_str().contains(
        "-f gfm -t html5 --standalone --highlight-style zenburn --mathjax"
    ));

    let doc = d.render(&request("x", "mmd").with_math(false));
    let html = doc.as_str();
    assert!(html.contains("-f markdown_mmd -t html5 --standalone --highlight-style pygments"));
    assert!(!html.contains("--mathjax"));
}

#[test]
fn oversized_timeout_still_renders_through_pandoc() {
    let (_dir, d) = pandoc_dispatcher(ECHO_STUB, Duration::from_secs(u64::MAX));
    let doc = d.render(&request("@alice\n", "pandoc"));
    let html = doc.as_str();

    assert!(!html.contains("Markdown Preview Error"));
    assert!(body(html).contains("-f gfm -t html5"));
}

#[traced_test]
#[test]
fn failing_pandoc_falls_back_to_standard() {
    let (_dir, d) = pandoc_dispatcher(
        "#!/bin/sh\necho 'pandoc: unknown reader' >&2\nexit 3\n",
        Duration::from_secs(10),
    );
    let doc = d.render(&request("- [ ] todo @alice\n", "pandoc"));
    let html = body(doc.as_str());

    assert!(html.contains("task-list-item-checkbox"));
    assert!(html.contains("class=\"mention\""));
    assert!(logs_contain("backend failed"));
}

#[traced_test]
#[test]
fn slow_pandoc_times_out_and_falls_back() {
    let (_dir, d) = pandoc_dispatcher(
        "#!/bin/sh\nexec sleep 10\n",
        Duration::from_millis(200),
    );
    let started = std::time::Instant::now();
    let doc = d.render(&request("plain\n", "mmd"));

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(doc.as_str().contains("<p>plain</p>"));
    assert!(logs_contain("timed out"));
}

#[test]
fn output_without_body_markers_is_used_raw() {
    let (_dir, d) = pandoc_dispatcher(
        "#!/bin/sh\ncat > /dev/null\necho '<p>bare fragment</p>'\n",
        Duration::from_secs(10),
    );
    let doc = d.render(&request("ignored", "pandoc"));
    assert!(doc.as_str().contains("<p>bare fragment</p>"));
}
