//! End-to-end behaviour of `RenderDispatcher::render`.

use crate::common::{body, dispatcher, dispatcher_with, request};
use mdpeek_render::{BackendSettings, Capabilities, FlavorId, Theme, ThemeMode};
use tracing_test::traced_test;

const DARK_BACKGROUND: &str = "background-color: #0d1117";

#[test]
fn every_flavor_yields_a_document_for_any_input() {
    let builtin = dispatcher(Capabilities::builtin_only());
    let detected = dispatcher(Capabilities::default());

    for flavor in FlavorId::ALL {
        for source in ["", "# Title\n\nSome *text*.\n", "\u{1F600} ünïcödé\n"] {
            for d in [&builtin, &detected] {
                let doc = d.render(&request(source, flavor.name()));
                let html = doc.as_str();
                assert!(html.contains("<html>"), "{flavor}: missing <html>");
                assert!(html.contains("<body>"), "{flavor}: missing <body>");
                assert!(html.trim_end().ends_with("</html>"), "{flavor}: unterminated");
            }
        }
    }
}

#[traced_test]
#[test]
fn unknown_flavor_renders_as_default() {
    let d = dispatcher(Capabilities::builtin_only());
    let bogus = d.render(&request("# Hi\n\n- [ ] task\n", "bogus"));
    let gfm = d.render(&request("# Hi\n\n- [ ] task\n", "gfm"));

    assert_eq!(bogus, gfm);
    assert!(logs_contain("unknown flavor"));
}

#[test]
fn flavor_names_are_case_insensitive() {
    let d = dispatcher(Capabilities::builtin_only());
    assert_eq!(
        d.render(&request("~~x~~", " GFM ")),
        d.render(&request("~~x~~", "gfm"))
    );
}

#[test]
fn github_rewriting_links_mentions_and_issues() {
    let d = dispatcher(Capabilities::builtin_only());
    let doc = d.render(&request("@alice #42 !7\n", "gfm"));
    let html = body(doc.as_str());

    assert!(html.contains(r#"<a href="https://github.com/alice" class="mention">@alice</a>"#));
    assert!(html.contains(r##"<a href="#issue-42" class="issue-link">#42</a>"##));
    assert!(!html.contains("mr-link"));
}

#[test]
fn gitlab_rewriting_adds_merge_requests() {
    let d = dispatcher(Capabilities::builtin_only());
    let doc = d.render(&request("@alice #42 !7\n", "gitlab"));
    let html = doc.as_str();

    assert!(html.contains(r##"<a href="#user-alice" class="mention">@alice</a>"##));
    assert!(html.contains(r##"<a href="#issue-42" class="issue-link">#42</a>"##));
    assert!(html.contains(r##"<a href="#mr-7" class="mr-link">!7</a>"##));
}

#[test]
fn standard_gets_checkboxes_from_the_task_rewrite() {
    let d = dispatcher(Capabilities::builtin_only());
    let doc = d.render(&request("- [ ] todo\n- [x] done\n", "standard"));
    let html = body(doc.as_str());

    assert_eq!(html.matches(r#"type="checkbox""#).count(), 2);
    assert_eq!(
        html.matches(r#"class="task-list-item-checkbox" checked disabled"#)
            .count(),
        1
    );
    assert_eq!(
        html.matches(r#"class="task-list-item-checkbox" disabled"#)
            .count(),
        1
    );
}

#[test]
fn gfm_task_lists_are_not_doubled() {
    let d = dispatcher(Capabilities::builtin_only());
    let doc = d.render(&request("- [ ] todo\n- [x] done\n", "gfm"));
    assert_eq!(body(doc.as_str()).matches(r#"type="checkbox""#).count(), 2);
}

#[test]
fn math_script_requires_flag_and_delimiter() {
    let d = dispatcher(Capabilities::builtin_only());

    let with_math = d.render(&request("Euler: $x^2$\n", "gfm"));
    assert!(with_math.as_str().contains("MathJax-script"));

    let no_delimiters = d.render(&request("Plain prose.\n", "gfm"));
    assert!(!no_delimiters.as_str().contains("MathJax"));

    let disabled = d.render(&request("Euler: $x^2$\n", "gfm").with_math(false));
    assert!(!disabled.as_str().contains("MathJax"));
}

#[test]
fn diagram_script_requires_flag_and_fence() {
    let d = dispatcher(Capabilities::builtin_only());
    let source = "```mermaid\ngraph TD;\n  A-->B;\n```\n";

    let doc = d.render(&request(source, "gfm"));
    assert!(doc.as_str().contains("mermaid.initialize"));

    let disabled = d.render(&request(source, "gfm").with_diagrams(false));
    assert!(!disabled.as_str().contains("mermaid.initialize"));

    let plain = d.render(&request("# None\n", "gfm"));
    assert!(!plain.as_str().contains("mermaid.initialize"));
}

#[cfg(feature = "pymdown")]
#[test]
fn pymdown_prerenders_diagram_containers() {
    let d = dispatcher(Capabilities::builtin_only().with_pymdown(true));
    let doc = d.render(&request("```mermaid\ngraph TD;\n```\n", "pymdown"));
    let html = doc.as_str();
    assert!(html.contains(r#"<div class="mermaid">graph TD;"#));
    assert!(html.contains("mermaid.initialize"));
}

#[test]
fn theme_modes_select_stylesheet_variant() {
    let d = dispatcher(Capabilities::builtin_only());

    let dark = d.render(&request("x", "gfm").with_theme(ThemeMode::Dark));
    assert!(dark.as_str().contains(DARK_BACKGROUND));

    let light = d.render(&request("x", "gfm").with_theme(ThemeMode::Light));
    assert!(!light.as_str().contains(DARK_BACKGROUND));
}

#[test]
fn auto_theme_follows_the_probe() {
    let settings = BackendSettings::default();
    let dark_desktop = dispatcher_with(&settings, Capabilities::builtin_only(), Theme::Dark);
    let doc = dark_desktop.render(&request("x", "gfm").with_theme(ThemeMode::Auto));
    assert!(doc.as_str().contains(DARK_BACKGROUND));
}

#[test]
fn title_is_escaped() {
    let d = dispatcher(Capabilities::builtin_only());
    let doc = d.render(&request("x", "gfm").with_title("a <b> & \"c\""));
    assert!(doc
        .as_str()
        .contains("<title>a &lt;b&gt; &amp; &quot;c&quot;</title>"));
}

#[test]
fn dispatcher_is_shareable_across_threads() {
    let d = std::sync::Arc::new(dispatcher(Capabilities::builtin_only()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let d = d.clone();
            std::thread::spawn(move || {
                d.render(&request(&format!("# Doc {i}\n"), "gfm"))
                    .into_string()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert!(handle.join().unwrap().contains(&format!("Doc {i}")));
    }
}
