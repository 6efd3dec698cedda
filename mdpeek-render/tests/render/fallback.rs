//! A flavor whose dependency is missing renders exactly like its documented fallback.

use crate::common::{dispatcher, request};
use mdpeek_render::{Capabilities, FlavorId};
use tracing_test::traced_test;

const KITCHEN_SINK: &str = r#"# Kitchen sink

Paragraph with *emphasis*, `code`, ~~strike~~ and a footnote[^1].
Second line @alice #42 !7 $x^2$.

| a | b |
|---|---|
| 1 | 2 |

- [ ] todo
- [x] done

```rust
fn main() {}
```

```mermaid
graph TD;
  A-->B;
```

Term

: Definition

[^1]: The note.
"#;

fn assert_same_as(flavor: FlavorId, fallback: FlavorId, capabilities: Capabilities) {
    let d = dispatcher(capabilities);
    assert_eq!(
        d.render(&request(KITCHEN_SINK, flavor.name())),
        d.render(&request(KITCHEN_SINK, fallback.name())),
        "{flavor} should render like {fallback}"
    );
}

#[traced_test]
#[test]
fn pymdown_without_extensions_is_gfm() {
    assert_same_as(
        FlavorId::PyMdownLike,
        FlavorId::Gfm,
        Capabilities::builtin_only(),
    );
    assert!(logs_contain("dependency unavailable"));
}

#[test]
fn commonmark_without_parser_is_standard() {
    assert_same_as(
        FlavorId::CommonMark,
        FlavorId::Standard,
        Capabilities::builtin_only(),
    );
}

#[test]
fn pandoc_flavors_without_pandoc_are_standard() {
    let caps = Capabilities::builtin_only()
        .with_pymdown(true)
        .with_commonmark(true);
    assert_same_as(FlavorId::Pandoc, FlavorId::Standard, caps);
    assert_same_as(FlavorId::MultiMarkdownViaPandoc, FlavorId::Standard, caps);
}

#[test]
fn fallback_does_not_depend_on_unrelated_capabilities() {
    let d_on = dispatcher(Capabilities::builtin_only().with_commonmark(true));
    let d_off = dispatcher(Capabilities::builtin_only());
    assert_eq!(
        d_on.render(&request(KITCHEN_SINK, "pymdown")),
        d_off.render(&request(KITCHEN_SINK, "gfm"))
    );
}

#[cfg(feature = "commonmark")]
#[test]
fn commonmark_with_parser_differs_from_standard() {
    let d = dispatcher(Capabilities::builtin_only().with_commonmark(true));
    assert_ne!(
        d.render(&request(KITCHEN_SINK, "commonmark")),
        d.render(&request(KITCHEN_SINK, "standard"))
    );
}

#[cfg(feature = "pymdown")]
#[test]
fn pymdown_with_extensions_differs_from_gfm() {
    let d = dispatcher(Capabilities::builtin_only().with_pymdown(true));
    assert_ne!(
        d.render(&request(KITCHEN_SINK, "pymdown")),
        d.render(&request(KITCHEN_SINK, "gfm"))
    );
}
