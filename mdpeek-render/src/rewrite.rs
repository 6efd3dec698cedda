//! Post-render text rewrites
//!
//! These are plain substitutions over the finished HTML fragment. They do not parse HTML, so
//! shorthand inside code spans or attribute values is rewritten as well, and a fragment must go
//! through [`ReferenceStyle::rewrite`] at most once.
//!
//! | Pattern              | GitHub                                    | GitLab                   |
//! |----------------------|-------------------------------------------|--------------------------|
//! | `@word`              | `https://github.com/word`, `mention`      | `#user-word`, `mention`  |
//! | `#digits`            | `#issue-digits`, `issue-link`             | same                     |
//! | `&#`, `:#`, `"#` + digits | untouched                            | untouched                |
//! | `!digits`            | untouched                                 | `#mr-digits`, `mr-link`  |
//!
//! `#digits` directly after `&`, `:` or `"` is left alone: those are numeric character
//! references, inline CSS colours and fragment links such as heading anchors. Prose written
//! the same way (`rank:#1`) is therefore not linked either.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(\w+)").expect("valid regex"));
static ISSUE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"([&:"]?)#(\d+)"#).expect("valid regex"));
static MERGE_REQUEST: Lazy<Regex> = Lazy::new(|| Regex::new(r"!(\d+)").expect("valid regex"));
static TASK_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<li>(\s*<p>)?\[([ xX])\]").expect("valid regex"));

/// Dialect of reference shorthand linking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceStyle {
    GitHub,
    GitLab,
}

impl ReferenceStyle {
    /// Turn mention, issue and (GitLab only) merge-request shorthand into links.
    pub fn rewrite(self, html: &str) -> String {
        let mention_href = match self {
            ReferenceStyle::GitHub => "https://github.com/",
            ReferenceStyle::GitLab => "#user-",
        };

        let html = MENTION.replace_all(html, |caps: &Captures| {
            format!(
                "<a href=\"{mention_href}{name}\" class=\"mention\">@{name}</a>",
                name = &caps[1]
            )
        });

        let html = ISSUE.replace_all(&html, |caps: &Captures| {
            if !caps[1].is_empty() {
                return caps[0].to_string();
            }
            format!(
                "<a href=\"#issue-{n}\" class=\"issue-link\">#{n}</a>",
                n = &caps[2]
            )
        });

        match self {
            ReferenceStyle::GitHub => html.into_owned(),
            ReferenceStyle::GitLab => MERGE_REQUEST
                .replace_all(&html, "<a href=\"#mr-$1\" class=\"mr-link\">!$1</a>")
                .into_owned(),
        }
    }
}

/// Replace `[ ]`, `[x]` and `[X]` at the start of a list item with disabled checkboxes.
///
/// Loose list items (`<li>\n<p>[ ]`) are handled too. Rewritten items carry the
/// `task-list-item` class, so running this twice changes nothing.
pub fn rewrite_task_lists(html: &str) -> String {
    TASK_ITEM
        .replace_all(html, |caps: &Captures| {
            let paragraph = caps.get(1).map_or("", |m| m.as_str());
            let checked = if &caps[2] == " " { "" } else { " checked" };
            format!(
                "<li class=\"task-list-item\">{paragraph}<input type=\"checkbox\" class=\"task-list-item-checkbox\"{checked} disabled>"
            )
        })
        .into_owned()
}
