//! Shared helpers for the integration tests.

use mdpeek_render::{
    BackendRegistry, BackendSettings, Capabilities, FixedProbe, RenderDispatcher, RenderRequest,
    Theme, ThemeMode, ThemeResolver,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Dispatcher with every compiled backend, a fixed light system theme and the given
/// capabilities.
pub fn dispatcher(capabilities: Capabilities) -> RenderDispatcher {
    dispatcher_with(&BackendSettings::default(), capabilities, Theme::Light)
}

pub fn dispatcher_with(
    settings: &BackendSettings,
    capabilities: Capabilities,
    system_theme: Theme,
) -> RenderDispatcher {
    RenderDispatcher::new(
        BackendRegistry::with_defaults(settings),
        capabilities,
        ThemeResolver::new(FixedProbe(system_theme)),
    )
}

/// Light-themed request for `flavor`.
pub fn request(source: &str, flavor: &str) -> RenderRequest {
    RenderRequest::new(source)
        .with_flavor(flavor)
        .with_theme(ThemeMode::Light)
}

/// Replace every `<style>` block so snapshots stay readable.
pub fn without_styles(html: &str) -> String {
    static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new("(?is)<style[^>]*?>.*?</style>").expect("valid regex for stripping style blocks")
    });
    STYLE_REGEX
        .replace_all(html, "<style data-snapshot=\"removed\"></style>")
        .into_owned()
}

/// The part of a document after the opening `<body>` tag.
pub fn body(html: &str) -> &str {
    html.split_once("<body>").map_or(html, |(_, rest)| rest)
}

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_stub(dir: &std::path::Path, name: &str, script: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, script).expect("stub should be writable");
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}
