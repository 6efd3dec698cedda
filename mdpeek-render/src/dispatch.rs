//! Request dispatch
//!
//! [`RenderDispatcher::render`] is the one entry point shells call. It never fails: the
//! requested flavor is normalized, its fallback chain walked until a backend whose dependency
//! is present renders successfully, the rewrites bound to the flavor that actually rendered are
//! applied, and the fragment is wrapped in the document shell. Internal errors and panics come
//! back as [`error_document`] pages.
//!
//! The dispatcher is immutable after construction and can be shared across threads.

use crate::assets;
use crate::backend::{FlavorBackend, RenderContext, RenderedFragment};
use crate::capabilities::Capabilities;
use crate::document::{self, error_document, RenderedDocument};
use crate::error::RenderError;
use crate::flavor::FlavorId;
use crate::registry::BackendRegistry;
use crate::request::RenderRequest;
use crate::rewrite::rewrite_task_lists;
use crate::settings::BackendSettings;
use crate::style;
use crate::theme::ThemeResolver;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Fragment produced for a request, with the flavor that actually rendered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedFragment {
    pub requested: FlavorId,
    pub effective: FlavorId,
    pub fragment: RenderedFragment,
}

/// Top-level coordinator
pub struct RenderDispatcher {
    registry: BackendRegistry,
    capabilities: Capabilities,
    resolver: ThemeResolver,
}

impl RenderDispatcher {
    pub fn new(
        registry: BackendRegistry,
        capabilities: Capabilities,
        resolver: ThemeResolver,
    ) -> Self {
        Self {
            registry,
            capabilities,
            resolver,
        }
    }

    /// Default backends and probe, with capabilities detected from `settings`.
    pub fn with_settings(settings: &BackendSettings) -> Self {
        Self::new(
            BackendRegistry::with_defaults(settings),
            Capabilities::detect(settings),
            ThemeResolver::default(),
        )
    }

    /// Render `request` into a complete document.
    pub fn render(&self, request: &RenderRequest) -> RenderedDocument {
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_render(request))) {
            Ok(Ok(document)) => document,
            Ok(Err(err)) => {
                tracing::error!(error = %err, "rendering failed");
                error_document(&err.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(panic = %message, "renderer panicked");
                error_document(&format!("internal error: {message}"))
            }
        }
    }

    fn try_render(&self, request: &RenderRequest) -> Result<RenderedDocument, RenderError> {
        let requested = FlavorId::normalize(&request.flavor);
        let theme = self.resolver.resolve(request.theme);
        let context = RenderContext {
            theme,
            math_enabled: request.math_enabled,
        };

        let dispatched = self.render_fragment(requested, &request.source_text, &context)?;
        let fragment = dispatched.fragment.as_str();

        let stylesheet = style::build(theme);
        let scripts = assets::scripts(
            &request.source_text,
            fragment,
            request.math_enabled,
            request.diagrams_enabled,
        );

        tracing::info!(
            requested = %dispatched.requested,
            effective = %dispatched.effective,
            ?theme,
            "document rendered"
        );
        Ok(document::assemble(
            &request.title,
            &stylesheet,
            &scripts,
            fragment,
        ))
    }

    /// Walk the fallback chain of `requested` and return the first successful, rewritten
    /// fragment.
    ///
    /// Fails only when no flavor in the chain has a usable backend, which cannot happen with
    /// [`BackendRegistry::with_defaults`] since `Standard` is always registered.
    pub fn render_fragment(
        &self,
        requested: FlavorId,
        source: &str,
        context: &RenderContext,
    ) -> Result<DispatchedFragment, RenderError> {
        for flavor in requested.chain() {
            let Some(backend) = self.registry.get(flavor) else {
                tracing::warn!(%requested, %flavor, "no backend registered, falling back");
                continue;
            };

            let dependency = backend.dependency();
            if !self.capabilities.provides(dependency) {
                tracing::warn!(
                    %requested,
                    %flavor,
                    %dependency,
                    "dependency unavailable, falling back"
                );
                continue;
            }

            match backend.render(source, context) {
                Ok(fragment) => {
                    tracing::debug!(%requested, effective = %flavor, "backend selected");
                    return Ok(DispatchedFragment {
                        requested,
                        effective: flavor,
                        fragment: finalize(backend, flavor, fragment),
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        %requested,
                        %flavor,
                        error = %err,
                        "backend failed, falling back"
                    );
                }
            }
        }

        Err(RenderError::NoBackend(requested))
    }
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::with_settings(&BackendSettings::default())
    }
}

/// Apply the rewrites bound to the flavor that rendered `fragment`. Runs once per render.
fn finalize(
    backend: &dyn FlavorBackend,
    effective: FlavorId,
    fragment: RenderedFragment,
) -> RenderedFragment {
    let Some(style) = effective.reference_style() else {
        return fragment;
    };
    let fragment = if backend.renders_task_lists() {
        fragment
    } else {
        fragment.map(|html| rewrite_task_lists(&html))
    };
    fragment.map(|html| style.rewrite(&html))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
