//! Backend registry for flavor selection
//!
//! One backend per [`FlavorId`]. The dispatcher looks backends up here while walking a
//! flavor's fallback chain; a flavor with no registered backend is simply skipped.

use crate::backend::FlavorBackend;
use crate::backends::ComrakBackend;
use crate::flavor::FlavorId;
use crate::settings::BackendSettings;
use std::collections::HashMap;

/// Registry of flavor backends
///
/// # Examples
///
/// ```ignore
/// let mut registry = BackendRegistry::new();
/// registry.register(ComrakBackend::standard());
///
/// let backend = registry.get(FlavorId::Standard).unwrap();
/// let html = backend.render("# Hi", &context)?;
/// ```
pub struct BackendRegistry {
    backends: HashMap<FlavorId, Box<dyn FlavorBackend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BackendRegistry {
            backends: HashMap::new(),
        }
    }

    /// Register a backend under the flavor it reports
    ///
    /// If a backend for the same flavor already exists, it will be replaced.
    pub fn register<B: FlavorBackend + 'static>(&mut self, backend: B) {
        self.backends.insert(backend.flavor(), Box::new(backend));
    }

    /// Get the backend for a flavor
    pub fn get(&self, flavor: FlavorId) -> Option<&dyn FlavorBackend> {
        self.backends.get(&flavor).map(|b| b.as_ref())
    }

    /// Check if a flavor has a backend
    pub fn has(&self, flavor: FlavorId) -> bool {
        self.backends.contains_key(&flavor)
    }

    /// Flavors with a backend, in catalogue order
    pub fn list_flavors(&self) -> Vec<FlavorId> {
        FlavorId::ALL
            .into_iter()
            .filter(|flavor| self.has(*flavor))
            .collect()
    }

    /// Create a registry with every backend compiled into this build
    pub fn with_defaults(settings: &BackendSettings) -> Self {
        let mut registry = Self::new();

        registry.register(ComrakBackend::standard());
        registry.register(ComrakBackend::extra());
        registry.register(ComrakBackend::gfm());
        registry.register(ComrakBackend::gitlab());

        #[cfg(feature = "pymdown")]
        registry.register(crate::backends::PymdownBackend::new());
        #[cfg(feature = "commonmark")]
        registry.register(crate::backends::CommonMarkBackend);
        #[cfg(feature = "external")]
        {
            registry.register(crate::backends::PandocBackend::github(settings));
            registry.register(crate::backends::PandocBackend::multimarkdown(settings));
        }
        #[cfg(not(feature = "external"))]
        let _ = settings;

        registry
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults(&BackendSettings::default())
    }
}
