//! Flavor-aware Markdown preview rendering
//!
//!     This crate turns Markdown text into one self-contained HTML document, choosing a
//!     rendering backend per Markdown flavor, degrading to a simpler flavor when a backend's
//!     dependency is missing, and wrapping the result with styles and scripts.
//!
//!     This is a pure lib, that is, it powers the mdpeek cli but is shell agnostic: no argument
//!     parsing, no reading of the input file, no printing. Diagnostics are emitted as `tracing`
//!     events and it is up to the binary to install a subscriber.
//!
//! Data Flow
//!
//!     source text → RenderDispatcher → FlavorBackend → fragment → rewrites → document shell
//!
//!     The dispatcher normalizes the requested flavor, resolves the theme once, walks the
//!     flavor's fallback chain (see [`FlavorId::chain`]) until a backend whose dependency is
//!     present succeeds, then applies the rewrites bound to the flavor that actually rendered
//!     and assembles the page. [`RenderDispatcher::render`] never fails; unexpected errors yield
//!     an error page.
//!
//!     The file structure :
//!     .
//!     ├── backend.rs              # FlavorBackend trait, fragments, dependencies
//!     ├── backends                # One module per backend family
//!     ├── capabilities.rs         # Which optional dependencies are present
//!     ├── dispatch.rs             # RenderDispatcher
//!     ├── flavor.rs               # Flavor catalogue, fallback chains, rewriter binding
//!     ├── registry.rs             # BackendRegistry
//!     ├── rewrite.rs              # Mention / issue / merge-request / task-list rewrites
//!     ├── theme.rs                # ThemeResolver and system probes
//!     ├── style.rs, assets.rs     # Stylesheet and conditional scripts
//!     ├── document.rs             # Document shell
//!     └── process.rs              # Bounded subprocess execution
//!
//! Optional Backends
//!
//!     Each optional backend sits behind a cargo feature, all on by default:
//!     - `pymdown`: syntax highlighting (comrak + syntect) for the `pymdown` flavor
//!     - `commonmark`: strict CommonMark through pulldown-cmark
//!     - `external`: the `pandoc` and `mmd` flavors, shelling out to pandoc
//!
//!     A flavor whose backend is not compiled in, or whose program is not installed, renders
//!     exactly like its fallback.
//!
pub mod assets;
pub mod backend;
pub mod backends;
pub mod capabilities;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod flavor;
pub mod process;
pub mod registry;
pub mod request;
pub mod rewrite;
pub mod settings;
pub mod style;
pub mod theme;

pub use backend::{Dependency, FlavorBackend, RenderContext, RenderedFragment};
pub use capabilities::Capabilities;
pub use dispatch::{DispatchedFragment, RenderDispatcher};
pub use document::RenderedDocument;
pub use error::RenderError;
pub use flavor::{list_flavors, FlavorId, DEFAULT_FLAVOR};
pub use registry::BackendRegistry;
pub use request::{RenderRequest, DEFAULT_TITLE};
pub use rewrite::ReferenceStyle;
pub use settings::BackendSettings;
pub use theme::{FixedProbe, GsettingsProbe, Theme, ThemeMode, ThemeProbe, ThemeResolver};
