//! Flavor backend implementations
//!
//! Each backend lives in its own module. The comrak-based ones are always compiled; the others
//! sit behind the Cargo feature named after the dependency they need.

pub mod comrak;
#[cfg(feature = "commonmark")]
pub mod commonmark;
#[cfg(feature = "external")]
pub mod pandoc;
#[cfg(feature = "pymdown")]
pub mod pymdown;

pub use self::comrak::ComrakBackend;
#[cfg(feature = "commonmark")]
pub use self::commonmark::CommonMarkBackend;
#[cfg(feature = "external")]
pub use self::pandoc::PandocBackend;
#[cfg(feature = "pymdown")]
pub use self::pymdown::PymdownBackend;
