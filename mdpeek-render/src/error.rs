//! Error types for rendering operations
//!
//! None of these ever reach the caller of [`RenderDispatcher::render`](crate::RenderDispatcher::render):
//! backend errors trigger the next fallback, probe errors resolve to the light theme, and
//! anything left over is turned into the error document.

use crate::flavor::FlavorId;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while rendering a preview
#[derive(Debug, Error)]
pub enum RenderError {
    /// An optional library or program required by a backend is missing
    #[error("dependency '{0}' is not available")]
    DependencyUnavailable(String),
    /// Every flavor in a fallback chain came up without a usable backend
    #[error("no backend could render flavor '{0}'")]
    NoBackend(FlavorId),
    /// An external program could not be started
    #[error("failed to launch '{program}': {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// An external program exited unsuccessfully
    #[error("'{program}' exited with {status}: {stderr}")]
    ProcessFailed {
        program: String,
        status: String,
        stderr: String,
    },
    /// An external program did not finish before its deadline
    #[error("'{program}' timed out after {}ms", .after.as_millis())]
    ProcessTimeout { program: String, after: Duration },
    /// A backend or probe produced output that could not be used
    #[error("malformed output: {0}")]
    MalformedOutput(String),
    /// I/O failure while talking to a backend
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Anything else that went wrong inside the pipeline
    #[error("internal error: {0}")]
    Internal(String),
}
