//! Error types module
//!
//! Setup-time failures get a structured enum; per-request handler failures
//! stay opaque and propagate to the transport layer untouched.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Opaque per-request failure raised by a handler or middleware.
///
/// The dispatcher never intercepts these; they bubble up to the host
/// transport, which surfaces them as connection-level errors.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Failures raised during the setup phase, before the server starts
/// accepting connections.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A route registration structurally conflicts with an existing binding
    /// (same path and same method, or either side is ANY).
    #[error("conflicting route registration for '{path}'")]
    RouteConflict { path: String },

    /// Directory listing or file read failed during asset projection.
    #[error("filesystem error at '{}'", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file or environment parsing failed.
    #[error("invalid configuration")]
    Config(#[from] config::ConfigError),

    /// Log writer initialization failed.
    #[error("failed to initialize logger")]
    Logger(#[from] io::Error),
}
