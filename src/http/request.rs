//! Request view module
//!
//! The core reads exactly two things from an inbound request: its path and
//! its method, both as verbatim strings from the transport.

/// The request fields visible to handlers and middleware.
#[derive(Debug, Clone)]
pub struct ServerRequest {
    /// Wire method string, e.g. `GET`. Never normalized.
    pub method: String,
    /// Request path, exact and unnormalized (no trailing-slash folding).
    pub path: String,
}

impl ServerRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}
