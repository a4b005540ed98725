//! Handler module
//!
//! Per-request dispatch flow and the filesystem-to-route asset projector.

pub mod assets;
pub mod dispatch;

use crate::error::HandlerError;
use crate::http::request::ServerRequest;
use crate::http::response::ResponseWriter;
use std::sync::Arc;

/// A route handler: reads the request view, writes into the response sink.
/// Failures propagate untouched to the transport.
pub type Handler =
    Arc<dyn Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError> + Send + Sync>;

/// The single middleware. Same shape as a handler; it runs before every
/// routing decision and is replaced wholesale by each `set_middleware`.
pub type Middleware =
    Arc<dyn Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError> + Send + Sync>;
