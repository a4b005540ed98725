//! Request dispatch module
//!
//! Per-request flow: middleware, then route lookup, then handler or the
//! 404 fallback. No retries, no supervision; middleware and handler
//! errors propagate to the transport.

use crate::error::HandlerError;
use crate::handler::Middleware;
use crate::http::request::ServerRequest;
use crate::http::response::{self, ResponseWriter};
use crate::routing::RouteTable;

/// Dispatch one request against the table.
///
/// The middleware (if any) runs unconditionally before the routing
/// decision, even when no route will match; whatever it writes into the
/// response is the caller's responsibility.
pub fn dispatch(
    table: &RouteTable,
    middleware: Option<&Middleware>,
    req: &ServerRequest,
    res: &mut ResponseWriter,
) -> Result<(), HandlerError> {
    if let Some(mw) = middleware {
        mw(req, res)?;
    }

    match table.lookup(&req.path, &req.method) {
        Some(handler) => handler(req, res),
        None => {
            response::write_404(res, &req.path);
            Ok(())
        }
    }
}
