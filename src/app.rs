//! Application module
//!
//! `App` is the explicit instance owning the route table and the single
//! middleware slot. No process-wide singletons: independent instances
//! coexist, which keeps dispatch testable without a live socket.

use crate::error::{HandlerError, SetupError};
use crate::handler::assets::{self, LoadMode};
use crate::handler::{dispatch, Handler, Middleware};
use crate::http::request::ServerRequest;
use crate::http::response::ResponseWriter;
use crate::routing::{Method, RouteTable};
use crate::server::{self, ListenConfig};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Route registry plus middleware slot, wired to a hyper transport via
/// [`App::listen`]. All registration happens before `listen` consumes the
/// instance, so the serving side reads the table without locks.
#[derive(Default)]
pub struct App {
    routes: RouteTable,
    middleware: Option<Middleware>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an exact path and method.
    pub fn route<F>(&mut self, path: &str, method: Method, handler: F) -> Result<(), SetupError>
    where
        F: Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.routes.register(path, method, Arc::new(handler) as Handler)
    }

    pub fn get<F>(&mut self, path: &str, handler: F) -> Result<(), SetupError>
    where
        F: Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.route(path, Method::Get, handler)
    }

    pub fn post<F>(&mut self, path: &str, handler: F) -> Result<(), SetupError>
    where
        F: Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.route(path, Method::Post, handler)
    }

    pub fn put<F>(&mut self, path: &str, handler: F) -> Result<(), SetupError>
    where
        F: Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.route(path, Method::Put, handler)
    }

    pub fn delete<F>(&mut self, path: &str, handler: F) -> Result<(), SetupError>
    where
        F: Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.route(path, Method::Delete, handler)
    }

    pub fn options<F>(&mut self, path: &str, handler: F) -> Result<(), SetupError>
    where
        F: Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.route(path, Method::Options, handler)
    }

    /// Register a wildcard binding matching every method at `path`.
    pub fn any<F>(&mut self, path: &str, handler: F) -> Result<(), SetupError>
    where
        F: Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.route(path, Method::Any, handler)
    }

    /// Install the middleware, replacing any previous one wholesale.
    pub fn set_middleware<F>(&mut self, middleware: F)
    where
        F: Fn(&ServerRequest, &mut ResponseWriter) -> Result<(), HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.middleware = Some(Arc::new(middleware) as Middleware);
    }

    /// Project a directory tree into GET routes, reading file content once
    /// at registration time. Returns the number of routes registered.
    pub fn serve_static(
        &mut self,
        dir: impl AsRef<Path>,
        route_prefix: &str,
    ) -> Result<usize, SetupError> {
        assets::project(&mut self.routes, dir.as_ref(), route_prefix, LoadMode::Eager)
    }

    /// Project a directory tree into GET routes that re-read the file on
    /// every request, so on-disk edits apply without a restart.
    pub fn serve_dynamic(
        &mut self,
        dir: impl AsRef<Path>,
        route_prefix: &str,
    ) -> Result<usize, SetupError> {
        assets::project(&mut self.routes, dir.as_ref(), route_prefix, LoadMode::Lazy)
    }

    /// Run one request through middleware, lookup, and handler-or-404.
    pub fn dispatch(
        &self,
        req: &ServerRequest,
        res: &mut ResponseWriter,
    ) -> Result<(), HandlerError> {
        dispatch::dispatch(&self.routes, self.middleware.as_ref(), req, res)
    }

    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Bind and serve. `ready` fires once the listener is bound, with the
    /// actual local address; pass `|_| {}` when uninterested.
    pub async fn listen<F>(
        self,
        config: ListenConfig,
        ready: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: FnOnce(SocketAddr),
    {
        server::run(self, config, ready).await
    }
}
