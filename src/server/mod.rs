//! Server transport module
//!
//! The hyper/tokio host transport: binds a listener, fires the ready
//! callback, then serves HTTP/1 connections, one spawned task each. Every
//! request funnels into [`App::dispatch`]; dispatch errors are returned to
//! hyper and surface as connection-level failures.

use crate::app::App;
use crate::error::HandlerError;
use crate::http::request::ServerRequest;
use crate::http::response::ResponseWriter;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Listen configuration for [`App::listen`].
#[derive(Debug, Clone)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
    /// Emit per-request access log lines.
    pub access_log: bool,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            access_log: false,
        }
    }
}

impl ListenConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("invalid listen address: {e}"))
    }
}

/// Bind, signal readiness, and serve until the listener fails.
pub async fn run<F>(
    app: App,
    config: ListenConfig,
    ready: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: FnOnce(SocketAddr),
{
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    ready(listener.local_addr()?);

    let app = Arc::new(app);
    let access_log = config.access_log;

    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                logger::log_error(&format!("failed to accept connection: {e}"));
                continue;
            }
        };
        if access_log {
            logger::log_connection_accepted(&peer_addr);
        }

        let app = Arc::clone(&app);
        let service = service_fn(move |req| {
            let app = Arc::clone(&app);
            let result = handle(&app, &req, access_log);
            std::future::ready(result)
        });
        spawn_connection(stream, service);
    }
}

/// Serve one connection on a spawned task.
///
/// The explicit `Error = HandlerError` bound pins the service's error type
/// to `'static`, working around rust-lang/rust#102211 (closure-based
/// services otherwise fail the `'static` check inside `tokio::spawn`).
fn spawn_connection<S>(stream: tokio::net::TcpStream, service: S)
where
    S: hyper::service::Service<
            hyper::Request<hyper::body::Incoming>,
            Response = hyper::Response<http_body_util::Full<hyper::body::Bytes>>,
            Error = HandlerError,
        > + Send
        + 'static,
    S::Future: Send,
{
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let conn = http1::Builder::new().serve_connection(io, service);
        if let Err(e) = conn.await {
            logger::log_connection_error(&e);
        }
    });
}

/// Bridge one hyper request through the dispatcher.
fn handle(
    app: &App,
    req: &hyper::Request<hyper::body::Incoming>,
    access_log: bool,
) -> Result<hyper::Response<http_body_util::Full<hyper::body::Bytes>>, HandlerError> {
    let request = ServerRequest::new(req.method().as_str(), req.uri().path());
    if access_log {
        logger::log_request(&request.method, &request.path);
    }

    let mut res = ResponseWriter::new();
    app.dispatch(&request, &mut res)?;

    if access_log {
        logger::log_response(res.body().len());
    }
    Ok(res.into_response())
}
