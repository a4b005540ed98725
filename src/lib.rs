//! routeshell — a minimal exact-match HTTP routing shell.
//!
//! Inbound requests are matched against registered `(path, method)`
//! bindings (with an ANY wildcard), a single optional middleware runs
//! before every routing decision, and unmatched paths fall back to a 404.
//! A setup-time asset projector walks a directory tree and registers one
//! GET route per file, eagerly cached or lazily re-read per request.
//!
//! ```no_run
//! use routeshell::{App, ListenConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let mut app = App::new();
//! app.get("/hello", |_req, res| {
//!     res.header("Content-Type", "text/plain");
//!     res.end("hi");
//!     Ok(())
//! })?;
//! app.serve_static("public", "/")?;
//! app.listen(ListenConfig::default(), |addr| println!("on {addr}")).await
//! # }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;

pub use app::App;
pub use error::{HandlerError, SetupError};
pub use handler::assets::LoadMode;
pub use handler::{Handler, Middleware};
pub use http::request::ServerRequest;
pub use http::response::ResponseWriter;
pub use routing::{Method, RouteTable};
pub use server::ListenConfig;
