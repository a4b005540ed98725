//! HTTP module
//!
//! Request/response views the core works with, plus MIME resolution.
//! The wire protocol itself belongs to the transport layer in `server`.

pub mod mime;
pub mod request;
pub mod response;

pub use request::ServerRequest;
pub use response::ResponseWriter;
