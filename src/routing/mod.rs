//! Routing module
//!
//! Exact-match route registry:
//! - Fixed method set with an ANY wildcard
//! - Conflict detection at registration time
//! - First-match lookup over insertion order

mod method;
mod table;

pub use method::Method;
pub use table::{RouteBinding, RouteTable};
