//! Route table module
//!
//! Insertion-ordered collection of route bindings. Conflicts are rejected
//! at registration time, so lookup never has to disambiguate.

use crate::error::SetupError;
use crate::handler::Handler;
use crate::routing::Method;

/// One registered route: an exact path, a method (or ANY), and a handler.
///
/// Immutable after creation and owned exclusively by the table; there is
/// no runtime unregistration.
pub struct RouteBinding {
    path: String,
    method: Method,
    handler: Handler,
}

impl RouteBinding {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub const fn method(&self) -> Method {
        self.method
    }

    pub const fn handler(&self) -> &Handler {
        &self.handler
    }
}

/// Insertion-ordered route table.
///
/// Both registration and lookup are deliberate linear scans: registration
/// happens once at setup time and the table stays small, so a trie or hash
/// index would buy nothing here.
#[derive(Default)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding, rejecting structural conflicts.
    ///
    /// A conflict is the same path with the same method, or with either
    /// side being ANY. On conflict the table is left unchanged.
    pub fn register(
        &mut self,
        path: impl Into<String>,
        method: Method,
        handler: Handler,
    ) -> Result<(), SetupError> {
        let path = path.into();
        if self
            .bindings
            .iter()
            .any(|b| b.path == path && b.method.conflicts_with(method))
        {
            return Err(SetupError::RouteConflict { path });
        }
        self.bindings.push(RouteBinding {
            path,
            method,
            handler,
        });
        Ok(())
    }

    /// Find the handler for a request path and wire method string.
    ///
    /// First match in insertion order wins; the registration invariant
    /// guarantees at most one binding can match a concrete pair, so order
    /// only acts as a tie-break if the invariant were ever bypassed.
    pub fn lookup(&self, path: &str, method_name: &str) -> Option<&Handler> {
        self.bindings
            .iter()
            .find(|b| b.path == path && b.method.matches_request(method_name))
            .map(RouteBinding::handler)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::ServerRequest;
    use crate::http::response::ResponseWriter;
    use std::sync::Arc;

    /// Handler that marks responses with a fixed tag, so tests can tell
    /// which binding a lookup resolved to.
    fn tagged(tag: &'static str) -> Handler {
        Arc::new(move |_req, res| {
            res.end(tag);
            Ok(())
        })
    }

    fn invoke(handler: &Handler) -> String {
        let req = ServerRequest::new("GET", "/");
        let mut res = ResponseWriter::new();
        handler(&req, &mut res).unwrap();
        String::from_utf8(res.body().to_vec()).unwrap()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut table = RouteTable::new();
        table.register("/a", Method::Get, tagged("a-get")).unwrap();
        table.register("/a", Method::Post, tagged("a-post")).unwrap();
        table.register("/b", Method::Any, tagged("b-any")).unwrap();

        assert_eq!(invoke(table.lookup("/a", "GET").unwrap()), "a-get");
        assert_eq!(invoke(table.lookup("/a", "POST").unwrap()), "a-post");
        assert!(table.lookup("/a", "DELETE").is_none());
        assert!(table.lookup("/c", "GET").is_none());

        // ANY matches every concrete method at its path
        assert_eq!(invoke(table.lookup("/b", "GET").unwrap()), "b-any");
        assert_eq!(invoke(table.lookup("/b", "PUT").unwrap()), "b-any");
    }

    #[test]
    fn test_exact_path_only() {
        let mut table = RouteTable::new();
        table.register("/about", Method::Get, tagged("about")).unwrap();

        assert!(table.lookup("/about/", "GET").is_none());
        assert!(table.lookup("/About", "GET").is_none());
        assert!(table.lookup("/about/team", "GET").is_none());
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let mut table = RouteTable::new();
        table.register("/x", Method::Get, tagged("first")).unwrap();

        let err = table.register("/x", Method::Get, tagged("second"));
        assert!(matches!(
            err,
            Err(SetupError::RouteConflict { path }) if path == "/x"
        ));

        // Table unchanged: the original binding still resolves
        assert_eq!(table.len(), 1);
        assert_eq!(invoke(table.lookup("/x", "GET").unwrap()), "first");
    }

    #[test]
    fn test_any_conflicts_both_directions() {
        let mut table = RouteTable::new();
        table.register("/x", Method::Any, tagged("any")).unwrap();
        assert!(table.register("/x", Method::Get, tagged("get")).is_err());

        let mut table = RouteTable::new();
        table.register("/x", Method::Get, tagged("get")).unwrap();
        assert!(table.register("/x", Method::Any, tagged("any")).is_err());
    }

    #[test]
    fn test_same_method_different_paths() {
        let mut table = RouteTable::new();
        table.register("/x", Method::Get, tagged("x")).unwrap();
        table.register("/y", Method::Get, tagged("y")).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(invoke(table.lookup("/y", "GET").unwrap()), "y");
    }
}
