//! Route method module
//!
//! The fixed method set bindings may use, including the ANY wildcard.

use std::fmt;

/// Method a route binding is registered under.
///
/// `Any` matches every concrete request method at its path and conflicts
/// with every other binding at the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Any,
}

impl Method {
    /// Canonical uppercase wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Any => "ANY",
        }
    }

    /// Parse a concrete wire method name. Case-sensitive exact match;
    /// `Any` is a registration-side wildcard and never parses.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "OPTIONS" => Some(Self::Options),
            _ => None,
        }
    }

    /// Whether two bindings at the same path would collide:
    /// same method, or either side is the ANY wildcard.
    pub fn conflicts_with(self, other: Self) -> bool {
        self == other || self == Self::Any || other == Self::Any
    }

    /// Whether a binding under this method serves a request carrying the
    /// given wire method string. Comparison is case-sensitive.
    pub fn matches_request(self, method_name: &str) -> bool {
        self == Self::Any || self.name() == method_name
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_exact() {
        assert_eq!(Method::from_name("GET"), Some(Method::Get));
        assert_eq!(Method::from_name("OPTIONS"), Some(Method::Options));
        // Case-sensitive: lowercase does not parse
        assert_eq!(Method::from_name("get"), None);
        assert_eq!(Method::from_name("PATCH"), None);
        assert_eq!(Method::from_name("ANY"), None);
    }

    #[test]
    fn test_conflicts() {
        assert!(Method::Get.conflicts_with(Method::Get));
        assert!(!Method::Get.conflicts_with(Method::Post));
        assert!(Method::Any.conflicts_with(Method::Get));
        assert!(Method::Delete.conflicts_with(Method::Any));
        assert!(Method::Any.conflicts_with(Method::Any));
    }

    #[test]
    fn test_matches_request() {
        assert!(Method::Get.matches_request("GET"));
        assert!(!Method::Get.matches_request("POST"));
        assert!(!Method::Get.matches_request("get"));
        assert!(Method::Any.matches_request("GET"));
        // ANY also covers methods outside the fixed registration set
        assert!(Method::Any.matches_request("PATCH"));
    }
}
