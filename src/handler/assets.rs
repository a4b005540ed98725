//! Asset projection module
//!
//! Walks a directory tree at setup time and registers one GET route per
//! regular file, deriving route paths from disk paths. `dir/index.html`
//! is served at the route for `dir` itself; everything else maps 1:1.
//!
//! Eager projection reads content once and the handler serves the cached
//! bytes; lazy projection re-reads the file on every request, so on-disk
//! edits show up without a restart.

use crate::error::{HandlerError, SetupError};
use crate::handler::Handler;
use crate::http::mime;
use crate::http::response::ResponseWriter;
use crate::routing::{Method, RouteTable};
use hyper::body::Bytes;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// When file content is read relative to registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Read once at registration; requests serve the cached bytes.
    Eager,
    /// Read from disk on every request.
    Lazy,
}

impl LoadMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

/// Walk `dir` recursively and register a GET route per file under
/// `route_prefix`. Returns the number of routes registered.
///
/// Registration goes through the same [`RouteTable::register`] application
/// code uses, so a duplicate route aborts the whole walk with
/// [`SetupError::RouteConflict`]; any filesystem failure aborts it with
/// [`SetupError::Filesystem`]. No partial-success skipping.
pub fn project(
    table: &mut RouteTable,
    dir: &Path,
    route_prefix: &str,
    mode: LoadMode,
) -> Result<usize, SetupError> {
    let mut registered = 0;
    walk(table, dir, route_prefix, mode, &mut registered)?;
    Ok(registered)
}

fn walk(
    table: &mut RouteTable,
    dir: &Path,
    route_prefix: &str,
    mode: LoadMode,
    registered: &mut usize,
) -> Result<(), SetupError> {
    let entries = fs::read_dir(dir).map_err(|e| fs_error(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| fs_error(dir, e))?;
        let disk_path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        // metadata() follows symlinks, so a link to a file projects like
        // the file itself
        let meta = fs::metadata(&disk_path).map_err(|e| fs_error(&disk_path, e))?;

        if meta.is_dir() {
            let child_prefix = join_route(route_prefix, &name);
            walk(table, &disk_path, &child_prefix, mode, registered)?;
        } else if meta.is_file() {
            register_file(table, &disk_path, route_prefix, &name, mode)?;
            *registered += 1;
        }
    }
    Ok(())
}

fn register_file(
    table: &mut RouteTable,
    disk_path: &Path,
    route_prefix: &str,
    name: &str,
    mode: LoadMode,
) -> Result<(), SetupError> {
    let (base, extension) = split_extension(name);

    // The sole rewriting rule: dir/index.html serves at the route for dir
    let route = if base == "index" && extension == "html" {
        dir_route(route_prefix)
    } else {
        join_route(route_prefix, name)
    };

    let content_type = mime::content_type(extension);

    let handler: Handler = match mode {
        LoadMode::Eager => {
            let content =
                Bytes::from(fs::read(disk_path).map_err(|e| fs_error(disk_path, e))?);
            Arc::new(move |_req, res| {
                write_asset(res, content_type, content.clone());
                Ok(())
            })
        }
        LoadMode::Lazy => {
            let path = disk_path.to_path_buf();
            Arc::new(move |_req, res| {
                let content = fs::read(&path)
                    .map_err(|e| -> HandlerError { Box::new(fs_error(&path, e)) })?;
                write_asset(res, content_type, Bytes::from(content));
                Ok(())
            })
        }
    };

    table.register(route, Method::Get, handler)
}

fn write_asset(res: &mut ResponseWriter, content_type: &str, content: Bytes) {
    res.status(200);
    res.header("Content-Type", content_type);
    res.header("Content-Length", content.len());
    res.end(content);
}

/// Split a filename on its last `.` into (base, extension).
/// A dotless name yields an empty extension.
fn split_extension(name: &str) -> (&str, &str) {
    name.rsplit_once('.').unwrap_or((name, ""))
}

/// Join a route prefix and an entry name with exactly one `/`.
/// Route paths always use forward slashes regardless of OS separator.
fn join_route(prefix: &str, name: &str) -> String {
    format!("{}/{name}", prefix.trim_end_matches('/'))
}

/// Route path for a directory itself, used by the index.html rewrite.
fn dir_route(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

fn fs_error(path: &Path, source: std::io::Error) -> SetupError {
    SetupError::Filesystem {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::ServerRequest;
    use std::path::PathBuf;

    /// Build a scratch tree under the OS temp dir, removed on drop.
    struct TempTree {
        root: PathBuf,
    }

    impl TempTree {
        fn new(tag: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "routeshell-assets-{tag}-{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        fn write(&self, rel: &str, content: &[u8]) {
            let path = self.root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
    }

    impl Drop for TempTree {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    fn serve(table: &RouteTable, path: &str) -> ResponseWriter {
        let req = ServerRequest::new("GET", path);
        let mut res = ResponseWriter::new();
        let handler = table
            .lookup(path, "GET")
            .unwrap_or_else(|| panic!("no route at {path}"));
        handler(&req, &mut res).unwrap();
        res
    }

    #[test]
    fn test_route_layout() {
        let tree = TempTree::new("layout");
        tree.write("a.txt", b"alpha");
        tree.write("sub/b.png", b"\x89PNG");
        tree.write("sub/index.html", b"<h1>sub</h1>");

        let mut table = RouteTable::new();
        let count = project(&mut table, &tree.root, "/assets", LoadMode::Eager).unwrap();
        assert_eq!(count, 3);

        assert!(table.lookup("/assets/a.txt", "GET").is_some());
        assert!(table.lookup("/assets/sub/b.png", "GET").is_some());
        // index.html is rewritten to its directory's route
        assert!(table.lookup("/assets/sub", "GET").is_some());
        assert!(table.lookup("/assets/sub/index.html", "GET").is_none());
        // GET only
        assert!(table.lookup("/assets/a.txt", "POST").is_none());
    }

    #[test]
    fn test_root_index_served_at_prefix() {
        let tree = TempTree::new("rootindex");
        tree.write("index.html", b"<h1>home</h1>");

        let mut table = RouteTable::new();
        project(&mut table, &tree.root, "/", LoadMode::Eager).unwrap();

        let res = serve(&table, "/");
        assert_eq!(res.body(), b"<h1>home</h1>");
        assert_eq!(res.header_value("Content-Type"), Some("text/html"));
    }

    #[test]
    fn test_served_response_shape() {
        let tree = TempTree::new("shape");
        tree.write("data.json", br#"{"k":1}"#);

        let mut table = RouteTable::new();
        project(&mut table, &tree.root, "/files", LoadMode::Eager).unwrap();

        let res = serve(&table, "/files/data.json");
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header_value("Content-Type"), Some("application/json"));
        assert_eq!(res.header_value("Content-Length"), Some("7"));
        assert_eq!(res.body(), br#"{"k":1}"#);
    }

    #[test]
    fn test_unmapped_extension_gets_fallback() {
        let tree = TempTree::new("unmapped");
        tree.write("notes.unknownext", b"scribbles");

        let mut table = RouteTable::new();
        project(&mut table, &tree.root, "/", LoadMode::Eager).unwrap();

        let res = serve(&table, "/notes.unknownext");
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header_value("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn test_eager_serves_registration_time_content() {
        let tree = TempTree::new("eager");
        tree.write("page.txt", b"old");

        let mut table = RouteTable::new();
        project(&mut table, &tree.root, "/", LoadMode::Eager).unwrap();
        tree.write("page.txt", b"new");

        assert_eq!(serve(&table, "/page.txt").body(), b"old");
    }

    #[test]
    fn test_lazy_reflects_disk_edits() {
        let tree = TempTree::new("lazy");
        tree.write("page.txt", b"old");

        let mut table = RouteTable::new();
        project(&mut table, &tree.root, "/", LoadMode::Lazy).unwrap();
        assert_eq!(serve(&table, "/page.txt").body(), b"old");

        tree.write("page.txt", b"new");
        assert_eq!(serve(&table, "/page.txt").body(), b"new");
    }

    #[test]
    fn test_lazy_read_failure_propagates() {
        let tree = TempTree::new("vanish");
        tree.write("gone.txt", b"soon");

        let mut table = RouteTable::new();
        project(&mut table, &tree.root, "/", LoadMode::Lazy).unwrap();
        fs::remove_file(tree.root.join("gone.txt")).unwrap();

        let req = ServerRequest::new("GET", "/gone.txt");
        let mut res = ResponseWriter::new();
        let handler = table.lookup("/gone.txt", "GET").unwrap();
        assert!(handler(&req, &mut res).is_err());
    }

    #[test]
    fn test_missing_directory_aborts() {
        let mut table = RouteTable::new();
        let missing = std::env::temp_dir().join("routeshell-assets-does-not-exist");
        let result = project(&mut table, &missing, "/", LoadMode::Eager);
        assert!(matches!(result, Err(SetupError::Filesystem { .. })));
    }

    #[test]
    fn test_conflict_aborts_walk() {
        let tree = TempTree::new("conflict");
        tree.write("a.txt", b"x");

        let mut table = RouteTable::new();
        // Pre-register the route the walk will derive
        table
            .register("/a.txt", Method::Get, Arc::new(|_req, _res| Ok(())))
            .unwrap();

        let result = project(&mut table, &tree.root, "/", LoadMode::Eager);
        assert!(matches!(
            result,
            Err(SetupError::RouteConflict { path }) if path == "/a.txt"
        ));
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("index.html"), ("index", "html"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_extension("Makefile"), ("Makefile", ""));
        assert_eq!(split_extension(".gitignore"), ("", "gitignore"));
    }

    #[test]
    fn test_route_joining() {
        assert_eq!(join_route("/assets", "a.txt"), "/assets/a.txt");
        assert_eq!(join_route("/", "a.txt"), "/a.txt");
        assert_eq!(join_route("/assets/", "sub"), "/assets/sub");
        assert_eq!(dir_route("/assets/sub"), "/assets/sub");
        assert_eq!(dir_route("/"), "/");
    }
}
