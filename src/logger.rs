//! Logger module
//!
//! Thread-safe logging to stdout/stderr or append-only files. The writer
//! is a process-wide singleton; before `init` runs, messages fall through
//! to plain stdout/stderr so setup-time diagnostics are never lost.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

/// Thread-safe log writer with separate access and error targets.
struct LogWriter {
    access: LogTarget,
    error: LogTarget,
}

impl LogWriter {
    fn new(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        let access = match access_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stdout,
        };
        let error = match error_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stderr,
        };
        Ok(Self { access, error })
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => println!("{message}"),
        LogTarget::Stderr => eprintln!("{message}"),
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{message}");
            }
        }
    }
}

/// Initialize the global log writer.
///
/// Should be called once at application startup, before serving begins.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(access_log_file, error_log_file)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(io::ErrorKind::AlreadyExists, "log writer already initialized")
    })
}

fn write_info(message: &str) {
    match LOG_WRITER.get() {
        Some(writer) => write_to_target(&writer.access, message),
        None => println!("{message}"),
    }
}

fn write_err(message: &str) {
    match LOG_WRITER.get() {
        Some(writer) => write_to_target(&writer.error, message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr) {
    write_info("======================================");
    write_info("Server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info("======================================");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_err(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

/// Timestamped access line for one inbound request.
pub fn log_request(method: &str, path: &str) {
    write_info(&format!(
        "[{}] {method} {path}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    ));
}

pub fn log_response(body_bytes: usize) {
    write_info(&format!("[Response] {body_bytes} bytes"));
}

pub fn log_asset_routes(count: usize, dir: &str, mode: &str) {
    write_info(&format!(
        "[Assets] Registered {count} route(s) from '{dir}' ({mode})"
    ));
}

pub fn log_warning(message: &str) {
    write_err(&format!("[WARN] {message}"));
}

pub fn log_error(message: &str) {
    write_err(&format!("[ERROR] {message}"));
}
