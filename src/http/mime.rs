//! MIME type resolution module
//!
//! Maps file extensions to Content-Type strings via a fixed table.
//! Matching is case-sensitive and exact, as split from the filename.

use crate::logger;

/// Content-Type served for extensions outside the table.
pub const FALLBACK: &str = "text/plain";

/// Look up the MIME type for a file extension.
///
/// # Examples
/// ```
/// use routeshell::http::mime;
/// assert_eq!(mime::lookup("png"), Some("image/png"));
/// assert_eq!(mime::lookup("unknownext"), None);
/// ```
pub fn lookup(extension: &str) -> Option<&'static str> {
    let mapped = match extension {
        // Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "txt" => "text/plain",
        "xml" => "application/xml",
        "json" => "application/json",

        // Images
        "svg" => "image/svg+xml",
        "apng" => "image/apng",
        "png" => "image/png",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "ico" => "image/x-icon",

        // Video
        "mp4" => "video/mp4",
        "mpeg" => "video/mpeg",
        "ogv" => "video/ogg",

        // Audio
        "mp3" => "audio/mpeg",
        "oga" => "audio/ogg",

        // Archives
        "zip" => "application/zip",
        "7z" => "application/x-7z-compressed",
        "rar" => "application/vnd.rar",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",

        // Documents and scripts
        "php" => "application/x-httpd-php",
        "pdf" => "application/pdf",
        "sh" => "application/x-sh",

        // Fonts
        "otf" => "font/otf",
        "ttf" => "font/ttf",

        _ => return None,
    };
    Some(mapped)
}

/// Resolve an extension to a Content-Type, falling back to [`FALLBACK`]
/// for unmapped extensions with a single warning naming the extension.
pub fn content_type(extension: &str) -> &'static str {
    match lookup(extension) {
        Some(mapped) => mapped,
        None => {
            logger::log_warning(&format!(
                "no MIME mapping for extension '{extension}', serving as {FALLBACK}"
            ));
            FALLBACK
        }
    }
}
