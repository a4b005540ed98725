//! HTTP response building module
//!
//! `ResponseWriter` is the sink handlers and middleware write into:
//! status and headers first, then a body via `end`. The buffered result
//! converts into a hyper response at the transport boundary.

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Buffered response sink.
///
/// Bodies are raw bytes throughout; `Content-Length` is whatever the
/// writer was told, never recomputed from a text decode.
pub struct ResponseWriter {
    status: u16,
    headers: Vec<(String, String)>,
    body: Bytes,
    ended: bool,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: Bytes::new(),
            ended: false,
        }
    }

    /// Set the response status code.
    pub fn status(&mut self, status: u16) -> &mut Self {
        self.status = status;
        self
    }

    /// Append a header. Later writes of the same name are kept as-is; the
    /// core never deduplicates on behalf of handlers.
    pub fn header(&mut self, name: &str, value: impl ToString) -> &mut Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Write the body and close the response. Writes after the first `end`
    /// are ignored.
    pub fn end(&mut self, body: impl Into<Bytes>) {
        if !self.ended {
            self.body = body.into();
            self.ended = true;
        }
    }

    pub const fn status_code(&self) -> u16 {
        self.status
    }

    /// First header value under the given name, case-insensitive.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    /// Convert into a hyper response for the transport to send.
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let mut builder = Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(Full::new(self.body)).unwrap_or_else(|e| {
            logger::log_error(&format!("failed to build response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
    }
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the routing fallback for an unmatched path: 404, `text/html`,
/// body `Cannot get {path}` with the path substituted verbatim.
pub fn write_404(res: &mut ResponseWriter, path: &str) {
    let body = format!("Cannot get {path}");
    res.status(404);
    res.header("Content-Type", "text/html");
    res.header("Content-Length", body.len());
    res.end(body);
}
