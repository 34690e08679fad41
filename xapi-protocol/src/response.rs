//! The normalized response every backend must produce.

use crate::transport::TransportFailure;
use chrono::{DateTime, Utc};

/// A backend response reduced to the one canonical shape.
///
/// Backends differ in how much of a response they let the caller see
/// (some surface non-2xx statuses as errors, some hide header details),
/// so each backend's normalizer maps its native response into this
/// struct. Two cases are distinguished:
///
/// - a response was obtained: `status` is the real HTTP status and
///   `failure` is `None`, even for 4xx/5xx;
/// - no response was obtained: `status` is `0` and `failure` carries the
///   captured [`TransportFailure`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code, or `0` when no response was obtained.
    pub status: u16,
    /// Value of the `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// Body bytes; empty when the response had no body.
    pub content: Vec<u8>,
    /// Value of the `ETag` header, if present.
    pub etag: Option<String>,
    /// Parsed `Last-Modified` header. Absence or an unparseable value
    /// falls back to the time the response was normalized; it is never
    /// an error.
    pub last_modified: DateTime<Utc>,
    /// Captured transport-level failure, when no response was obtained
    /// or the body could not be read.
    pub failure: Option<TransportFailure>,
}

impl HttpResponse {
    /// A response representing "no response at all": status `0`, empty
    /// body, the failure captured.
    #[must_use]
    pub fn from_failure(failure: TransportFailure) -> Self {
        Self {
            status: 0,
            content_type: None,
            content: Vec::new(),
            etag: None,
            last_modified: Utc::now(),
            failure: Some(failure),
        }
    }

    /// Whether any response was obtained from the server.
    #[must_use]
    pub fn is_no_response(&self) -> bool {
        self.status == 0 && self.failure.is_some()
    }

    /// Best-effort text decode of the body (lossy UTF-8).
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// Parse an HTTP date header value (`Last-Modified` and friends).
///
/// Accepts the RFC 7231 / RFC 2822 form servers actually send
/// (`Tue, 15 Nov 1994 12:45:26 GMT`) and RFC 3339 as a fallback.
/// Returns `None` on anything else; callers substitute the current time.
#[must_use]
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
