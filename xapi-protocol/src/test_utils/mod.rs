//! Scriptable transport for testing.
//!
//! Available behind the `test-utils` feature flag. [`MockTransport`]
//! answers from a queue of canned responses and records every
//! descriptor it receives, so protocol tests can assert on the exact
//! requests an operation produced without a network.

use crate::endpoint::Endpoint;
use crate::request::HttpRequest;
use crate::response::HttpResponse;
use crate::transport::Transport;
use chrono::Utc;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// A response with the given status and no body.
#[must_use]
pub fn empty_response(status: u16) -> HttpResponse {
    HttpResponse {
        status,
        content_type: None,
        content: Vec::new(),
        etag: None,
        last_modified: Utc::now(),
        failure: None,
    }
}

/// A JSON response with the given status.
#[must_use]
pub fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        content_type: Some("application/json".to_string()),
        content: body.as_bytes().to_vec(),
        etag: None,
        last_modified: Utc::now(),
        failure: None,
    }
}

/// A 200 response carrying document bytes, content type, and ETag.
#[must_use]
pub fn document_response(body: &[u8], content_type: &str, etag: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        content_type: Some(content_type.to_string()),
        content: body.to_vec(),
        etag: Some(etag.to_string()),
        last_modified: Utc::now(),
        failure: None,
    }
}

/// Transport double: scripted responses, recorded requests.
///
/// Clones share the same queue and record, so a test can keep a handle
/// after moving the transport into a client. An empty queue answers
/// with an empty `200`.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Create a transport with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response to hand out.
    pub fn enqueue(&self, response: HttpResponse) {
        self.inner
            .responses
            .lock()
            .expect("mock transport lock poisoned")
            .push_back(response);
    }

    /// Every descriptor executed so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner
            .requests
            .lock()
            .expect("mock transport lock poisoned")
            .clone()
    }

    /// The most recent descriptor, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().pop()
    }

    /// How many descriptors have been executed.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.inner
            .requests
            .lock()
            .expect("mock transport lock poisoned")
            .len()
    }
}

impl Transport for MockTransport {
    fn execute(
        &self,
        _endpoint: &Endpoint,
        request: HttpRequest,
    ) -> impl Future<Output = HttpResponse> + Send {
        self.inner
            .requests
            .lock()
            .expect("mock transport lock poisoned")
            .push(request);
        let response = self
            .inner
            .responses
            .lock()
            .expect("mock transport lock poisoned")
            .pop_front()
            .unwrap_or_else(|| empty_response(200));
        std::future::ready(response)
    }
}
