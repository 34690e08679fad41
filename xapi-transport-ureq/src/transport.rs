//! The ureq-backed transport and its response normalizer.

use chrono::Utc;
use std::future::Future;
use std::io::Read;
use std::time::Duration;
use xapi_protocol::{
    Endpoint, HttpRequest, HttpResponse, Method, Transport, TransportFailure, parse_http_date,
    wire,
};

/// [`Transport`] backend over a blocking [`ureq::Agent`], bridged onto
/// tokio's blocking pool.
///
/// ureq signals non-2xx statuses as `ureq::Error::Status`, a response
/// dressed up as an error. The normalizer unwraps those back into plain
/// status codes so the contract ("a response is a response, whatever
/// its status") holds for this backend too.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a backend with a default agent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: ureq::agent(),
        }
    }

    /// Rebuild the agent with an overall per-request timeout.
    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            agent: ureq::builder().timeout(timeout).build(),
        }
    }

    /// Create a backend over an already-configured agent.
    #[must_use]
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(
        &self,
        endpoint: &Endpoint,
        request: HttpRequest,
    ) -> impl Future<Output = HttpResponse> + Send {
        let agent = self.agent.clone();
        let resolved = wire::resolve_url(endpoint, &request);
        let headers = wire::assemble_headers(endpoint, &request);

        async move {
            let url = match resolved {
                Ok(url) => url,
                Err(failure) => return HttpResponse::from_failure(failure),
            };
            tracing::debug!(method = %request.method, url = %url, "sending LRS request over ureq");

            let method = request.method;
            let content = request.content;
            let outcome = tokio::task::spawn_blocking(move || {
                run_blocking(&agent, method, url.as_str(), &headers, content.as_deref())
            })
            .await;

            match outcome {
                Ok(response) => response,
                Err(err) => HttpResponse::from_failure(TransportFailure::NoResponse(format!(
                    "blocking task failed: {err}"
                ))),
            }
        }
    }
}

fn run_blocking(
    agent: &ureq::Agent,
    method: Method,
    url: &str,
    headers: &[(String, String)],
    content: Option<&[u8]>,
) -> HttpResponse {
    let mut call = agent.request(method.as_str(), url);
    for (name, value) in headers {
        call = call.set(name, value);
    }

    let result = match content {
        Some(bytes) => call.send_bytes(bytes),
        None => call.call(),
    };

    match result {
        Ok(response) => normalize(response),
        // A response arrived; its status just wasn't 2xx.
        Err(ureq::Error::Status(_, response)) => normalize(response),
        Err(ureq::Error::Transport(transport)) => {
            HttpResponse::from_failure(TransportFailure::NoResponse(transport.to_string()))
        }
    }
}

/// Reduce a [`ureq::Response`] to the normalized shape.
fn normalize(response: ureq::Response) -> HttpResponse {
    let status = response.status();
    let content_type = response.header("Content-Type").map(str::to_string);
    let etag = response.header("ETag").map(str::to_string);
    let last_modified = response
        .header("Last-Modified")
        .and_then(parse_http_date)
        .unwrap_or_else(Utc::now);

    let mut content = Vec::new();
    let failure = match response.into_reader().read_to_end(&mut content) {
        Ok(_) => None,
        Err(err) => Some(TransportFailure::NoResponse(format!(
            "reading response body: {err}"
        ))),
    };

    HttpResponse {
        status,
        content_type,
        content,
        etag,
        last_modified,
        failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unresolvable_descriptor_is_an_invalid_url_failure() {
        let endpoint = Endpoint::parse("https://lrs.example.com/xapi/").unwrap();
        let transport = UreqTransport::new();

        let response = transport
            .execute(&endpoint, HttpRequest::get("http://"))
            .await;

        assert_eq!(response.status, 0);
        assert!(matches!(
            response.failure,
            Some(TransportFailure::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn refused_connection_is_a_no_response_failure() {
        // port 9 (discard) on localhost is almost certainly closed
        let endpoint = Endpoint::parse("http://127.0.0.1:9/xapi/").unwrap();
        let transport = UreqTransport::new().timeout(Duration::from_millis(500));

        let response = transport
            .execute(&endpoint, HttpRequest::get("about"))
            .await;

        assert!(response.is_no_response());
        assert!(matches!(
            response.failure,
            Some(TransportFailure::NoResponse(_))
        ));
    }
}
