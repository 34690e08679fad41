//! The reqwest-backed transport and its response normalizer.

use chrono::Utc;
use std::future::Future;
use xapi_protocol::{
    Endpoint, HttpRequest, HttpResponse, Method, Transport, TransportFailure, parse_http_date,
    wire,
};

/// [`Transport`] backend over a shared [`reqwest::Client`].
///
/// reqwest already reports non-2xx statuses as plain responses, so
/// normalization here is mostly header extraction; only connection-level
/// errors and failed body reads become captured failures.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a backend with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a backend over an already-configured client.
    ///
    /// This is where timeouts, proxies, and TLS settings come from;
    /// the protocol layer does not interpret them.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        endpoint: &Endpoint,
        request: HttpRequest,
    ) -> impl Future<Output = HttpResponse> + Send {
        let client = self.client.clone();
        let resolved = wire::resolve_url(endpoint, &request);
        let headers = wire::assemble_headers(endpoint, &request);

        async move {
            let url = match resolved {
                Ok(url) => url,
                Err(failure) => return HttpResponse::from_failure(failure),
            };
            tracing::debug!(method = %request.method, url = %url, "sending LRS request over reqwest");

            let mut builder = client.request(map_method(request.method), url);
            for (name, value) in &headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(content) = request.content {
                builder = builder.body(content);
            }

            match builder.send().await {
                Ok(response) => normalize(response).await,
                Err(err) => {
                    HttpResponse::from_failure(TransportFailure::NoResponse(err.to_string()))
                }
            }
        }
    }
}

fn map_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Reduce a [`reqwest::Response`] to the normalized shape.
async fn normalize(response: reqwest::Response) -> HttpResponse {
    let status = response.status().as_u16();
    let content_type = header_string(&response, reqwest::header::CONTENT_TYPE);
    let etag = header_string(&response, reqwest::header::ETAG);
    let last_modified = header_string(&response, reqwest::header::LAST_MODIFIED)
        .as_deref()
        .and_then(parse_http_date)
        .unwrap_or_else(Utc::now);

    match response.bytes().await {
        Ok(bytes) => HttpResponse {
            status,
            content_type,
            content: bytes.to_vec(),
            etag,
            last_modified,
            failure: None,
        },
        // Response started but the body never finished arriving.
        Err(err) => HttpResponse {
            status,
            content_type,
            content: Vec::new(),
            etag,
            last_modified,
            failure: Some(TransportFailure::NoResponse(format!(
                "reading response body: {err}"
            ))),
        },
    }
}

fn header_string(response: &reqwest::Response, name: reqwest::header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
