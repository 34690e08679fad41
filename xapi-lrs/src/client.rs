//! The LRS client struct and the operations that don't belong to a
//! resource family.

use crate::error::{LrsError, LrsResult};
use xapi_model::About;
use xapi_protocol::{Endpoint, HttpRequest, HttpResponse, Transport};

/// Client for a remote Learning Record Store.
///
/// Generic over its [`Transport`] backend; the backend is chosen once at
/// construction and every higher layer is oblivious to it. The client
/// holds nothing mutable, so concurrent operations on a shared
/// reference never race.
///
/// # Example
///
/// ```no_run
/// use xapi_lrs::RemoteLrs;
/// use xapi_protocol::Endpoint;
/// use xapi_transport_reqwest::ReqwestTransport;
///
/// let endpoint = Endpoint::parse("https://lrs.example.com/xapi/")
///     .unwrap()
///     .basic_auth("key", "secret");
/// let lrs = RemoteLrs::new(endpoint, ReqwestTransport::new());
/// ```
pub struct RemoteLrs<T> {
    endpoint: Endpoint,
    transport: T,
}

impl<T: Transport> RemoteLrs<T> {
    /// Create a client for the given endpoint over the given backend.
    #[must_use]
    pub fn new(endpoint: Endpoint, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// The endpoint configuration this client was built with.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Run one exchange through the configured backend.
    pub(crate) async fn execute(&self, request: HttpRequest) -> HttpResponse {
        tracing::debug!(
            method = %request.method,
            resource = %request.resource,
            "issuing LRS request"
        );
        self.transport.execute(&self.endpoint, request).await
    }

    /// Ask the LRS what it supports.
    pub async fn about(&self) -> LrsResult<About> {
        let response = self.execute(HttpRequest::get("about")).await;
        if response.status != 200 {
            return Err(LrsError::from_response(response));
        }
        About::parse(&response.body_text()).map_err(|err| LrsError::InvalidResponse(err.to_string()))
    }
}
