//! The transport contract backends implement.

use crate::endpoint::Endpoint;
use crate::request::HttpRequest;
use crate::response::HttpResponse;
use std::future::Future;
use thiserror::Error;

/// Failures at the transport level, below any HTTP status code.
///
/// A timeout is not a distinct kind: resource protocols treat it like
/// any other [`TransportFailure::NoResponse`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// The descriptor could not be resolved to a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// No response was obtained: connection, DNS, timeout, or a body
    /// read that failed partway.
    #[error("no response from server: {0}")]
    NoResponse(String),
}

/// One HTTP exchange against a configured endpoint.
///
/// This trait uses RPITIT and is NOT object-safe. That's intentional:
/// clients are generic over their backend (`RemoteLrs<T: Transport>`),
/// and the backend is chosen once at construction.
///
/// # Contract
///
/// `execute` must never fail at the `Result` level. Ordinary HTTP
/// failures (4xx/5xx) come back as an [`HttpResponse`] with the real
/// status; connection-level failures come back with status `0` and the
/// failure captured. Every implementation performs wire assembly through
/// [`crate::wire`] so URL resolution and header rules exist once.
pub trait Transport: Send + Sync {
    /// Execute the described exchange and normalize whatever happens.
    fn execute(
        &self,
        endpoint: &Endpoint,
        request: HttpRequest,
    ) -> impl Future<Output = HttpResponse> + Send;
}
