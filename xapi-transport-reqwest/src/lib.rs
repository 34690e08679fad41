#![doc = include_str!("../README.md")]

mod transport;

pub use transport::ReqwestTransport;

// Re-export the contract types for convenience
pub use xapi_protocol::{Endpoint, HttpRequest, HttpResponse, Transport, TransportFailure};
