#![doc = include_str!("../README.md")]

mod transport;

pub use transport::UreqTransport;

// Re-export the contract types for convenience
pub use xapi_protocol::{Endpoint, HttpRequest, HttpResponse, Transport, TransportFailure};
