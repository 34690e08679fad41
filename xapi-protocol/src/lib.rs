//! # xapi-protocol — transport contract for xAPI LRS clients
//!
//! This crate defines the boundary between the resource protocols of an
//! xAPI client (statements, state, profiles) and the HTTP stack that
//! actually carries them.
//!
//! | Piece | Type | What it does |
//! |-------|------|--------------|
//! | Endpoint | [`Endpoint`], [`Version`] | Immutable per-client configuration: base URI, protocol version, credential, extended parameters |
//! | Descriptor | [`HttpRequest`], [`Method`] | One semantic request: method, resource, query, headers, body |
//! | Normalized response | [`HttpResponse`] | The one shape every backend must produce |
//! | Contract | [`Transport`], [`TransportFailure`] | `execute(descriptor) -> normalized response`, never a panic or a thrown HTTP error |
//! | Wire assembly | [`wire`] | URL resolution, query encoding, header assembly shared by all backends |
//!
//! ## Design Principle
//!
//! [`Transport::execute`] never fails at the `Result` level. A 404, a 500,
//! a refused connection and a DNS failure all come back as an
//! [`HttpResponse`]: either with a real status code, or with status `0`
//! and a captured [`TransportFailure`]. Resource protocols branch on one
//! shape regardless of which backend produced it, which is what makes
//! backends swappable at construction time.
//!
//! ## Test Utilities
//!
//! The `test-utils` feature exports [`test_utils::MockTransport`], a
//! scriptable transport that records every descriptor it receives.

#![deny(missing_docs)]

pub mod endpoint;
pub mod request;
pub mod response;
pub mod transport;
pub mod wire;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use endpoint::{Endpoint, UnsupportedVersion, Version};
pub use request::{HttpRequest, Method};
pub use response::{HttpResponse, parse_http_date};
pub use transport::{Transport, TransportFailure};
