#![deny(missing_docs)]
//! # xapi — umbrella crate
//!
//! Provides a single import surface for the xAPI LRS client. Re-exports
//! the protocol contract, the domain model, the client, and the
//! transport backends behind feature flags, plus a `prelude` for the
//! happy path.

pub use xapi_lrs;
pub use xapi_model;
pub use xapi_protocol;
#[cfg(feature = "transport-reqwest")]
pub use xapi_transport_reqwest;
#[cfg(feature = "transport-ureq")]
pub use xapi_transport_ureq;

/// Happy-path imports for talking to an LRS.
pub mod prelude {
    pub use xapi_lrs::{LrsError, LrsResult, RemoteLrs};
    pub use xapi_model::{
        About, Activity, ActivityProfileDocument, Agent, AgentProfileDocument, Document,
        StateDocument, Statement, StatementRef, StatementTarget, StatementsQuery,
        StatementsResult, Verb,
    };
    pub use xapi_protocol::{Endpoint, Transport, TransportFailure, Version};

    #[cfg(feature = "transport-reqwest")]
    pub use xapi_transport_reqwest::ReqwestTransport;

    #[cfg(feature = "transport-ureq")]
    pub use xapi_transport_ureq::UreqTransport;
}
