#![doc = include_str!("../README.md")]

pub mod client;
pub mod error;

mod documents;
mod profiles;
mod state;
mod statements;

pub use client::RemoteLrs;
pub use error::{LrsError, LrsResult};

// Re-export the types that appear in operation signatures
pub use xapi_model::{
    About, Activity, ActivityProfileDocument, Agent, AgentProfileDocument, Document,
    StateDocument, Statement, StatementsQuery, StatementsResult,
};
pub use xapi_protocol::{Endpoint, Transport, TransportFailure, Version};
