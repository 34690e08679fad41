#![doc = include_str!("../README.md")]

pub mod about;
pub mod activity;
pub mod agent;
pub mod document;
pub mod query;
pub mod statement;
pub mod verb;

pub use about::About;
pub use activity::{Activity, ActivityDefinition};
pub use agent::{Agent, AgentAccount};
pub use document::{ActivityProfileDocument, AgentProfileDocument, Document, StateDocument};
pub use query::{QueryFormat, StatementsQuery};
pub use statement::{Statement, StatementRef, StatementTarget, StatementsResult};
pub use verb::{LanguageMap, Verb};
