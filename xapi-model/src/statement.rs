//! Statements and the paginated results a query returns.

use crate::activity::Activity;
use crate::agent::Agent;
use crate::verb::Verb;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A reference to another statement, used as a statement's object when
/// voiding or commenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRef {
    /// Id of the referenced statement.
    pub id: Uuid,
}

impl StatementRef {
    /// Reference the statement with the given id.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// The object of a statement, discriminated by `objectType` on the wire.
///
/// Serialization is internally tagged; deserialization additionally
/// accepts an absent `objectType`, which the wire format defines to
/// mean an activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "objectType")]
pub enum StatementTarget {
    /// An activity (the common case).
    Activity(Activity),
    /// Another agent.
    Agent(Agent),
    /// Another statement.
    StatementRef(StatementRef),
}

impl<'de> Deserialize<'de> for StatementTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let object_type = value
            .get("objectType")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Activity")
            .to_string();
        match object_type.as_str() {
            "Activity" => serde_json::from_value(value)
                .map(StatementTarget::Activity)
                .map_err(D::Error::custom),
            "Agent" => serde_json::from_value(value)
                .map(StatementTarget::Agent)
                .map_err(D::Error::custom),
            "StatementRef" => serde_json::from_value(value)
                .map(StatementTarget::StatementRef)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "unsupported statement object type: {other}"
            ))),
        }
    }
}

impl From<Activity> for StatementTarget {
    fn from(activity: Activity) -> Self {
        StatementTarget::Activity(activity)
    }
}

impl From<Agent> for StatementTarget {
    fn from(agent: Agent) -> Self {
        StatementTarget::Agent(agent)
    }
}

impl From<StatementRef> for StatementTarget {
    fn from(reference: StatementRef) -> Self {
        StatementTarget::StatementRef(reference)
    }
}

/// One "actor verbed object" record.
///
/// The id is absent until assigned, either by the caller before saving
/// or by the LRS on save. Once assigned it never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement id; absent until assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Who did it.
    pub actor: Agent,
    /// What they did.
    pub verb: Verb,
    /// What they did it to.
    #[serde(rename = "object")]
    pub target: StatementTarget,
    /// When it happened, as reported by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Statement {
    /// A statement with no id and no timestamp.
    #[must_use]
    pub fn new(actor: Agent, verb: Verb, target: impl Into<StatementTarget>) -> Self {
        Self {
            id: None,
            actor,
            verb,
            target: target.into(),
            timestamp: None,
        }
    }

    /// Parse a statement from its JSON encoding.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One page of a statement query, with an optional continuation cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementsResult {
    /// The statements on this page.
    #[serde(default)]
    pub statements: Vec<Statement>,
    /// Opaque cursor for the next page; absent or empty at the end of
    /// the result set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more: Option<String>,
}

impl StatementsResult {
    /// A single-page result with no continuation.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            more: None,
        }
    }

    /// The continuation cursor, treating an empty string as absent.
    #[must_use]
    pub fn more_cursor(&self) -> Option<&str> {
        self.more.as_deref().filter(|cursor| !cursor.is_empty())
    }

    /// Parse a result page from its JSON encoding.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
