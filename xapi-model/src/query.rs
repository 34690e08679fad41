//! Filter parameters for statement queries.

use crate::agent::Agent;
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Requested statement rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFormat {
    /// Identifiers only.
    Ids,
    /// Exactly as stored.
    Exact,
    /// Canonicalized per the LRS's language preferences.
    Canonical,
}

impl QueryFormat {
    /// The wire form of the format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryFormat::Ids => "ids",
            QueryFormat::Exact => "exact",
            QueryFormat::Canonical => "canonical",
        }
    }
}

/// Filters for `GET statements`.
///
/// Every field is optional; unset fields contribute no query
/// parameter. The protocol layer treats the resulting parameter map as
/// opaque.
#[derive(Debug, Clone, Default)]
pub struct StatementsQuery {
    /// Match statements whose actor (or object) is this agent.
    pub agent: Option<Agent>,
    /// Match statements with this verb IRI.
    pub verb_id: Option<String>,
    /// Match statements about this activity IRI.
    pub activity_id: Option<String>,
    /// Match statements under this registration.
    pub registration: Option<Uuid>,
    /// Broaden the activity match to related activities.
    pub related_activities: Option<bool>,
    /// Broaden the agent match to related agents.
    pub related_agents: Option<bool>,
    /// Only statements stored at or after this time.
    pub since: Option<DateTime<Utc>>,
    /// Only statements stored at or before this time.
    pub until: Option<DateTime<Utc>>,
    /// Page size cap.
    pub limit: Option<u32>,
    /// Requested rendering.
    pub format: Option<QueryFormat>,
    /// Include attachment payloads.
    pub attachments: Option<bool>,
    /// Ascending stored-time order.
    pub ascending: Option<bool>,
}

impl StatementsQuery {
    /// A query with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The query-parameter encoding of the set filters, in wire order.
    #[must_use]
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(agent) = &self.agent {
            params.push(("agent".to_string(), agent.to_json().to_string()));
        }
        if let Some(verb_id) = &self.verb_id {
            params.push(("verb".to_string(), verb_id.clone()));
        }
        if let Some(activity_id) = &self.activity_id {
            params.push(("activity".to_string(), activity_id.clone()));
        }
        if let Some(registration) = self.registration {
            params.push(("registration".to_string(), registration.to_string()));
        }
        if let Some(related) = self.related_activities {
            params.push(("related_activities".to_string(), related.to_string()));
        }
        if let Some(related) = self.related_agents {
            params.push(("related_agents".to_string(), related.to_string()));
        }
        if let Some(since) = self.since {
            params.push((
                "since".to_string(),
                since.to_rfc3339_opts(SecondsFormat::Millis, true),
            ));
        }
        if let Some(until) = self.until {
            params.push((
                "until".to_string(),
                until.to_rfc3339_opts(SecondsFormat::Millis, true),
            ));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(format) = self.format {
            params.push(("format".to_string(), format.as_str().to_string()));
        }
        if let Some(attachments) = self.attachments {
            params.push(("attachments".to_string(), attachments.to_string()));
        }
        if let Some(ascending) = self.ascending {
            params.push(("ascending".to_string(), ascending.to_string()));
        }
        params
    }
}
