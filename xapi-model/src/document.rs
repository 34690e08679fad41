//! Key-addressed documents for the State and Profile resources.

use crate::activity::Activity;
use crate::agent::Agent;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An opaque byte-blob document with its server-stamped metadata.
///
/// A successful retrieve fills `etag` and `updated` from the response;
/// sending the document back with its `etag` intact expresses a
/// conditional write (`If-Match`). A document that has never been
/// retrieved has no etag, which on save means create-only
/// (`If-None-Match: *`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Raw content bytes.
    pub content: Vec<u8>,
    /// Content type; `application/octet-stream` on the wire when unset.
    pub content_type: Option<String>,
    /// Server version token for optimistic concurrency.
    pub etag: Option<String>,
    /// Server `Last-Modified` stamp from the most recent retrieve.
    pub updated: Option<DateTime<Utc>>,
}

impl Document {
    /// A document with the given content and content type.
    #[must_use]
    pub fn new(content: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            content,
            content_type: Some(content_type.into()),
            etag: None,
            updated: None,
        }
    }

    /// A JSON document.
    #[must_use]
    pub fn json(content: impl Into<Vec<u8>>) -> Self {
        Self::new(content.into(), "application/json")
    }

    /// Best-effort text decode of the content (lossy UTF-8).
    #[must_use]
    pub fn content_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// A state document, scoped to activity + agent (+ registration).
#[derive(Debug, Clone, PartialEq)]
pub struct StateDocument {
    /// State id within the scope.
    pub id: String,
    /// Activity the state belongs to.
    pub activity: Activity,
    /// Agent the state belongs to.
    pub agent: Agent,
    /// Optional registration narrowing the scope.
    pub registration: Option<Uuid>,
    /// The document itself.
    pub document: Document,
}

impl StateDocument {
    /// A state document with empty content and no registration.
    #[must_use]
    pub fn new(id: impl Into<String>, activity: Activity, agent: Agent) -> Self {
        Self {
            id: id.into(),
            activity,
            agent,
            registration: None,
            document: Document::default(),
        }
    }
}

/// A profile document scoped to an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityProfileDocument {
    /// Profile id within the activity's scope.
    pub id: String,
    /// Activity the profile belongs to.
    pub activity: Activity,
    /// The document itself.
    pub document: Document,
}

impl ActivityProfileDocument {
    /// A profile document with empty content.
    #[must_use]
    pub fn new(id: impl Into<String>, activity: Activity) -> Self {
        Self {
            id: id.into(),
            activity,
            document: Document::default(),
        }
    }
}

/// A profile document scoped to an agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfileDocument {
    /// Profile id within the agent's scope.
    pub id: String,
    /// Agent the profile belongs to.
    pub agent: Agent,
    /// The document itself.
    pub document: Document,
}

impl AgentProfileDocument {
    /// A profile document with empty content.
    #[must_use]
    pub fn new(id: impl Into<String>, agent: Agent) -> Self {
        Self {
            id: id.into(),
            agent,
            document: Document::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_document_has_no_etag() {
        let document = Document::json(r#"{"score": 7}"#);
        assert!(document.etag.is_none());
        assert!(document.updated.is_none());
        assert_eq!(document.content_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn content_text_decodes_the_bytes() {
        let document = Document::new(b"hello".to_vec(), "text/plain");
        assert_eq!(document.content_text(), "hello");
    }

    #[test]
    fn state_document_starts_empty() {
        let state = StateDocument::new(
            "bookmark",
            Activity::new("http://example.com/course/1"),
            Agent::mbox("mailto:t@example.com"),
        );
        assert!(state.registration.is_none());
        assert!(state.document.content.is_empty());
    }
}
