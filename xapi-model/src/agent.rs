//! Agents — the "actor" of a statement and the owner of profiles.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An identified actor.
///
/// Exactly one of the inverse functional identifiers (`mbox`,
/// `mbox_sha1sum`, `openid`, `account`) should be set; the LRS rejects
/// agents without one. Field names follow the xAPI wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Display name, not an identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `mailto:` IRI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbox: Option<String>,
    /// SHA1 hash of a `mailto:` IRI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbox_sha1sum: Option<String>,
    /// OpenID URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openid: Option<String>,
    /// Account on some system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AgentAccount>,
}

impl Agent {
    /// An agent identified by a `mailto:` IRI.
    #[must_use]
    pub fn mbox(address: impl Into<String>) -> Self {
        Self {
            mbox: Some(address.into()),
            ..Self::default()
        }
    }

    /// An agent identified by an account on some system.
    #[must_use]
    pub fn account(home_page: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            account: Some(AgentAccount {
                home_page: home_page.into(),
                name: name.into(),
            }),
            ..Self::default()
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The JSON encoding used wherever an agent identifies a resource
    /// (`agent` query parameters), including the `objectType`
    /// discriminator the wire format requires there.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("objectType".to_string(), Value::String("Agent".to_string()));
        if let Some(name) = &self.name {
            map.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(mbox) = &self.mbox {
            map.insert("mbox".to_string(), Value::String(mbox.clone()));
        }
        if let Some(sha1) = &self.mbox_sha1sum {
            map.insert("mbox_sha1sum".to_string(), Value::String(sha1.clone()));
        }
        if let Some(openid) = &self.openid {
            map.insert("openid".to_string(), Value::String(openid.clone()));
        }
        if let Some(account) = &self.account {
            map.insert(
                "account".to_string(),
                serde_json::json!({
                    "homePage": account.home_page,
                    "name": account.name,
                }),
            );
        }
        Value::Object(map)
    }
}

/// An account on a system, as an agent identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAccount {
    /// Home page of the system the account lives on.
    #[serde(rename = "homePage")]
    pub home_page: String,
    /// Account name unique within that system.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mbox_constructor_sets_only_the_mbox() {
        let agent = Agent::mbox("mailto:t@example.com");
        assert_eq!(agent.mbox.as_deref(), Some("mailto:t@example.com"));
        assert!(agent.name.is_none());
        assert!(agent.account.is_none());
    }

    #[test]
    fn to_json_carries_the_object_type() {
        let json = Agent::mbox("mailto:t@example.com").named("Tester").to_json();
        assert_eq!(json["objectType"], "Agent");
        assert_eq!(json["mbox"], "mailto:t@example.com");
        assert_eq!(json["name"], "Tester");
        assert_eq!(json.get("openid"), None);
    }

    #[test]
    fn to_json_encodes_accounts() {
        let json = Agent::account("https://id.example.com", "learner-7").to_json();
        assert_eq!(json["account"]["homePage"], "https://id.example.com");
        assert_eq!(json["account"]["name"], "learner-7");
    }

    #[test]
    fn plain_serialization_omits_absent_fields() {
        let json = serde_json::to_value(Agent::mbox("mailto:t@example.com")).unwrap();
        assert_eq!(json, serde_json::json!({"mbox": "mailto:t@example.com"}));
    }

    #[test]
    fn deserialization_tolerates_an_object_type_key() {
        let agent: Agent = serde_json::from_str(
            r#"{"objectType":"Agent","mbox":"mailto:t@example.com","name":"Tester"}"#,
        )
        .unwrap();
        assert_eq!(agent.mbox.as_deref(), Some("mailto:t@example.com"));
        assert_eq!(agent.name.as_deref(), Some("Tester"));
    }
}
