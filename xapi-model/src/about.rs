//! The LRS capability descriptor served at `about`.

use serde::{Deserialize, Serialize};

/// What an LRS says about itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    /// xAPI versions the LRS supports.
    #[serde(default)]
    pub version: Vec<String>,
    /// Vendor extensions, keyed by IRI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl About {
    /// Parse a capability descriptor from its JSON encoding.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
