//! Verbs and the language maps that label them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// IRI of the reserved verb that voids a previously recorded statement.
const VOIDED: &str = "http://adlnet.gov/expapi/verbs/voided";

/// Locale → display text, ordered for stable serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMap(pub BTreeMap<String, String>);

impl LanguageMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with a single entry.
    #[must_use]
    pub fn with(locale: impl Into<String>, text: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(locale, text);
        map
    }

    /// Insert or replace the text for a locale.
    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.0.insert(locale.into(), text.into());
    }

    /// The text for a locale, if present.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The action of a statement, identified by IRI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    /// Verb IRI, e.g. `http://adlnet.gov/expapi/verbs/completed`.
    pub id: String,
    /// Human-readable labels by locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<LanguageMap>,
}

impl Verb {
    /// A verb with the given IRI and no display map.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: None,
        }
    }

    /// Add a display entry for a locale.
    #[must_use]
    pub fn display(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.display
            .get_or_insert_with(LanguageMap::new)
            .insert(locale, text);
        self
    }

    /// The reserved voiding verb, displayed as `"voided"` under `en-US`.
    #[must_use]
    pub fn voided() -> Self {
        Verb::new(VOIDED).display("en-US", "voided")
    }

    /// Whether this is the reserved voiding verb.
    #[must_use]
    pub fn is_voided(&self) -> bool {
        self.id == VOIDED
    }
}
