//! Endpoint configuration: base URI, protocol version, credential.

use base64::Engine;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// xAPI protocol versions this client can negotiate.
///
/// Sent on every request as the `X-Experience-API-Version` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Version {
    /// xAPI 1.0.0.
    V100,
    /// xAPI 1.0.1.
    V101,
    /// xAPI 1.0.2.
    V102,
    /// xAPI 1.0.3.
    V103,
}

impl Version {
    /// The most recent version this client speaks.
    #[must_use]
    pub fn latest() -> Self {
        Version::V103
    }

    /// The wire form of the version, e.g. `"1.0.3"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V100 => "1.0.0",
            Version::V101 => "1.0.1",
            Version::V102 => "1.0.2",
            Version::V103 => "1.0.3",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported xAPI version: {0}")]
pub struct UnsupportedVersion(
    /// The rejected version string.
    pub String,
);

impl FromStr for Version {
    type Err = UnsupportedVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.0.0" => Ok(Version::V100),
            "1.0.1" => Ok(Version::V101),
            "1.0.2" => Ok(Version::V102),
            "1.0.3" => Ok(Version::V103),
            other => Err(UnsupportedVersion(other.to_string())),
        }
    }
}

/// Immutable configuration for one LRS endpoint.
///
/// Constructed once per client and shared by every request: the base URI
/// resources are resolved against, the protocol version header value, an
/// optional preformatted `Authorization` credential, and extended
/// key/value parameters merged into every request's query string.
///
/// # Example
///
/// ```
/// use xapi_protocol::Endpoint;
///
/// let endpoint = Endpoint::parse("https://lrs.example.com/xapi/")
///     .unwrap()
///     .basic_auth("key", "secret");
/// assert_eq!(endpoint.protocol_version().as_str(), "1.0.3");
/// ```
#[derive(Debug, Clone)]
pub struct Endpoint {
    base: Url,
    version: Version,
    auth: Option<String>,
    extended: Vec<(String, String)>,
}

impl Endpoint {
    /// Create a configuration for the given base URI with the latest
    /// protocol version and no credential.
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            base,
            version: Version::latest(),
            auth: None,
            extended: Vec::new(),
        }
    }

    /// Parse a base URI string into a configuration.
    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(base)?))
    }

    /// Override the protocol version.
    #[must_use]
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Set a preformatted credential, sent verbatim as `Authorization`.
    ///
    /// Use this for bearer tokens or credentials prepared elsewhere;
    /// for username/password pairs prefer [`Endpoint::basic_auth`].
    #[must_use]
    pub fn auth(mut self, credential: impl Into<String>) -> Self {
        self.auth = Some(credential.into());
        self
    }

    /// Set an HTTP Basic credential from a username/password pair.
    #[must_use]
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
        self.auth(format!("Basic {encoded}"))
    }

    /// Add an extended parameter appended to every request's query string.
    #[must_use]
    pub fn extend(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extended.push((name.into(), value.into()));
        self
    }

    /// The configured base URI.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// The configured protocol version.
    #[must_use]
    pub fn protocol_version(&self) -> Version {
        self.version
    }

    /// The configured credential, if any.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    /// The configured extended parameters.
    #[must_use]
    pub fn extended(&self) -> &[(String, String)] {
        &self.extended
    }

    /// The endpoint's authority (`scheme://host[:port]`, no path).
    ///
    /// Pagination cursors are resolved against this, not against the
    /// base path.
    #[must_use]
    pub fn authority(&self) -> String {
        self.base.origin().ascii_serialization()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_version_is_103() {
        assert_eq!(Version::latest(), Version::V103);
        assert_eq!(Version::latest().to_string(), "1.0.3");
    }

    #[test]
    fn version_round_trips_through_from_str() {
        for version in [Version::V100, Version::V101, Version::V102, Version::V103] {
            assert_eq!(version.as_str().parse::<Version>(), Ok(version));
        }
    }

    #[test]
    fn unknown_version_is_rejected() {
        let err = "0.95".parse::<Version>().unwrap_err();
        assert_eq!(err, UnsupportedVersion("0.95".to_string()));
    }

    #[test]
    fn defaults_are_latest_version_and_no_credential() {
        let endpoint = Endpoint::parse("https://lrs.example.com/xapi/").unwrap();
        assert_eq!(endpoint.protocol_version(), Version::V103);
        assert!(endpoint.credential().is_none());
        assert!(endpoint.extended().is_empty());
    }

    #[test]
    fn basic_auth_encodes_the_pair() {
        let endpoint = Endpoint::parse("https://lrs.example.com/xapi/")
            .unwrap()
            .basic_auth("test", "test");
        // base64("test:test")
        assert_eq!(endpoint.credential(), Some("Basic dGVzdDp0ZXN0"));
    }

    #[test]
    fn auth_stores_credential_verbatim() {
        let endpoint = Endpoint::parse("https://lrs.example.com/xapi/")
            .unwrap()
            .auth("Bearer abc123");
        assert_eq!(endpoint.credential(), Some("Bearer abc123"));
    }

    #[test]
    fn authority_strips_the_base_path() {
        let endpoint = Endpoint::parse("https://lrs.example.com/xapi/").unwrap();
        assert_eq!(endpoint.authority(), "https://lrs.example.com");
    }

    #[test]
    fn authority_keeps_a_nonstandard_port() {
        let endpoint = Endpoint::parse("http://localhost:8000/xapi/").unwrap();
        assert_eq!(endpoint.authority(), "http://localhost:8000");
    }

    #[test]
    fn extend_accumulates_in_order() {
        let endpoint = Endpoint::parse("https://lrs.example.com/xapi/")
            .unwrap()
            .extend("tenant", "acme")
            .extend("trace", "1");
        assert_eq!(
            endpoint.extended(),
            &[
                ("tenant".to_string(), "acme".to_string()),
                ("trace".to_string(), "1".to_string()),
            ]
        );
    }
}
