//! Wire-level request assembly shared by all transport backends.
//!
//! URL resolution, query-parameter encoding, and header assembly live
//! here so every backend produces identical requests from the same
//! descriptor.

use crate::endpoint::Endpoint;
use crate::request::HttpRequest;
use crate::transport::TransportFailure;
use url::Url;

/// Content type used when a descriptor does not specify one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Resolve a descriptor to the URL to request.
///
/// A resource that already denotes an absolute URL (leading `http`,
/// ASCII case-insensitive) is used as-is; pagination continuation
/// links arrive that way. Anything else is joined to the endpoint base
/// with exactly one separating slash. Extended endpoint parameters and
/// the descriptor's query parameters are percent-encoded and appended,
/// in that order, only when any exist.
pub fn resolve_url(endpoint: &Endpoint, request: &HttpRequest) -> Result<Url, TransportFailure> {
    let resource = &request.resource;
    let absolute = resource
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"));
    let mut target = if absolute {
        resource.clone()
    } else {
        let base = endpoint.base().as_str();
        if base.ends_with('/') || resource.starts_with('/') {
            format!("{base}{resource}")
        } else {
            format!("{base}/{resource}")
        }
    };

    let mut encoder = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in endpoint.extended().iter().chain(request.query.iter()) {
        encoder.append_pair(name, value);
    }
    let query = encoder.finish();
    if !query.is_empty() {
        target.push(if target.contains('?') { '&' } else { '?' });
        target.push_str(&query);
    }

    Url::parse(&target).map_err(|err| TransportFailure::InvalidUrl(format!("{target}: {err}")))
}

/// Assemble the headers for a descriptor.
///
/// Every request carries the protocol-version header and, when a
/// credential is configured, `Authorization`. Caller headers follow,
/// then `Content-Type`, defaulting to [`DEFAULT_CONTENT_TYPE`].
#[must_use]
pub fn assemble_headers(endpoint: &Endpoint, request: &HttpRequest) -> Vec<(String, String)> {
    let mut headers = Vec::with_capacity(request.headers.len() + 3);
    headers.push((
        "X-Experience-API-Version".to_string(),
        endpoint.protocol_version().to_string(),
    ));
    if let Some(credential) = endpoint.credential() {
        headers.push(("Authorization".to_string(), credential.to_string()));
    }
    for (name, value) in &request.headers {
        headers.push((name.clone(), value.clone()));
    }
    headers.push((
        "Content-Type".to_string(),
        request
            .content_type
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
    ));
    headers
}
