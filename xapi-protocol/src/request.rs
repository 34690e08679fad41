//! Semantic request descriptors.

use std::fmt;

/// HTTP methods used by the xAPI resource protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Retrieve a resource.
    Get,
    /// Create a resource with server-assigned identity.
    Post,
    /// Create or replace a resource with caller-supplied identity.
    Put,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// The wire form of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One semantic HTTP exchange, before wire assembly.
///
/// Constructed per call and never reused. The resource is either a path
/// relative to the endpoint base (`"statements"`) or an absolute URL
/// (pagination continuation links); [`crate::wire::resolve_url`] decides
/// which.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Method to issue.
    pub method: Method,
    /// Relative resource path or absolute URL.
    pub resource: String,
    /// Ordered query parameters, percent-encoded at assembly time.
    pub query: Vec<(String, String)>,
    /// Caller-supplied headers, merged after the protocol headers.
    pub headers: Vec<(String, String)>,
    /// Content type of the body; defaults to `application/octet-stream`
    /// at assembly time when unset.
    pub content_type: Option<String>,
    /// Raw body bytes, if any.
    pub content: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a descriptor with the given method and resource.
    #[must_use]
    pub fn new(method: Method, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            query: Vec::new(),
            headers: Vec::new(),
            content_type: None,
            content: None,
        }
    }

    /// GET the given resource.
    #[must_use]
    pub fn get(resource: impl Into<String>) -> Self {
        Self::new(Method::Get, resource)
    }

    /// POST to the given resource.
    #[must_use]
    pub fn post(resource: impl Into<String>) -> Self {
        Self::new(Method::Post, resource)
    }

    /// PUT to the given resource.
    #[must_use]
    pub fn put(resource: impl Into<String>) -> Self {
        Self::new(Method::Put, resource)
    }

    /// DELETE the given resource.
    #[must_use]
    pub fn delete(resource: impl Into<String>) -> Self {
        Self::new(Method::Delete, resource)
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the content type without a body (some resources send
    /// `Content-Type` on bodiless requests).
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Attach a body and its content type.
    #[must_use]
    pub fn body(mut self, content_type: impl Into<String>, content: Vec<u8>) -> Self {
        self.content_type = Some(content_type.into());
        self.content = Some(content);
        self
    }
}
