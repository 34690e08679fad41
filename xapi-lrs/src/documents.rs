//! Generic document operations shared by the State and Profile
//! resources.
//!
//! Every resource in this family behaves as an opaque byte-blob
//! document addressed by query parameters, with ETag-based optimistic
//! concurrency on writes. The resource modules contribute only their
//! identity parameters.

use crate::client::RemoteLrs;
use crate::error::{LrsError, LrsResult};
use xapi_model::Document;
use xapi_protocol::{HttpRequest, Transport};

impl<T: Transport> RemoteLrs<T> {
    /// GET a document.
    ///
    /// `200` populates content, content type, ETag, and timestamp from
    /// the response. `404` is not an error: the document simply isn't
    /// there yet.
    pub(crate) async fn fetch_document(
        &self,
        resource: &str,
        query: Vec<(String, String)>,
    ) -> LrsResult<Option<Document>> {
        let mut request = HttpRequest::get(resource).content_type("application/json");
        request.query = query;

        let response = self.execute(request).await;
        match response.status {
            200 => Ok(Some(Document {
                content_type: response.content_type.clone(),
                etag: response.etag.clone(),
                updated: Some(response.last_modified),
                content: response.content,
            })),
            404 => Ok(None),
            _ => Err(LrsError::from_response(response)),
        }
    }

    /// PUT a document, with the concurrency header its ETag state
    /// implies: `If-Match` to update a known version, `If-None-Match: *`
    /// to create only. Success is exactly `204`.
    pub(crate) async fn put_document(
        &self,
        resource: &str,
        query: Vec<(String, String)>,
        document: &Document,
    ) -> LrsResult<()> {
        let content_type = document
            .content_type
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let mut request = HttpRequest::put(resource).body(content_type, document.content.clone());
        request.query = query;
        request = match document.etag.as_deref() {
            Some(etag) if !etag.is_empty() => request.header("If-Match", etag),
            _ => request.header("If-None-Match", "*"),
        };

        let response = self.execute(request).await;
        if response.status != 204 {
            return Err(LrsError::from_response(response));
        }
        Ok(())
    }

    /// DELETE a document (or a whole scope, when the id parameter is
    /// omitted from `query`). Success is exactly `204`.
    pub(crate) async fn delete_document(
        &self,
        resource: &str,
        query: Vec<(String, String)>,
    ) -> LrsResult<()> {
        let mut request = HttpRequest::delete(resource);
        request.query = query;

        let response = self.execute(request).await;
        if response.status != 204 {
            return Err(LrsError::from_response(response));
        }
        Ok(())
    }

    /// GET the ids of the documents under a scope. Success is exactly
    /// `200` with a JSON array of strings; an empty array is a valid
    /// result, not a failure.
    pub(crate) async fn fetch_document_ids(
        &self,
        resource: &str,
        query: Vec<(String, String)>,
    ) -> LrsResult<Vec<String>> {
        let mut request = HttpRequest::get(resource);
        request.query = query;

        let response = self.execute(request).await;
        if response.status != 200 {
            return Err(LrsError::from_response(response));
        }
        serde_json::from_slice(&response.content)
            .map_err(|err| LrsError::InvalidResponse(err.to_string()))
    }
}
