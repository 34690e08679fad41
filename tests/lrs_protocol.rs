//! End-to-end protocol tests over a scripted transport.
//!
//! These drive every resource protocol through `RemoteLrs` with
//! `MockTransport` and assert on the exact wire requests produced
//! (methods, paths, query parameters, concurrency headers) and on how
//! responses are interpreted.

use uuid::Uuid;
use xapi_lrs::{LrsError, RemoteLrs};
use xapi_model::{
    Activity, Agent, Document, StateDocument, Statement, StatementsQuery, StatementsResult, Verb,
};
use xapi_protocol::test_utils::{MockTransport, document_response, empty_response, json_response};
use xapi_protocol::{Endpoint, Method, TransportFailure};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn lrs(transport: MockTransport) -> RemoteLrs<MockTransport> {
    let endpoint = Endpoint::parse("https://lrs.example.com/xapi/")
        .expect("endpoint must parse")
        .basic_auth("key", "secret");
    RemoteLrs::new(endpoint, transport)
}

fn activity() -> Activity {
    Activity::new("http://example.com/course/rust-101")
}

fn agent() -> Agent {
    Agent::mbox("mailto:learner@example.com")
}

fn statement() -> Statement {
    Statement::new(
        agent(),
        Verb::new("http://adlnet.gov/expapi/verbs/completed").display("en-US", "completed"),
        activity(),
    )
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Statement identity
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn post_save_adopts_the_server_assigned_id() {
    let transport = MockTransport::new();
    transport.enqueue(json_response(200, r#"["0aa1b2c3-d4e5-4678-9abc-def012345678"]"#));

    let saved = lrs(transport.clone()).save_statement(statement()).await.unwrap();

    assert_eq!(
        saved.id,
        Some("0aa1b2c3-d4e5-4678-9abc-def012345678".parse().unwrap())
    );
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.resource, "statements");
}

#[tokio::test]
async fn put_save_keeps_the_caller_assigned_id() {
    let id = Uuid::new_v4();
    let mut to_save = statement();
    to_save.id = Some(id);

    let transport = MockTransport::new();
    transport.enqueue(empty_response(204));

    let saved = lrs(transport.clone()).save_statement(to_save).await.unwrap();

    assert_eq!(saved.id, Some(id));
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.query, vec![("statementId".to_string(), id.to_string())]);
}

#[tokio::test]
async fn batch_save_assigns_ids_in_input_order() {
    let transport = MockTransport::new();
    transport.enqueue(json_response(
        200,
        r#"["11111111-1111-1111-1111-111111111111",
            "22222222-2222-2222-2222-222222222222"]"#,
    ));

    let result = lrs(transport)
        .save_statements(vec![statement(), statement()])
        .await
        .unwrap();

    let ids: Vec<String> = result
        .statements
        .iter()
        .map(|s| s.id.unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec![
            "11111111-1111-1111-1111-111111111111",
            "22222222-2222-2222-2222-222222222222",
        ]
    );
}

#[tokio::test]
async fn void_routes_through_the_normal_save_path() {
    let voided_id = Uuid::new_v4();
    let transport = MockTransport::new();
    transport.enqueue(json_response(200, r#"["99999999-9999-4999-8999-999999999999"]"#));

    lrs(transport.clone())
        .void_statement(voided_id, agent())
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    let body: serde_json::Value =
        serde_json::from_slice(request.content.as_deref().unwrap()).unwrap();
    assert_eq!(body["verb"]["id"], "http://adlnet.gov/expapi/verbs/voided");
    assert_eq!(body["verb"]["display"], serde_json::json!({"en-US": "voided"}));
    assert_eq!(body["object"]["objectType"], "StatementRef");
    assert_eq!(body["object"]["id"], voided_id.to_string());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Query and pagination
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn pagination_walks_cursors_to_the_end() {
    let transport = MockTransport::new();
    transport.enqueue(json_response(
        200,
        r#"{"statements": [], "more": "/xapi/statements/abc"}"#,
    ));
    transport.enqueue(json_response(200, r#"{"statements": []}"#));

    let client = lrs(transport.clone());
    let first = client.query_statements(&StatementsQuery::new()).await.unwrap();
    let second = client.more_statements(&first).await.unwrap().unwrap();
    let done = client.more_statements(&second).await.unwrap();

    assert!(done.is_none());
    // cursor resolved against the authority, not the current resource
    assert_eq!(
        transport.requests()[1].resource,
        "https://lrs.example.com/xapi/statements/abc"
    );
    // the exhausted cursor issued no third request
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn empty_more_cursor_ends_the_result_set() {
    let result = StatementsResult {
        statements: Vec::new(),
        more: Some(String::new()),
    };
    let transport = MockTransport::new();
    let next = lrs(transport.clone()).more_statements(&result).await.unwrap();
    assert!(next.is_none());
    assert_eq!(transport.request_count(), 0);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Documents and concurrency headers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn fresh_document_saves_create_only() {
    let transport = MockTransport::new();
    transport.enqueue(empty_response(204));

    let mut state = StateDocument::new("bookmark", activity(), agent());
    state.document = Document::json(r#"{"page": 1}"#);
    lrs(transport.clone()).save_state(&state).await.unwrap();

    let request = transport.last_request().unwrap();
    assert!(
        request
            .headers
            .contains(&("If-None-Match".to_string(), "*".to_string()))
    );
}

#[tokio::test]
async fn retrieved_document_saves_conditionally_on_its_etag() {
    let transport = MockTransport::new();
    transport.enqueue(document_response(b"{\"page\": 1}", "application/json", "\"v7\""));
    transport.enqueue(empty_response(204));

    let client = lrs(transport.clone());
    let mut state = client
        .retrieve_state("bookmark", &activity(), &agent(), None)
        .await
        .unwrap()
        .unwrap();
    state.document.content = br#"{"page": 2}"#.to_vec();
    client.save_state(&state).await.unwrap();

    let request = transport.last_request().unwrap();
    assert!(
        request
            .headers
            .contains(&("If-Match".to_string(), "\"v7\"".to_string()))
    );
}

#[tokio::test]
async fn identical_gets_return_identical_content_and_etag() {
    let transport = MockTransport::new();
    transport.enqueue(document_response(b"{\"page\": 1}", "application/json", "\"v7\""));
    transport.enqueue(document_response(b"{\"page\": 1}", "application/json", "\"v7\""));

    let client = lrs(transport);
    let first = client
        .retrieve_state("bookmark", &activity(), &agent(), None)
        .await
        .unwrap()
        .unwrap();
    let second = client
        .retrieve_state("bookmark", &activity(), &agent(), None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first.document.content, second.document.content);
    assert_eq!(first.document.etag, second.document.etag);
}

#[tokio::test]
async fn missing_documents_are_values_not_errors() {
    let transport = MockTransport::new();
    transport.enqueue(empty_response(404));

    let state = lrs(transport)
        .retrieve_state("bookmark", &activity(), &agent(), None)
        .await
        .unwrap();
    assert!(state.is_none());
}

#[tokio::test]
async fn conflict_on_save_surfaces_the_status() {
    let transport = MockTransport::new();
    transport.enqueue(json_response(412, "etag mismatch"));

    let state = StateDocument::new("bookmark", activity(), agent());
    let err = lrs(transport).save_state(&state).await.unwrap_err();
    match err {
        LrsError::Protocol { status, message } => {
            assert_eq!(status, 412);
            assert_eq!(message, "etag mismatch");
        }
        other => panic!("expected Protocol, got {other:?}"),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Failure envelopes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn no_response_surfaces_the_captured_failure() {
    use xapi_protocol::HttpResponse;

    let transport = MockTransport::new();
    transport.enqueue(HttpResponse::from_failure(TransportFailure::NoResponse(
        "connection refused".to_string(),
    )));

    let err = lrs(transport).about().await.unwrap_err();
    match err {
        LrsError::Transport(TransportFailure::NoResponse(detail)) => {
            assert_eq!(detail, "connection refused");
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn the_client_survives_a_failure() {
    let transport = MockTransport::new();
    transport.enqueue(json_response(500, "internal error"));
    transport.enqueue(json_response(200, r#"{"version": ["1.0.3"]}"#));

    let client = lrs(transport);
    assert!(client.about().await.is_err());
    let about = client.about().await.unwrap();
    assert_eq!(about.version, vec!["1.0.3"]);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Ambient request shape
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn extended_endpoint_parameters_reach_every_request() {
    use xapi_protocol::{HttpRequest, wire};

    let endpoint = Endpoint::parse("https://lrs.example.com/xapi/")
        .unwrap()
        .extend("tenant", "acme");
    let url = wire::resolve_url(&endpoint, &HttpRequest::get("statements")).unwrap();
    assert_eq!(url.query(), Some("tenant=acme"));
}

#[tokio::test]
async fn every_request_carries_version_and_credential() {
    use xapi_protocol::{HttpRequest, wire};

    let endpoint = Endpoint::parse("https://lrs.example.com/xapi/")
        .unwrap()
        .basic_auth("key", "secret");
    let headers = wire::assemble_headers(&endpoint, &HttpRequest::get("about"));

    assert!(
        headers
            .iter()
            .any(|(name, value)| name == "X-Experience-API-Version" && value == "1.0.3")
    );
    assert!(headers.iter().any(|(name, _)| name == "Authorization"));
}
