//! The State resource: per-activity, per-agent key-value documents.

use crate::client::RemoteLrs;
use crate::error::LrsResult;
use uuid::Uuid;
use xapi_model::{Activity, Agent, StateDocument};
use xapi_protocol::Transport;

const STATE_RESOURCE: &str = "activities/state";

/// Identity parameters shared by every state operation: the activity,
/// the agent (JSON-encoded), and the optional registration.
fn scope_params(activity: &Activity, agent: &Agent, registration: Option<Uuid>) -> Vec<(String, String)> {
    let mut params = vec![
        ("activityId".to_string(), activity.id.clone()),
        ("agent".to_string(), agent.to_json().to_string()),
    ];
    if let Some(registration) = registration {
        params.push(("registration".to_string(), registration.to_string()));
    }
    params
}

fn document_params(state: &StateDocument) -> Vec<(String, String)> {
    let mut params = vec![("stateId".to_string(), state.id.clone())];
    params.extend(scope_params(&state.activity, &state.agent, state.registration));
    params
}

impl<T: Transport> RemoteLrs<T> {
    /// List the state ids stored under an activity/agent scope.
    pub async fn retrieve_state_ids(
        &self,
        activity: &Activity,
        agent: &Agent,
        registration: Option<Uuid>,
    ) -> LrsResult<Vec<String>> {
        self.fetch_document_ids(STATE_RESOURCE, scope_params(activity, agent, registration))
            .await
    }

    /// Retrieve one state document; `Ok(None)` when it doesn't exist.
    pub async fn retrieve_state(
        &self,
        id: &str,
        activity: &Activity,
        agent: &Agent,
        registration: Option<Uuid>,
    ) -> LrsResult<Option<StateDocument>> {
        let mut params = vec![("stateId".to_string(), id.to_string())];
        params.extend(scope_params(activity, agent, registration));

        Ok(self
            .fetch_document(STATE_RESOURCE, params)
            .await?
            .map(|document| StateDocument {
                id: id.to_string(),
                activity: activity.clone(),
                agent: agent.clone(),
                registration,
                document,
            }))
    }

    /// Save a state document under its scope.
    pub async fn save_state(&self, state: &StateDocument) -> LrsResult<()> {
        self.put_document(STATE_RESOURCE, document_params(state), &state.document)
            .await
    }

    /// Delete one state document.
    pub async fn delete_state(&self, state: &StateDocument) -> LrsResult<()> {
        self.delete_document(STATE_RESOURCE, document_params(state))
            .await
    }

    /// Delete every state document under an activity/agent scope.
    pub async fn clear_state(
        &self,
        activity: &Activity,
        agent: &Agent,
        registration: Option<Uuid>,
    ) -> LrsResult<()> {
        self.delete_document(STATE_RESOURCE, scope_params(activity, agent, registration))
            .await
    }
}
