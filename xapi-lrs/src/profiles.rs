//! The Activity Profile and Agent Profile resources.
//!
//! Both are the generic document protocol under a different scope:
//! activity profiles key on `profileId` + `activityId`, agent profiles
//! on `profileId` + the agent's JSON encoding.

use crate::client::RemoteLrs;
use crate::error::LrsResult;
use xapi_model::{Activity, ActivityProfileDocument, Agent, AgentProfileDocument};
use xapi_protocol::Transport;

const ACTIVITY_PROFILE_RESOURCE: &str = "activities/profile";
const AGENT_PROFILE_RESOURCE: &str = "agents/profile";

fn activity_scope(activity: &Activity) -> Vec<(String, String)> {
    vec![("activityId".to_string(), activity.id.clone())]
}

fn agent_scope(agent: &Agent) -> Vec<(String, String)> {
    vec![("agent".to_string(), agent.to_json().to_string())]
}

fn with_profile_id(id: &str, mut scope: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut params = vec![("profileId".to_string(), id.to_string())];
    params.append(&mut scope);
    params
}

impl<T: Transport> RemoteLrs<T> {
    /// List the profile ids stored under an activity.
    pub async fn retrieve_activity_profile_ids(
        &self,
        activity: &Activity,
    ) -> LrsResult<Vec<String>> {
        self.fetch_document_ids(ACTIVITY_PROFILE_RESOURCE, activity_scope(activity))
            .await
    }

    /// Retrieve one activity profile; `Ok(None)` when it doesn't exist.
    pub async fn retrieve_activity_profile(
        &self,
        id: &str,
        activity: &Activity,
    ) -> LrsResult<Option<ActivityProfileDocument>> {
        let params = with_profile_id(id, activity_scope(activity));
        Ok(self
            .fetch_document(ACTIVITY_PROFILE_RESOURCE, params)
            .await?
            .map(|document| ActivityProfileDocument {
                id: id.to_string(),
                activity: activity.clone(),
                document,
            }))
    }

    /// Save an activity profile under its scope.
    pub async fn save_activity_profile(
        &self,
        profile: &ActivityProfileDocument,
    ) -> LrsResult<()> {
        let params = with_profile_id(&profile.id, activity_scope(&profile.activity));
        self.put_document(ACTIVITY_PROFILE_RESOURCE, params, &profile.document)
            .await
    }

    /// Delete an activity profile.
    pub async fn delete_activity_profile(
        &self,
        profile: &ActivityProfileDocument,
    ) -> LrsResult<()> {
        let params = with_profile_id(&profile.id, activity_scope(&profile.activity));
        self.delete_document(ACTIVITY_PROFILE_RESOURCE, params).await
    }

    /// List the profile ids stored under an agent.
    pub async fn retrieve_agent_profile_ids(&self, agent: &Agent) -> LrsResult<Vec<String>> {
        self.fetch_document_ids(AGENT_PROFILE_RESOURCE, agent_scope(agent))
            .await
    }

    /// Retrieve one agent profile; `Ok(None)` when it doesn't exist.
    pub async fn retrieve_agent_profile(
        &self,
        id: &str,
        agent: &Agent,
    ) -> LrsResult<Option<AgentProfileDocument>> {
        let params = with_profile_id(id, agent_scope(agent));
        Ok(self
            .fetch_document(AGENT_PROFILE_RESOURCE, params)
            .await?
            .map(|document| AgentProfileDocument {
                id: id.to_string(),
                agent: agent.clone(),
                document,
            }))
    }

    /// Save an agent profile under its scope.
    pub async fn save_agent_profile(&self, profile: &AgentProfileDocument) -> LrsResult<()> {
        let params = with_profile_id(&profile.id, agent_scope(&profile.agent));
        self.put_document(AGENT_PROFILE_RESOURCE, params, &profile.document)
            .await
    }

    /// Delete an agent profile.
    pub async fn delete_agent_profile(&self, profile: &AgentProfileDocument) -> LrsResult<()> {
        let params = with_profile_id(&profile.id, agent_scope(&profile.agent));
        self.delete_document(AGENT_PROFILE_RESOURCE, params).await
    }
}
