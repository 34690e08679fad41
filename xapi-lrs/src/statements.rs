//! Statement operations: save, void, retrieve, query, paginate.

use crate::client::RemoteLrs;
use crate::error::{LrsError, LrsResult};
use uuid::Uuid;
use xapi_model::{Agent, Statement, StatementRef, StatementsQuery, StatementsResult, Verb};
use xapi_protocol::{HttpRequest, Transport};

impl<T: Transport> RemoteLrs<T> {
    /// Save one statement.
    ///
    /// A statement without an id is POSTed; the LRS answers `200` with a
    /// JSON array whose first element is the assigned id, which is
    /// written onto the returned statement. A statement that already has
    /// an id is PUT under `statementId`; the LRS answers `204` and the
    /// id is untouched. Either way the returned statement's identity is
    /// final.
    pub async fn save_statement(&self, mut statement: Statement) -> LrsResult<Statement> {
        let content = serde_json::to_vec(&statement)
            .map_err(|err| LrsError::Serialization(err.to_string()))?;

        match statement.id {
            None => {
                let request =
                    HttpRequest::post("statements").body("application/json", content);
                let response = self.execute(request).await;
                if response.status != 200 {
                    return Err(LrsError::from_response(response));
                }
                let ids: Vec<Uuid> = serde_json::from_slice(&response.content)
                    .map_err(|err| LrsError::InvalidResponse(err.to_string()))?;
                let id = ids.into_iter().next().ok_or_else(|| {
                    LrsError::InvalidResponse("empty statement id array".to_string())
                })?;
                statement.id = Some(id);
            }
            Some(id) => {
                let request = HttpRequest::put("statements")
                    .query("statementId", id.to_string())
                    .body("application/json", content);
                let response = self.execute(request).await;
                if response.status != 204 {
                    return Err(LrsError::from_response(response));
                }
            }
        }

        Ok(statement)
    }

    /// Save a batch of statements in one POST.
    ///
    /// The LRS answers `200` with a JSON array of ids in input order;
    /// each statement's id is assigned positionally.
    pub async fn save_statements(
        &self,
        mut statements: Vec<Statement>,
    ) -> LrsResult<StatementsResult> {
        let content = serde_json::to_vec(&statements)
            .map_err(|err| LrsError::Serialization(err.to_string()))?;
        let request = HttpRequest::post("statements").body("application/json", content);

        let response = self.execute(request).await;
        if response.status != 200 {
            return Err(LrsError::from_response(response));
        }

        let ids: Vec<Uuid> = serde_json::from_slice(&response.content)
            .map_err(|err| LrsError::InvalidResponse(err.to_string()))?;
        if ids.len() != statements.len() {
            return Err(LrsError::InvalidResponse(format!(
                "statement id count mismatch: sent {}, received {}",
                statements.len(),
                ids.len()
            )));
        }
        for (statement, id) in statements.iter_mut().zip(ids) {
            statement.id = Some(id);
        }

        Ok(StatementsResult::new(statements))
    }

    /// Void a previously recorded statement.
    ///
    /// Sugar over [`RemoteLrs::save_statement`]: records a new statement
    /// whose verb is the reserved voiding verb, whose actor is the given
    /// agent, and whose object references the statement being voided.
    pub async fn void_statement(&self, id: Uuid, agent: Agent) -> LrsResult<Statement> {
        let void = Statement::new(agent, Verb::voided(), StatementRef::new(id));
        self.save_statement(void).await
    }

    /// Retrieve one statement by id.
    pub async fn retrieve_statement(&self, id: Uuid) -> LrsResult<Statement> {
        self.fetch_statement("statementId", id).await
    }

    /// Retrieve one voided statement by its original id.
    pub async fn retrieve_voided_statement(&self, id: Uuid) -> LrsResult<Statement> {
        self.fetch_statement("voidedStatementId", id).await
    }

    async fn fetch_statement(&self, id_param: &str, id: Uuid) -> LrsResult<Statement> {
        let request = HttpRequest::get("statements").query(id_param, id.to_string());
        let response = self.execute(request).await;
        if response.status != 200 {
            return Err(LrsError::from_response(response));
        }
        Statement::parse(&response.body_text())
            .map_err(|err| LrsError::InvalidResponse(err.to_string()))
    }

    /// Query statements with the given filters.
    pub async fn query_statements(
        &self,
        query: &StatementsQuery,
    ) -> LrsResult<StatementsResult> {
        let mut request = HttpRequest::get("statements");
        request.query = query.to_query_params();

        let response = self.execute(request).await;
        if response.status != 200 {
            return Err(LrsError::from_response(response));
        }
        StatementsResult::parse(&response.body_text())
            .map_err(|err| LrsError::InvalidResponse(err.to_string()))
    }

    /// Fetch the next page of a previous query.
    ///
    /// Returns `Ok(None)` when the result carries no continuation
    /// cursor: the result set is exhausted and no request is made. The
    /// cursor
    /// is resolved against the endpoint's authority (scheme+host+port),
    /// not against the base path.
    pub async fn more_statements(
        &self,
        result: &StatementsResult,
    ) -> LrsResult<Option<StatementsResult>> {
        let Some(cursor) = result.more_cursor() else {
            return Ok(None);
        };

        let mut resource = self.endpoint().authority();
        if !resource.ends_with('/') {
            resource.push('/');
        }
        resource.push_str(cursor.trim_start_matches('/'));

        let response = self.execute(HttpRequest::get(resource)).await;
        if response.status != 200 {
            return Err(LrsError::from_response(response));
        }
        StatementsResult::parse(&response.body_text())
            .map(Some)
            .map_err(|err| LrsError::InvalidResponse(err.to_string()))
    }
}
