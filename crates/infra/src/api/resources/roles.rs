use logto_domain::constants::{ROLES_PATH, SCOPES_SEGMENT};
use logto_domain::{Role, Scope, ScopeIds};
use tracing::instrument;

use super::require_id;
use crate::api::client::LogtoClient;
use crate::api::endpoints;
use crate::api::errors::ApiError;
use crate::api::request::{ApiPath, ApiRequest, Query};

/// Operations on `api/roles`
pub struct Roles<'a> {
    client: &'a LogtoClient,
}

impl<'a> Roles<'a> {
    pub(crate) fn new(client: &'a LogtoClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), fields(role_id = %id))]
    pub async fn get(&self, id: &str) -> Result<Option<Role>, ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::get(ApiPath::new(ROLES_PATH).segment(id));
        self.client.fetch_optional(request, endpoints::ROLE_GET).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: Query) -> Result<Vec<Role>, ApiError> {
        let request = ApiRequest::get(ApiPath::new(ROLES_PATH)).query(query);
        self.client.fetch(request, endpoints::ROLE_LIST).await
    }

    /// Create a role; `role.scope_ids` grants scopes in the same call.
    #[instrument(skip(self, role), fields(name = %role.name))]
    pub async fn create(&self, role: &Role) -> Result<Role, ApiError> {
        let request = ApiRequest::post(ApiPath::new(ROLES_PATH)).json(role)?;
        self.client.fetch(request, endpoints::ROLE_CREATE).await
    }

    #[instrument(skip(self, role), fields(role_id = %role.id))]
    pub async fn update(&self, role: &Role) -> Result<Role, ApiError> {
        require_id(&role.id, "id")?;
        let request = ApiRequest::patch(ApiPath::new(ROLES_PATH).segment(&role.id)).json(role)?;
        self.client.fetch(request, endpoints::ROLE_UPDATE).await
    }

    #[instrument(skip(self), fields(role_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::delete(ApiPath::new(ROLES_PATH).segment(id));
        self.client.execute(request, endpoints::ROLE_DELETE).await
    }

    /// Scopes granted by a role; `None` if the role does not exist.
    #[instrument(skip(self), fields(role_id = %role_id))]
    pub async fn scopes(&self, role_id: &str) -> Result<Option<Vec<Scope>>, ApiError> {
        require_id(role_id, "role id")?;
        let request = ApiRequest::get(Self::scopes_path(role_id));
        self.client.fetch_optional(request, endpoints::ROLE_SCOPES_LIST).await
    }

    #[instrument(skip(self), fields(role_id = %role_id))]
    pub async fn assign_scopes(&self, role_id: &str, scope_ids: &[String]) -> Result<(), ApiError> {
        require_id(role_id, "role id")?;
        if scope_ids.is_empty() {
            return Err(ApiError::InvalidInput("scope ids should not be empty".into()));
        }
        for scope_id in scope_ids {
            require_id(scope_id, "scope id")?;
        }

        let body = ScopeIds { scope_ids: scope_ids.to_vec() };
        let request = ApiRequest::post(Self::scopes_path(role_id)).json(&body)?;
        self.client.execute(request, endpoints::ROLE_SCOPES_ASSIGN).await
    }

    #[instrument(skip(self), fields(role_id = %role_id, scope_id = %scope_id))]
    pub async fn remove_scope(&self, role_id: &str, scope_id: &str) -> Result<(), ApiError> {
        require_id(role_id, "role id")?;
        require_id(scope_id, "scope id")?;
        let request = ApiRequest::delete(Self::scopes_path(role_id).segment(scope_id));
        self.client.execute(request, endpoints::ROLE_SCOPES_REMOVE).await
    }

    fn scopes_path(role_id: &str) -> ApiPath {
        ApiPath::new(ROLES_PATH).segment(role_id).segment(SCOPES_SEGMENT)
    }
}
