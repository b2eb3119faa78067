use logto_domain::constants::{ROLES_SEGMENT, USERS_PATH};
use logto_domain::{Role, RoleIds};
use tracing::instrument;

use super::require_id;
use crate::api::client::LogtoClient;
use crate::api::endpoints;
use crate::api::errors::ApiError;
use crate::api::request::{ApiPath, ApiRequest};

/// Operations on `api/users/{id}/roles`
pub struct UserRoles<'a> {
    client: &'a LogtoClient,
}

impl<'a> UserRoles<'a> {
    pub(crate) fn new(client: &'a LogtoClient) -> Self {
        Self { client }
    }

    fn path(user_id: &str) -> ApiPath {
        ApiPath::new(USERS_PATH).segment(user_id).segment(ROLES_SEGMENT)
    }

    fn body(role_ids: &[String]) -> Result<RoleIds, ApiError> {
        if role_ids.is_empty() {
            return Err(ApiError::InvalidInput("role ids should not be empty".into()));
        }
        for role_id in role_ids {
            require_id(role_id, "role id")?;
        }
        Ok(RoleIds { role_ids: role_ids.to_vec() })
    }

    /// Roles currently assigned to a user.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list(&self, user_id: &str) -> Result<Vec<Role>, ApiError> {
        require_id(user_id, "user id")?;
        let request = ApiRequest::get(Self::path(user_id));
        self.client.fetch(request, endpoints::USER_ROLES_LIST).await
    }

    /// Add roles to a user, keeping existing assignments.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn assign(&self, user_id: &str, role_ids: &[String]) -> Result<(), ApiError> {
        require_id(user_id, "user id")?;
        let request = ApiRequest::post(Self::path(user_id)).json(&Self::body(role_ids)?)?;
        self.client.execute(request, endpoints::USER_ROLES_ASSIGN).await
    }

    /// Replace the user's whole role set.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn replace(&self, user_id: &str, role_ids: &[String]) -> Result<(), ApiError> {
        require_id(user_id, "user id")?;
        let request = ApiRequest::put(Self::path(user_id)).json(&Self::body(role_ids)?)?;
        self.client.execute(request, endpoints::USER_ROLES_REPLACE).await
    }

    #[instrument(skip(self), fields(user_id = %user_id, role_id = %role_id))]
    pub async fn remove(&self, user_id: &str, role_id: &str) -> Result<(), ApiError> {
        require_id(user_id, "user id")?;
        require_id(role_id, "role id")?;
        let request = ApiRequest::delete(Self::path(user_id).segment(role_id));
        self.client.execute(request, endpoints::USER_ROLES_REMOVE).await
    }
}
