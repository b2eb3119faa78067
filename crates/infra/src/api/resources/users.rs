use logto_domain::constants::USERS_PATH;
use logto_domain::User;
use tracing::instrument;

use super::require_id;
use crate::api::client::LogtoClient;
use crate::api::endpoints;
use crate::api::errors::ApiError;
use crate::api::request::{ApiPath, ApiRequest, Query};

/// Operations on `api/users`
pub struct Users<'a> {
    client: &'a LogtoClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a LogtoClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get(&self, id: &str) -> Result<Option<User>, ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::get(ApiPath::new(USERS_PATH).segment(id));
        self.client.fetch_optional(request, endpoints::USER_GET).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: Query) -> Result<Vec<User>, ApiError> {
        let request = ApiRequest::get(ApiPath::new(USERS_PATH)).query(query);
        self.client.fetch(request, endpoints::USER_LIST).await
    }

    #[instrument(skip(self, user))]
    pub async fn create(&self, user: &User) -> Result<User, ApiError> {
        let request = ApiRequest::post(ApiPath::new(USERS_PATH)).json(user)?;
        self.client.fetch(request, endpoints::USER_CREATE).await
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn update(&self, user: &User) -> Result<User, ApiError> {
        require_id(&user.id, "id")?;
        // Password is create-only.
        let changes = User { password: None, ..user.clone() };
        let request =
            ApiRequest::patch(ApiPath::new(USERS_PATH).segment(&user.id)).json(&changes)?;
        self.client.fetch(request, endpoints::USER_UPDATE).await
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::delete(ApiPath::new(USERS_PATH).segment(id));
        self.client.execute(request, endpoints::USER_DELETE).await
    }
}
