use logto_domain::constants::{RESOURCES_PATH, SCOPES_SEGMENT, SCOPE_LOOKUP_PAGE_SIZE};
use logto_domain::Scope;
use tracing::instrument;

use super::require_id;
use crate::api::client::LogtoClient;
use crate::api::endpoints;
use crate::api::errors::ApiError;
use crate::api::request::{ApiPath, ApiRequest, Query};

/// Operations on `api/resources/{id}/scopes`
pub struct Scopes<'a> {
    client: &'a LogtoClient,
}

impl<'a> Scopes<'a> {
    pub(crate) fn new(client: &'a LogtoClient) -> Self {
        Self { client }
    }

    fn path(resource_id: &str) -> ApiPath {
        ApiPath::new(RESOURCES_PATH).segment(resource_id).segment(SCOPES_SEGMENT)
    }

    /// Scopes of an API resource; `None` if the resource does not exist.
    #[instrument(skip(self), fields(resource_id = %resource_id))]
    pub async fn list(
        &self,
        resource_id: &str,
        query: Query,
    ) -> Result<Option<Vec<Scope>>, ApiError> {
        require_id(resource_id, "resource id")?;
        let request = ApiRequest::get(Self::path(resource_id)).query(query);
        self.client.fetch_optional(request, endpoints::SCOPE_LIST).await
    }

    /// Locate one scope by listing the first page of its resource.
    ///
    /// The API has no endpoint for a single scope. Resources with more than
    /// one page of scopes are not searched past the first page.
    #[instrument(skip(self), fields(resource_id = %resource_id, scope_id = %scope_id))]
    pub async fn find(&self, resource_id: &str, scope_id: &str) -> Result<Option<Scope>, ApiError> {
        require_id(scope_id, "id")?;
        let query = Query::new().page(1).page_size(SCOPE_LOOKUP_PAGE_SIZE);
        let scopes = self.list(resource_id, query).await?;
        Ok(scopes.and_then(|scopes| scopes.into_iter().find(|scope| scope.id == scope_id)))
    }

    #[instrument(skip(self, scope), fields(resource_id = %resource_id, name = %scope.name))]
    pub async fn create(&self, resource_id: &str, scope: &Scope) -> Result<Scope, ApiError> {
        require_id(resource_id, "resource id")?;
        let request = ApiRequest::post(Self::path(resource_id)).json(scope)?;
        self.client.fetch(request, endpoints::SCOPE_CREATE).await
    }

    /// Update a scope addressed by `scope.resource_id` and `scope.id`.
    #[instrument(skip(self, scope), fields(resource_id = %scope.resource_id, scope_id = %scope.id))]
    pub async fn update(&self, scope: &Scope) -> Result<Scope, ApiError> {
        require_id(&scope.resource_id, "resource id")?;
        require_id(&scope.id, "id")?;
        let request =
            ApiRequest::patch(Self::path(&scope.resource_id).segment(&scope.id)).json(scope)?;
        self.client.fetch(request, endpoints::SCOPE_UPDATE).await
    }

    #[instrument(skip(self), fields(resource_id = %resource_id, scope_id = %scope_id))]
    pub async fn delete(&self, resource_id: &str, scope_id: &str) -> Result<(), ApiError> {
        require_id(resource_id, "resource id")?;
        require_id(scope_id, "id")?;
        let request = ApiRequest::delete(Self::path(resource_id).segment(scope_id));
        self.client.execute(request, endpoints::SCOPE_DELETE).await
    }
}
