use logto_domain::constants::{PARAM_INCLUDE_SCOPES, RESOURCES_PATH};
use logto_domain::ApiResource;
use tracing::{debug, instrument};

use super::require_id;
use crate::api::client::LogtoClient;
use crate::api::endpoints;
use crate::api::errors::ApiError;
use crate::api::request::{ApiPath, ApiRequest, Query};

/// Operations on `api/resources`
pub struct ApiResources<'a> {
    client: &'a LogtoClient,
}

impl<'a> ApiResources<'a> {
    pub(crate) fn new(client: &'a LogtoClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self), fields(resource_id = %id))]
    pub async fn get(&self, id: &str) -> Result<Option<ApiResource>, ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::get(ApiPath::new(RESOURCES_PATH).segment(id));
        self.client.fetch_optional(request, endpoints::API_RESOURCE_GET).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: Query) -> Result<Vec<ApiResource>, ApiError> {
        let request = ApiRequest::get(ApiPath::new(RESOURCES_PATH)).query(query);
        self.client.fetch(request, endpoints::API_RESOURCE_LIST).await
    }

    /// Fetch one resource together with its scopes.
    ///
    /// There is no single-resource endpoint that embeds scopes, so this lists
    /// the whole collection with `includeScopes=true` and picks the match.
    #[instrument(skip(self), fields(resource_id = %id))]
    pub async fn get_with_scopes(&self, id: &str) -> Result<Option<ApiResource>, ApiError> {
        require_id(id, "id")?;
        let resources = self.list(Query::new().param(PARAM_INCLUDE_SCOPES, true)).await?;
        debug!(candidates = resources.len(), "filtering API resources");
        Ok(resources.into_iter().find(|resource| resource.id == id))
    }

    #[instrument(skip(self, resource), fields(indicator = %resource.indicator))]
    pub async fn create(&self, resource: &ApiResource) -> Result<ApiResource, ApiError> {
        let request = ApiRequest::post(ApiPath::new(RESOURCES_PATH)).json(resource)?;
        self.client.fetch(request, endpoints::API_RESOURCE_CREATE).await
    }

    #[instrument(skip(self, resource), fields(resource_id = %resource.id))]
    pub async fn update(&self, resource: &ApiResource) -> Result<ApiResource, ApiError> {
        require_id(&resource.id, "id")?;
        let request =
            ApiRequest::patch(ApiPath::new(RESOURCES_PATH).segment(&resource.id)).json(resource)?;
        self.client.fetch(request, endpoints::API_RESOURCE_UPDATE).await
    }

    #[instrument(skip(self), fields(resource_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::delete(ApiPath::new(RESOURCES_PATH).segment(id));
        self.client.execute(request, endpoints::API_RESOURCE_DELETE).await
    }
}
