use logto_domain::constants::{APPLICATIONS_PATH, SECRETS_SEGMENT};
use logto_domain::{Application, ApplicationSecret};
use tracing::instrument;

use super::require_id;
use crate::api::client::LogtoClient;
use crate::api::endpoints;
use crate::api::errors::ApiError;
use crate::api::request::{ApiPath, ApiRequest, Query};

/// Operations on `api/applications`
pub struct Applications<'a> {
    client: &'a LogtoClient,
}

impl<'a> Applications<'a> {
    pub(crate) fn new(client: &'a LogtoClient) -> Self {
        Self { client }
    }

    /// Fetch one application; `None` if it does not exist.
    #[instrument(skip(self), fields(application_id = %id))]
    pub async fn get(&self, id: &str) -> Result<Option<Application>, ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::get(ApiPath::new(APPLICATIONS_PATH).segment(id));
        self.client.fetch_optional(request, endpoints::APPLICATION_GET).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: Query) -> Result<Vec<Application>, ApiError> {
        let request = ApiRequest::get(ApiPath::new(APPLICATIONS_PATH)).query(query);
        self.client.fetch(request, endpoints::APPLICATION_LIST).await
    }

    #[instrument(skip(self, application), fields(name = %application.name))]
    pub async fn create(&self, application: &Application) -> Result<Application, ApiError> {
        let request = ApiRequest::post(ApiPath::new(APPLICATIONS_PATH)).json(application)?;
        self.client.fetch(request, endpoints::APPLICATION_CREATE).await
    }

    #[instrument(skip(self, application), fields(application_id = %application.id))]
    pub async fn update(&self, application: &Application) -> Result<Application, ApiError> {
        require_id(&application.id, "id")?;
        let request = ApiRequest::patch(ApiPath::new(APPLICATIONS_PATH).segment(&application.id))
            .json(application)?;
        self.client.fetch(request, endpoints::APPLICATION_UPDATE).await
    }

    #[instrument(skip(self), fields(application_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::delete(ApiPath::new(APPLICATIONS_PATH).segment(id));
        self.client.execute(request, endpoints::APPLICATION_DELETE).await
    }

    /// Client secrets issued to an application.
    #[instrument(skip(self), fields(application_id = %id))]
    pub async fn secrets(&self, id: &str) -> Result<Vec<ApplicationSecret>, ApiError> {
        require_id(id, "id")?;
        let request = ApiRequest::get(
            ApiPath::new(APPLICATIONS_PATH).segment(id).segment(SECRETS_SEGMENT),
        );
        self.client.fetch(request, endpoints::APPLICATION_SECRETS).await
    }
}
