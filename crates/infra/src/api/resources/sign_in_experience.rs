use logto_domain::constants::SIGN_IN_EXPERIENCE_PATH;
use logto_domain::SignInExperience;
use tracing::instrument;

use crate::api::client::LogtoClient;
use crate::api::endpoints;
use crate::api::errors::ApiError;
use crate::api::request::{ApiPath, ApiRequest};

/// Operations on the tenant-wide `api/sign-in-exp` singleton
pub struct SignInExperiences<'a> {
    client: &'a LogtoClient,
}

impl<'a> SignInExperiences<'a> {
    pub(crate) fn new(client: &'a LogtoClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<Option<SignInExperience>, ApiError> {
        let request = ApiRequest::get(ApiPath::new(SIGN_IN_EXPERIENCE_PATH));
        self.client.fetch_optional(request, endpoints::SIGN_IN_EXPERIENCE_GET).await
    }

    /// Apply the fields present in `changes`; absent fields are left untouched.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, changes: &SignInExperience) -> Result<SignInExperience, ApiError> {
        let request = ApiRequest::patch(ApiPath::new(SIGN_IN_EXPERIENCE_PATH)).json(changes)?;
        self.client.fetch(request, endpoints::SIGN_IN_EXPERIENCE_UPDATE).await
    }
}
