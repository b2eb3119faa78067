//! Authenticated client for the Logto management API
//!
//! [`LogtoClient`] ties the pieces together: it builds each [`ApiRequest`],
//! attaches either the request's basic-auth override or a bearer token from
//! its [`AccessTokenProvider`], sends it once, and races the whole call
//! against a cancellation token.
//!
//! Clones share the HTTP connection pool and the token cache, so one client
//! can be used from many tasks at once.

use std::future::Future;
use std::sync::Arc;

use logto_domain::LogtoConfig;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use url::Url;

use super::auth::{AccessTokenProvider, ClientCredentialsAuth};
use super::errors::ApiError;
use super::request::{ApiRequest, Authorization};
use super::resources::{
    ApiResources, Applications, Roles, Scopes, SignInExperiences, UserRoles, Users,
};
use super::response::{decode, expect};
use crate::http::HttpClient;
use crate::time::Clock;

/// Management API client
#[derive(Clone)]
pub struct LogtoClient {
    http: HttpClient,
    base_url: Url,
    tokens: Arc<dyn AccessTokenProvider>,
    cancellation: CancellationToken,
}

impl LogtoClient {
    /// Create a client from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the configuration is invalid or the HTTP
    /// client cannot be created.
    pub fn new(config: LogtoConfig) -> Result<Self, ApiError> {
        Self::builder().config(config).build()
    }

    /// Create a client configured from `LOGTO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if a required variable is missing.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(crate::config::load()?)
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> LogtoClientBuilder {
        LogtoClientBuilder::default()
    }

    /// Root every request path is joined onto, e.g. `https://tenant.logto.app/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// A handle sharing this client's connections and token cache whose
    /// calls abort with `ApiError::Cancelled` once `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self { cancellation: token, ..self.clone() }
    }

    /// Current bearer token, acquiring one if the cache is empty or expired.
    pub async fn access_token(&self) -> Result<String, ApiError> {
        self.cancellable(self.tokens.access_token()).await
    }

    /// Authenticate and send `request` once, returning the raw response.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub async fn send(&self, request: ApiRequest) -> Result<Response, ApiError> {
        self.cancellable(self.dispatch(request)).await
    }

    /// Send `request` and check its status against `accepted`.
    #[instrument(skip(self, request, accepted), fields(method = %request.method(), path = %request.path()))]
    pub async fn call(
        &self,
        request: ApiRequest,
        accepted: &[StatusCode],
    ) -> Result<Response, ApiError> {
        self.cancellable(async { expect(self.dispatch(request).await, accepted).await }).await
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        accepted: &[StatusCode],
    ) -> Result<T, ApiError> {
        let response = self.call(request, accepted).await?;
        self.cancellable(decode(response)).await
    }

    /// Like [`LogtoClient::fetch`], with 404 mapped to `None`.
    pub(crate) async fn fetch_optional<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        accepted: &[StatusCode],
    ) -> Result<Option<T>, ApiError> {
        let response = self.call(request, accepted).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("resource not found");
            return Ok(None);
        }
        self.cancellable(decode(response)).await.map(Some)
    }

    /// Send `request` for its status alone; the body is dropped unread.
    pub(crate) async fn execute(
        &self,
        request: ApiRequest,
        accepted: &[StatusCode],
    ) -> Result<(), ApiError> {
        self.call(request, accepted).await.map(drop)
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Response, ApiError> {
        let builder = request.build(&self.http, &self.base_url)?;
        let authorization = match request.authorization() {
            Some(basic) => basic,
            None => Authorization::Bearer(self.tokens.access_token().await?),
        };
        self.http.send(authorization.apply(builder)).await
    }

    async fn cancellable<T>(
        &self,
        operation: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        tokio::select! {
            biased;
            () = self.cancellation.cancelled() => Err(ApiError::Cancelled),
            result = operation => result,
        }
    }

    /// Applications and their secrets.
    pub fn applications(&self) -> Applications<'_> {
        Applications::new(self)
    }

    /// User accounts.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Role assignments of users.
    pub fn user_roles(&self) -> UserRoles<'_> {
        UserRoles::new(self)
    }

    /// Roles and the scopes granted to them.
    pub fn roles(&self) -> Roles<'_> {
        Roles::new(self)
    }

    /// API resources (token audiences).
    pub fn api_resources(&self) -> ApiResources<'_> {
        ApiResources::new(self)
    }

    /// Scopes nested under API resources.
    pub fn scopes(&self) -> Scopes<'_> {
        Scopes::new(self)
    }

    /// The tenant-wide sign-in experience.
    pub fn sign_in_experience(&self) -> SignInExperiences<'_> {
        SignInExperiences::new(self)
    }
}

/// Builder for [`LogtoClient`]
#[derive(Default)]
pub struct LogtoClientBuilder {
    config: Option<LogtoConfig>,
    tokens: Option<Arc<dyn AccessTokenProvider>>,
    clock: Option<Arc<dyn Clock>>,
    cancellation: Option<CancellationToken>,
    user_agent: Option<String>,
}

impl LogtoClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: LogtoConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom token provider instead of the client-credentials exchange
    pub fn token_provider(mut self, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Time source for token expiry; ignored with a custom token provider
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if no configuration was set, it fails
    /// validation, or the HTTP client cannot be created.
    pub fn build(self) -> Result<LogtoClient, ApiError> {
        let config = self.config.ok_or_else(|| ApiError::Config("configuration not set".into()))?;
        config.validate()?;

        let base_url = Url::parse(&config.base_url())
            .map_err(|err| ApiError::Config(format!("invalid base URL: {err}")))?;

        let mut http = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = self.user_agent {
            http = http.user_agent(agent);
        }
        let http = http.build()?;

        let tokens = match self.tokens {
            Some(tokens) => tokens,
            None => {
                let mut auth =
                    ClientCredentialsAuth::new(http.clone(), base_url.clone(), config.credentials);
                if let Some(clock) = self.clock {
                    auth = auth.with_clock(clock);
                }
                Arc::new(auth) as Arc<dyn AccessTokenProvider>
            }
        };

        debug!(%base_url, timeout = ?config.timeout, "Logto client configured");

        Ok(LogtoClient {
            http,
            base_url,
            tokens,
            cancellation: self.cancellation.unwrap_or_else(CancellationToken::new),
        })
    }
}
