//! Bearer token acquisition via the OAuth2 client-credentials grant
//!
//! [`ClientCredentialsAuth`] exchanges the application id and secret for an
//! access token at `oidc/token` and caches it. A cached token is reused until
//! 70% of its advertised lifetime has elapsed. The check-and-refresh sequence
//! runs under one async mutex: the first caller on an empty or expired cache
//! performs the exchange while later callers wait and then reuse its token.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use logto_domain::constants::{
    GRANT_TYPE, TOKEN_LIFETIME_RATIO, TOKEN_PATH, TOKEN_SCOPE, TOKEN_TYPE,
};
use logto_domain::Credentials;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, trace};
use url::form_urlencoded;
use url::Url;

use super::endpoints;
use super::errors::ApiError;
use super::request::{ApiPath, ApiRequest};
use super::response::{decode, expect};
use crate::http::HttpClient;
use crate::time::{Clock, SystemClock};

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token
    ///
    /// This method should handle token refresh if needed.
    async fn access_token(&self) -> Result<String, ApiError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
    token_type: String,
    #[serde(default)]
    scope: String,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Client-credentials token manager with an in-memory cache
pub struct ClientCredentialsAuth {
    http: HttpClient,
    base_url: Url,
    credentials: Credentials,
    clock: Arc<dyn Clock>,
    cached: Mutex<Option<CachedToken>>,
}

impl ClientCredentialsAuth {
    /// Create a token manager that talks to `base_url` through `http`.
    pub fn new(http: HttpClient, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
            clock: Arc::new(SystemClock),
            cached: Mutex::new(None),
        }
    }

    /// Replace the time source used for expiry checks.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn token_request(&self) -> ApiRequest {
        let form = form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", GRANT_TYPE)
            .append_pair("resource", &self.credentials.resource)
            .append_pair("scope", TOKEN_SCOPE)
            .finish();

        ApiRequest::post(ApiPath::new(TOKEN_PATH))
            .raw_body(form)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/x-www-form-urlencoded"))
            .basic_auth(&self.credentials.application_id, &self.credentials.application_secret)
    }

    #[instrument(skip(self), fields(resource = %self.credentials.resource))]
    async fn exchange(&self) -> Result<CachedToken, ApiError> {
        let request = self.token_request();
        let mut builder = request.build(&self.http, &self.base_url)?;
        if let Some(authorization) = request.authorization() {
            builder = authorization.apply(builder);
        }

        let response = expect(self.http.send(builder).await, endpoints::TOKEN).await?;
        let token: TokenResponse = decode(response).await?;

        if token.token_type != TOKEN_TYPE {
            return Err(ApiError::UnexpectedTokenType {
                actual: token.token_type,
                expected: TOKEN_TYPE,
            });
        }

        let lifetime = Duration::from_secs(token.expires_in).mul_f64(TOKEN_LIFETIME_RATIO);
        let expires_at = self.clock.now().checked_add(lifetime).ok_or_else(|| {
            ApiError::Decode(format!("expires_in out of range: {}", token.expires_in))
        })?;
        info!(expires_in = token.expires_in, scope = %token.scope, "access token acquired");

        Ok(CachedToken { token: token.access_token, expires_at })
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsAuth {
    async fn access_token(&self) -> Result<String, ApiError> {
        let mut cached = self.cached.lock().await;

        if let Some(entry) = cached.as_ref() {
            if self.clock.now() < entry.expires_at {
                trace!("reusing cached access token");
                return Ok(entry.token.clone());
            }
            debug!("cached access token expired");
        }

        let fresh = self.exchange().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::time::MockClock;

    const RESOURCE: &str = "https://default.logto.app/api";

    fn credentials() -> Credentials {
        Credentials {
            hostname: "default.logto.app".into(),
            resource: RESOURCE.into(),
            application_id: "app-id".into(),
            application_secret: "app-secret".into(),
        }
    }

    fn token_body(token: &str, expires_in: u64) -> serde_json::Value {
        json!({
            "access_token": token,
            "expires_in": expires_in,
            "token_type": "Bearer",
            "scope": "all"
        })
    }

    fn auth_for(server: &MockServer, clock: &MockClock) -> ClientCredentialsAuth {
        let base_url = Url::parse(&server.uri()).unwrap();
        ClientCredentialsAuth::new(HttpClient::new().unwrap(), base_url, credentials())
            .with_clock(Arc::new(clock.clone()))
    }

    #[tokio::test]
    async fn test_exchange_sends_basic_auth_and_form_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oidc/token"))
            .and(basic_auth("app-id", "app-secret"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(
                "grant_type=client_credentials&resource=https%3A%2F%2Fdefault.logto.app%2Fapi&scope=all",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok", 3600)))
            .expect(1)
            .mount(&server)
            .await;

        let auth = auth_for(&server, &MockClock::new());
        assert_eq!(auth.access_token().await.unwrap(), "tok");
    }

    #[tokio::test]
    async fn test_cached_token_is_reused() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oidc/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok", 3600)))
            .expect(1)
            .mount(&server)
            .await;

        let auth = auth_for(&server, &MockClock::new());
        let first = auth.access_token().await.unwrap();
        let second = auth.access_token().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_token_refreshed_once_after_seventy_percent_of_lifetime() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oidc/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("first", 100)))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/oidc/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("second", 100)))
            .expect(1)
            .mount(&server)
            .await;

        let clock = MockClock::new();
        let auth = auth_for(&server, &clock);
        assert_eq!(auth.access_token().await.unwrap(), "first");

        clock.advance(Duration::from_secs(69));
        assert_eq!(auth.access_token().await.unwrap(), "first");

        clock.advance(Duration::from_secs(1));
        assert_eq!(auth.access_token().await.unwrap(), "second");
        assert_eq!(auth.access_token().await.unwrap(), "second");
    }

    #[tokio::test]
    async fn test_non_bearer_token_is_rejected_and_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oidc/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok",
                "expires_in": 3600,
                "token_type": "mac",
                "scope": "all"
            })))
            .expect(2)
            .mount(&server)
            .await;

        let auth = auth_for(&server, &MockClock::new());

        for _ in 0..2 {
            let err = auth.access_token().await.unwrap_err();
            assert!(
                matches!(&err, ApiError::UnexpectedTokenType { actual, expected: "Bearer" } if actual == "mac"),
                "{err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_out_of_range_expiry_is_rejected_and_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oidc/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok", u64::MAX)))
            .expect(2)
            .mount(&server)
            .await;

        let auth = auth_for(&server, &MockClock::new());

        for _ in 0..2 {
            let err = auth.access_token().await.unwrap_err();
            assert!(matches!(&err, ApiError::Decode(msg) if msg.contains("expires_in")), "{err:?}");
        }
    }

    #[tokio::test]
    async fn test_failed_exchange_is_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oidc/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
            .expect(2)
            .mount(&server)
            .await;

        let auth = auth_for(&server, &MockClock::new());

        for _ in 0..2 {
            let err = auth.access_token().await.unwrap_err();
            assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
            assert!(err.to_string().contains("invalid_client"));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_share_one_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oidc/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(token_body("shared", 3600))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let auth = Arc::new(auth_for(&server, &MockClock::new()));
        let handles = (0..8)
            .map(|_| {
                let auth = Arc::clone(&auth);
                tokio::spawn(async move { auth.access_token().await })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "shared");
        }
    }
}
