//! Logical request model and its conversion into an HTTP request
//!
//! An [`ApiRequest`] describes one call: method, path, query, body and
//! headers. [`ApiRequest::build`] turns it into a `reqwest` request against a
//! base URL. Authentication is layered on afterwards by the caller via
//! [`Authorization`].

use std::collections::BTreeMap;
use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::errors::ApiError;
use crate::http::HttpClient;

/// Request path relative to the base URL.
///
/// Static prefixes are split on `/` and empty pieces dropped, so joins never
/// produce `//`. Dynamic segments added with [`ApiPath::segment`] are
/// percent-encoded as a single segment; a `/` inside an identifier can never
/// address a different endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Path from a static prefix such as `api/users`.
    pub fn new(prefix: &str) -> Self {
        Self { segments: prefix.split('/').filter(|s| !s.is_empty()).map(str::to_owned).collect() }
    }

    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            f.write_str(&urlencoding::encode(segment))?;
        }
        Ok(())
    }
}

/// Query parameters, encoded in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(BTreeMap<String, String>);

impl Query {
    /// Empty query; nothing is appended to the URL.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.param(logto_domain::constants::PARAM_PAGE, page)
    }

    #[must_use]
    pub fn page_size(self, page_size: u32) -> Self {
        self.param(logto_domain::constants::PARAM_PAGE_SIZE, page_size)
    }

    #[must_use]
    pub fn search(self, term: impl Into<String>) -> Self {
        self.param(logto_domain::constants::PARAM_SEARCH, term.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }
}

/// Application credentials presented with HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Authentication attached to a built request. Exactly one per request.
#[derive(Clone)]
pub enum Authorization {
    /// Application credentials, used for the token exchange.
    Basic(BasicAuth),
    /// Access token from the token manager.
    Bearer(String),
}

impl Authorization {
    pub(crate) fn apply(self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic(BasicAuth { username, password }) => {
                builder.basic_auth(username, Some(password))
            }
            Self::Bearer(token) => builder.bearer_auth(token),
        }
    }
}

/// One logical call against the management API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: ApiPath,
    json: Option<Value>,
    raw_body: Option<String>,
    headers: HeaderMap,
    query: Query,
    basic_auth: Option<BasicAuth>,
}

impl ApiRequest {
    pub fn new(method: Method, path: ApiPath) -> Self {
        Self {
            method,
            path,
            json: None,
            raw_body: None,
            headers: HeaderMap::new(),
            query: Query::new(),
            basic_auth: None,
        }
    }

    pub fn get(path: ApiPath) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: ApiPath) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: ApiPath) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: ApiPath) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: ApiPath) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a structured body, sent as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|err| ApiError::Encode(err.to_string()))?;
        self.json = Some(value);
        Ok(self)
    }

    /// Attach a pre-encoded body, sent as-is. Takes precedence over [`ApiRequest::json`].
    #[must_use]
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.raw_body = Some(body.into());
        self
    }

    /// Set an explicit header. Applied after the defaults, so it overrides them.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn query(mut self, query: Query) -> Self {
        self.query.extend(query);
        self
    }

    /// Authenticate this request with application credentials instead of a bearer token.
    #[must_use]
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth { username: username.into(), password: password.into() });
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &ApiPath {
        &self.path
    }

    /// Basic-auth override, if one was set. `None` means the request needs a bearer token.
    pub(crate) fn authorization(&self) -> Option<Authorization> {
        self.basic_auth.clone().map(Authorization::Basic)
    }

    /// Full URL of this request under `base_url`, which must end with `/`.
    pub fn url(&self, base_url: &Url) -> Result<Url, ApiError> {
        let mut url = base_url
            .join(&self.path.to_string())
            .map_err(|err| ApiError::InvalidInput(format!("invalid request path: {err}")))?;

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.0.iter());
        }

        Ok(url)
    }

    /// Build the unauthenticated HTTP request.
    pub fn build(&self, http: &HttpClient, base_url: &Url) -> Result<RequestBuilder, ApiError> {
        let mut builder = http.request(self.method.clone(), self.url(base_url)?);

        if let Some(value) = &self.json {
            let body = serde_json::to_vec(value).map_err(|err| ApiError::Encode(err.to_string()))?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        if let Some(raw) = &self.raw_body {
            builder = builder.body(raw.clone());
        }

        if !self.headers.is_empty() {
            builder = builder.headers(self.headers.clone());
        }

        Ok(builder)
    }
}
