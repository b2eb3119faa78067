//! API resource and scope models

use serde::{Deserialize, Serialize};

/// A protected API audience registered with the tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResource {
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(skip_serializing)]
    pub tenant_id: Option<String>,
    pub name: String,
    pub indicator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_ttl: Option<i64>,
    /// Populated only when the collection is fetched with `includeScopes`.
    #[serde(skip_serializing)]
    pub scopes: Option<Vec<Scope>>,
}

impl ApiResource {
    pub fn new(name: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            tenant_id: None,
            name: name.into(),
            indicator: indicator.into(),
            is_default: None,
            access_token_ttl: None,
            scopes: None,
        }
    }
}

/// A permission defined on an API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(skip_serializing)]
    pub tenant_id: Option<String>,
    /// Parent resource; part of the request path, not the body.
    #[serde(default, skip_serializing)]
    pub resource_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<i64>,
}

impl Scope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            tenant_id: None,
            resource_id: String::new(),
            name: name.into(),
            description: None,
            created_at: None,
        }
    }
}
