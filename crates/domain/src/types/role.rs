//! Role models

use serde::{Deserialize, Serialize};

/// Who a role can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    User,
    MachineToMachine,
}

/// A role bundling API scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(skip_serializing)]
    pub tenant_id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role_type: Option<RoleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Scopes granted at creation; the API does not echo these back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_ids: Option<Vec<String>>,
}

impl Role {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            tenant_id: None,
            name: name.into(),
            description: description.into(),
            role_type: None,
            is_default: None,
            scope_ids: None,
        }
    }
}

/// Body of role assignment calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleIds {
    pub role_ids: Vec<String>,
}

/// Body of scope assignment calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeIds {
    pub scope_ids: Vec<String>,
}
