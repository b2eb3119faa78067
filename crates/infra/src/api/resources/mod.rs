//! Typed operations per resource kind
//!
//! Each handle borrows a [`LogtoClient`](super::client::LogtoClient) and
//! exposes the calls for one resource kind. Identifiers are checked before
//! any request is built; an empty one would otherwise address the
//! collection instead of a single object.

mod api_resources;
mod applications;
mod roles;
mod scopes;
mod sign_in_experience;
mod user_roles;
mod users;

pub use api_resources::ApiResources;
pub use applications::Applications;
pub use roles::Roles;
pub use scopes::Scopes;
pub use sign_in_experience::SignInExperiences;
pub use user_roles::UserRoles;
pub use users::Users;

use super::errors::ApiError;

/// Reject identifiers that cannot address a single object.
pub(crate) fn require_id(id: &str, what: &'static str) -> Result<(), ApiError> {
    if id.is_empty() {
        return Err(ApiError::EmptyId(what));
    }
    if id == "." || id == ".." {
        return Err(ApiError::InvalidInput(format!("{what} must not be a dot segment")));
    }
    Ok(())
}
