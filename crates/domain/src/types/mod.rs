//! Resource models exchanged with the management API
//!
//! Field names follow the API's camelCase JSON. Server-assigned fields
//! (identifiers, tenant, timestamps) are read from responses but never
//! written into request bodies, and absent optional fields are omitted so
//! that the same struct serves as a partial update.

pub mod api_resource;
pub mod application;
pub mod role;
pub mod sign_in_experience;
pub mod user;

pub use api_resource::{ApiResource, Scope};
pub use application::{
    Application, ApplicationSecret, ApplicationType, CustomClientMetadata, OidcClientMetadata,
};
pub use role::{Role, RoleIds, RoleType, ScopeIds};
pub use sign_in_experience::{
    Branding, CaptchaPolicy, CharacterTypes, Color, CustomUiAssets, EmailBlocklistPolicy,
    LanguageInfo, Mfa, PasswordLength, PasswordPolicy, PasswordRejects, SecondaryIdentifier,
    SentinelPolicy, SignIn, SignInExperience, SignInMethod, SignInMode, SignUp, SocialSignIn,
};
pub use user::{User, UserProfile};
