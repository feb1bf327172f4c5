//! Authentication core: token persistence, claims decoding and the
//! permission gate, plus request wrappers for the auth endpoints.
//!
//! The reactive session state built on top of these lives in
//! [`crate::ui::auth`].

pub mod api;
pub mod claims;
pub mod token_store;

pub use api::{CurrentUser, UpdateProfileRequest, update_profile};
pub use claims::{DecodedClaims, decode_token, has_permission, permissions};
pub use token_store::AuthToken;

/// Errors surfaced by the auth core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// The token is not structurally a three-segment bearer token, or its
    /// payload is not the expected claims document. Callers treat this as
    /// "unauthenticated, no permissions".
    #[error("malformed bearer token")]
    MalformedToken,

    /// The backend rejected the supplied credentials.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Transport or protocol failure from the underlying request.
    #[error(transparent)]
    Api(#[from] crate::core::api::ApiError),
}
