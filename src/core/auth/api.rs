//! Request wrappers for the auth endpoints:
//! - POST /auth/sign-in - Exchange credentials for a token pair
//! - GET /auth/me - Fetch the profile of the token's owner
//! - PUT /auth/profile - Update profile-completion fields
//! - POST /auth/sign-out - Notify the backend of a logout (best effort)

use serde::{Deserialize, Serialize};

use super::AuthError;
use super::token_store::AuthToken;
use crate::core::api::{self, ApiError};

/// Profile of the authenticated user as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub user_group_id: i64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub profile_completed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl From<SignInResponse> for AuthToken {
    fn from(resp: SignInResponse) -> Self {
        AuthToken {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignOutRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

/// Fields a user fills in to complete their profile.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Exchange credentials for a token pair.
///
/// A 401 from the backend becomes [`AuthError::InvalidCredentials`]; any
/// other failure is passed through for the form to display.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthToken, AuthError> {
    let request = SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    match api::post_json::<_, SignInResponse>("auth/sign-in", &request).await {
        Ok(resp) => Ok(resp.into()),
        Err(ApiError::Status { status: 401, .. }) => Err(AuthError::InvalidCredentials),
        Err(e) => Err(AuthError::Api(e)),
    }
}

/// Fetch the profile belonging to the stored token.
pub async fn fetch_current_user() -> Result<CurrentUser, ApiError> {
    api::get_json("auth/me").await
}

/// Update profile-completion fields, returning the refreshed profile.
pub async fn update_profile(request: &UpdateProfileRequest) -> Result<CurrentUser, ApiError> {
    api::put_json("auth/profile", request).await
}

/// Tell the backend this session is over. Best effort: the caller logs a
/// failure and clears local state regardless.
pub async fn sign_out(refresh_token: Option<String>) -> Result<(), ApiError> {
    api::post_json_no_content("auth/sign-out", &SignOutRequest { refresh_token }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_response_maps_to_token() {
        let resp: SignInResponse = serde_json::from_str(
            r#"{"accessToken":"head.body.sig","refreshToken":"r-1"}"#,
        )
        .unwrap();

        let token: AuthToken = resp.into();

        assert_eq!(token.access_token, "head.body.sig");
        assert_eq!(token.refresh_token.as_deref(), Some("r-1"));
    }

    #[test]
    fn test_sign_in_response_without_refresh_token() {
        let resp: SignInResponse =
            serde_json::from_str(r#"{"accessToken":"head.body.sig"}"#).unwrap();

        let token: AuthToken = resp.into();
        assert!(token.refresh_token.is_none());
    }

    #[test]
    fn test_current_user_deserializes_partial_profile() {
        let user: CurrentUser = serde_json::from_str(
            r#"{
                "id": 12,
                "email": "ana@example.org",
                "fullName": "Ana Petrova",
                "userGroupId": 3
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, 12);
        assert_eq!(user.full_name, "Ana Petrova");
        assert_eq!(user.user_group_id, 3);
        assert!(user.phone.is_none());
        assert!(!user.profile_completed);
    }

    #[test]
    fn test_update_profile_request_omits_empty_fields() {
        let request = UpdateProfileRequest {
            full_name: "Ana Petrova".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains("fullName"));
        assert!(!json.contains("phone"));
        assert!(!json.contains("organization"));
    }
}
