//! Persistence of the auth token pair in browser localStorage.
//!
//! The token is the only piece of auth state that survives a reload. It is
//! stored as JSON under a single fixed key and removed on logout or when
//! session initialization decides the token is no longer usable.

use serde::{Deserialize, Serialize};

/// localStorage key holding the serialized token pair.
const STORAGE_KEY_TOKEN: &str = "innova_auth_token";

/// Bearer token pair returned by the auth API.
///
/// `access_token` rides along on every authenticated request; the refresh
/// token, when the backend issues one, is only echoed back on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Read the persisted token. Returns `None` when storage is unavailable,
/// empty, or holds something that no longer parses.
#[cfg(not(feature = "ssr"))]
pub fn get_token() -> Option<AuthToken> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY_TOKEN).ok()??;
    serde_json::from_str(&json).ok()
}

/// Persist the token, overwriting any existing value.
#[cfg(not(feature = "ssr"))]
pub fn set_token(token: &AuthToken) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let storage = window
        .local_storage()
        .map_err(|_| "Failed to get localStorage")?
        .ok_or("localStorage not available")?;

    let json = serde_json::to_string(token).map_err(|e| e.to_string())?;
    storage
        .set_item(STORAGE_KEY_TOKEN, &json)
        .map_err(|_| "Failed to store token")?;
    Ok(())
}

/// Remove the persisted token. Idempotent; removing an absent token is fine.
#[cfg(not(feature = "ssr"))]
pub fn remove_token() -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let storage = window
        .local_storage()
        .map_err(|_| "Failed to get localStorage")?
        .ok_or("localStorage not available")?;
    storage
        .remove_item(STORAGE_KEY_TOKEN)
        .map_err(|_| "Failed to remove token")?;
    Ok(())
}

// SSR stubs: there is no localStorage on the server, so server-side rendering
// always sees an unauthenticated session.

#[cfg(feature = "ssr")]
pub fn get_token() -> Option<AuthToken> {
    None
}

#[cfg(feature = "ssr")]
pub fn set_token(_token: &AuthToken) -> Result<(), String> {
    Ok(())
}

#[cfg(feature = "ssr")]
pub fn remove_token() -> Result<(), String> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trips_through_json() {
        let token = AuthToken {
            access_token: "abc.def.ghi".to_string(),
            refresh_token: Some("refresh-123".to_string()),
        };

        let json = serde_json::to_string(&token).unwrap();
        let back: AuthToken = serde_json::from_str(&json).unwrap();

        assert_eq!(back, token);
    }

    #[test]
    fn test_refresh_token_is_optional_on_the_wire() {
        let token: AuthToken = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();

        assert_eq!(token.access_token, "abc");
        assert!(token.refresh_token.is_none());

        // Absent refresh token is omitted when serializing, not null
        let json = serde_json::to_string(&token).unwrap();
        assert!(!json.contains("refresh_token"));
    }

    #[test]
    fn test_get_token_is_none_without_storage() {
        // Native test builds have no browser storage, which is exactly the
        // degraded "unauthenticated" path.
        assert!(get_token().is_none());
    }
}
