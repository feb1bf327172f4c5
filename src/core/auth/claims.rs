//! Claims extraction from the bearer token, plus the permission gate.
//!
//! The access token issued by the platform is a JWT whose payload embeds the
//! user's group id and permission ids. Decoding here is a parsing convenience
//! only: the signature and expiry are NOT verified, because the backend
//! independently validates the token on every API call. Consequently the
//! permission gate below is advisory UI state (show/hide controls), never a
//! security boundary — every mutating endpoint re-authorizes server-side.

use std::collections::HashSet;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use super::AuthError;
use super::token_store;

/// Permission ids used by the console, matching the backend's catalog.
pub mod permissions {
    pub const MANAGE_BLOG: u32 = 10;
    pub const MANAGE_CONTENT: u32 = 20;
    pub const MANAGE_CONTACT: u32 = 30;
    pub const REVIEW_IDEAS: u32 = 40;
    pub const MANAGE_STAGES: u32 = 50;
}

/// Claims decoded from the access token payload.
///
/// Derived, never stored: recomputed from the token string on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedClaims {
    pub user_group_id: i64,
    pub permissions: HashSet<u32>,
}

impl DecodedClaims {
    /// Membership check against the embedded permission set.
    pub fn allows(&self, permission: u32) -> bool {
        self.permissions.contains(&permission)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPayload {
    user_group_id: i64,
    #[serde(default)]
    permissions: Vec<u32>,
}

/// Decode the payload segment of a bearer token into [`DecodedClaims`].
///
/// Fails with [`AuthError::MalformedToken`] when the input is not a
/// three-segment token, the payload is not valid base64url, or the JSON does
/// not carry the expected claim fields.
pub fn decode_token(raw: &str) -> Result<DecodedClaims, AuthError> {
    let mut segments = raw.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::MalformedToken);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::MalformedToken)?;
    let payload: TokenPayload =
        serde_json::from_slice(&bytes).map_err(|_| AuthError::MalformedToken)?;

    Ok(DecodedClaims {
        user_group_id: payload.user_group_id,
        permissions: payload.permissions.into_iter().collect(),
    })
}

/// Answer whether the current user may perform `permission`.
///
/// Reads the stored token and decodes it on the spot; an absent or malformed
/// token yields `false` for every permission (fail-closed). Called from
/// render paths, so it must never panic or propagate a decode error.
pub fn has_permission(permission: u32) -> bool {
    match token_store::get_token() {
        Some(token) => decode_token(&token.access_token)
            .map(|claims| claims.allows(permission))
            .unwrap_or(false),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an unsigned token carrying the given payload JSON.
    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload);
        format!("{}.{}.sig", header, payload)
    }

    #[test]
    fn test_decode_extracts_group_and_permissions() {
        let token = make_token(r#"{"userGroupId":3,"permissions":[10,20]}"#);

        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.user_group_id, 3);
        assert!(claims.allows(10));
        assert!(claims.allows(20));
        assert!(!claims.allows(99));
    }

    #[test]
    fn test_decode_defaults_to_empty_permissions() {
        let token = make_token(r#"{"userGroupId":7}"#);

        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.user_group_id, 7);
        assert!(claims.permissions.is_empty());
    }

    #[test]
    fn test_not_a_jwt_is_malformed() {
        assert_eq!(decode_token("not-a-jwt"), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_wrong_segment_count_is_malformed() {
        assert_eq!(decode_token("a.b"), Err(AuthError::MalformedToken));
        assert_eq!(decode_token("a.b.c.d"), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_bad_base64_payload_is_malformed() {
        assert_eq!(
            decode_token("header.%%%.sig"),
            Err(AuthError::MalformedToken)
        );
    }

    #[test]
    fn test_payload_missing_claims_is_malformed() {
        let token = make_token(r#"{"sub":"someone"}"#);
        assert_eq!(decode_token(&token), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_gate_fails_closed_without_a_token() {
        // Native test builds never have a stored token; every permission is
        // denied rather than an error escaping to rendering code.
        assert!(!has_permission(permissions::MANAGE_BLOG));
        assert!(!has_permission(0));
    }
}
