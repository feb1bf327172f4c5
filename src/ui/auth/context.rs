//! Session context: the single owner of authentication state.
//!
//! Holds the current user and token pair behind Leptos signals, so every
//! subscribed view observes state transitions within the same rendering pass.
//! All mutation goes through the methods here; the rest of the app only
//! reads. The persisted half of the session lives in
//! [`crate::core::auth::token_store`].

use leptos::prelude::*;

use crate::core::api::ApiError;
use crate::core::auth::api as auth_api;
use crate::core::auth::token_store::{self, AuthToken};
use crate::core::auth::{AuthError, CurrentUser, decode_token};

/// Session lifecycle.
///
/// `Initializing` is entered exactly once at startup and left for one of the
/// two resolved states; afterwards the session moves between `Authenticated`
/// and `Unauthenticated` only via explicit login/logout.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Startup: the stored token (if any) is being validated.
    #[default]
    Initializing,
    /// No usable session.
    Unauthenticated,
    /// Token validated and profile loaded.
    Authenticated(CurrentUser),
}

/// Session context provided at the root of the component tree.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session state; readable from any view.
    pub state: RwSignal<SessionState>,
    /// In-memory mirror of the persisted token.
    token: RwSignal<Option<AuthToken>>,
    /// True while a login request is in flight.
    pub loading: RwSignal<bool>,
    /// Message from the last failed auth operation, for the login form.
    pub error: RwSignal<Option<String>>,
}

impl SessionContext {
    /// Fresh context in the `Initializing` state.
    pub fn new() -> Self {
        SessionContext {
            state: RwSignal::new(SessionState::Initializing),
            token: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Whether initialization has resolved, one way or the other.
    pub fn is_ready(&self) -> bool {
        !matches!(self.state.get(), SessionState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), SessionState::Authenticated(_))
    }

    /// Current user profile, when authenticated.
    pub fn current_user(&self) -> Option<CurrentUser> {
        match self.state.get() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Access token, read untracked since callers are request wrappers, not
    /// reactive views.
    pub fn access_token(&self) -> Option<String> {
        self.token.get_untracked().map(|t| t.access_token)
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Low-level setter: persist or remove the token and mirror it in
    /// memory. Used by login, logout and initialization.
    pub fn save_auth(&self, auth: Option<AuthToken>) {
        match &auth {
            Some(token) => {
                if let Err(e) = token_store::set_token(token) {
                    leptos::logging::warn!("failed to persist auth token: {}", e);
                }
            }
            None => {
                let _ = token_store::remove_token();
            }
        }
        self.token.set(auth);
    }

    /// Replace the in-memory profile without touching the token. Used after
    /// profile-edit flows to refresh displayed data.
    pub fn set_current_user(&self, user: Option<CurrentUser>) {
        match user {
            Some(user) => self.state.set(SessionState::Authenticated(user)),
            None => self.state.set(SessionState::Unauthenticated),
        }
    }

    /// Log in with credentials.
    ///
    /// On success the token is persisted, the profile fetched, and the
    /// session becomes `Authenticated`. On failure session state is left
    /// untouched and the error is both stored for display and returned.
    pub async fn login(self, email: &str, password: &str) -> Result<(), AuthError> {
        self.loading.set(true);
        self.error.set(None);

        let result = async {
            let token = auth_api::sign_in(email, password).await?;
            self.save_auth(Some(token));

            match auth_api::fetch_current_user().await {
                Ok(user) => {
                    self.state.set(SessionState::Authenticated(user));
                    Ok(())
                }
                Err(e) => {
                    // A token that cannot resolve a profile is useless; drop
                    // it again so we do not keep half a session.
                    self.save_auth(None);
                    Err(AuthError::Api(e))
                }
            }
        }
        .await;

        self.loading.set(false);
        if let Err(ref e) = result {
            self.error.set(Some(e.to_string()));
        }
        result
    }

    /// Log out. The backend notification is best effort: a failure is logged
    /// and ignored, local invalidation is authoritative. Navigation back to
    /// the login page is the caller's job.
    pub async fn logout(self) {
        let refresh_token = self
            .token
            .get_untracked()
            .and_then(|t| t.refresh_token);

        let result = auth_api::sign_out(refresh_token).await;
        self.finish_logout(result);
    }

    /// Apply the outcome of the sign-out call. Local state clears no matter
    /// what the server said.
    pub fn finish_logout(&self, sign_out_result: Result<(), ApiError>) {
        if let Err(e) = sign_out_result {
            leptos::logging::warn!("logout notification failed: {}", e);
        }
        self.save_auth(None);
        self.state.set(SessionState::Unauthenticated);
    }

    /// Resolve startup from the profile fetched with the stored token.
    ///
    /// A profile means the token works: the session becomes `Authenticated`.
    /// Any failure means the token is useless; it is removed and the session
    /// resolves `Unauthenticated`.
    pub fn resolve_initialization(&self, fetched: Result<CurrentUser, ApiError>) {
        match fetched {
            Ok(user) => {
                self.state.set(SessionState::Authenticated(user));
            }
            Err(e) => {
                leptos::logging::log!("stored token rejected, clearing session: {}", e);
                let _ = token_store::remove_token();
                self.token.set(None);
                self.state.set(SessionState::Unauthenticated);
            }
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the session context and kick off initialization.
///
/// Initialization runs client-side after hydration: with no stored token the
/// session resolves straight to `Unauthenticated`; with one, the profile is
/// fetched using it, and any failure (undecodable token included) clears the
/// store and resolves to `Unauthenticated`. This is the only place automatic
/// logout-on-failure happens.
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            let Some(stored) = token_store::get_token() else {
                ctx.state.set(SessionState::Unauthenticated);
                return;
            };

            // A token we cannot even parse will never authenticate a
            // request; discard it up front.
            if decode_token(&stored.access_token).is_err() {
                let _ = token_store::remove_token();
                ctx.state.set(SessionState::Unauthenticated);
                return;
            }

            ctx.token.set(Some(stored));
            spawn_local(async move {
                let fetched = auth_api::fetch_current_user().await;
                ctx.resolve_initialization(fetched);
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree.
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> CurrentUser {
        CurrentUser {
            id: 1,
            email: "ana@example.org".to_string(),
            full_name: "Ana Petrova".to_string(),
            user_group_id: 3,
            phone: None,
            organization: None,
            bio: None,
            avatar_url: None,
            profile_completed: true,
        }
    }

    fn sample_token() -> AuthToken {
        AuthToken {
            access_token: "head.body.sig".to_string(),
            refresh_token: Some("refresh-1".to_string()),
        }
    }

    #[test]
    fn test_default_state_is_initializing() {
        let owner = Owner::new();
        owner.set();
        assert_eq!(SessionState::default(), SessionState::Initializing);
        assert_eq!(
            SessionContext::new().state.get_untracked(),
            SessionState::Initializing
        );
    }

    #[test]
    fn test_authenticated_carries_the_profile() {
        let user = sample_user();

        let state = SessionState::Authenticated(user.clone());

        match state {
            SessionState::Authenticated(current) => assert_eq!(current, user),
            _ => panic!("expected authenticated state"),
        }
    }

    #[test]
    fn test_logout_clears_local_state_even_when_the_server_rejects() {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new();
        ctx.save_auth(Some(sample_token()));
        ctx.state.set(SessionState::Authenticated(sample_user()));

        ctx.finish_logout(Err(ApiError::Status {
            status: 500,
            message: "session service unavailable".to_string(),
        }));

        assert_eq!(ctx.state.get_untracked(), SessionState::Unauthenticated);
        assert!(ctx.access_token().is_none());
    }

    #[test]
    fn test_logout_clears_local_state_on_network_failure() {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new();
        ctx.save_auth(Some(sample_token()));
        ctx.state.set(SessionState::Authenticated(sample_user()));

        ctx.finish_logout(Err(ApiError::Network("connection refused".to_string())));

        assert_eq!(ctx.state.get_untracked(), SessionState::Unauthenticated);
        assert!(ctx.access_token().is_none());
    }

    #[test]
    fn test_failed_profile_fetch_resolves_unauthenticated_and_drops_the_token() {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new();
        ctx.save_auth(Some(sample_token()));

        ctx.resolve_initialization(Err(ApiError::Status {
            status: 401,
            message: "token expired".to_string(),
        }));

        assert_eq!(ctx.state.get_untracked(), SessionState::Unauthenticated);
        assert!(ctx.access_token().is_none());
    }

    #[test]
    fn test_fetched_profile_resolves_authenticated_and_keeps_the_token() {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new();
        ctx.save_auth(Some(sample_token()));

        ctx.resolve_initialization(Ok(sample_user()));

        assert_eq!(
            ctx.state.get_untracked(),
            SessionState::Authenticated(sample_user())
        );
        assert_eq!(ctx.access_token().as_deref(), Some("head.body.sig"));
    }
}
