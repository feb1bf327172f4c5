//! Rendering guards for protected and permission-sensitive UI.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::auth::has_permission;
use crate::ui::auth::{SessionState, use_session_context};
use crate::ui::common::Spinner;

/// Gate protected children behind session initialization.
///
/// While the session is `Initializing` a spinner is shown instead of the
/// children, so protected content never renders before the stored token has
/// been validated. Once the session resolves `Unauthenticated`, the user is
/// sent to the login page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();

    Effect::new(move |_| {
        if matches!(session.state.get(), SessionState::Unauthenticated) {
            let navigate = use_navigate();
            navigate("/login", Default::default());
        }
    });

    view! {
        {move || {
            match session.state.get() {
                SessionState::Initializing => view! { <Spinner centered=true /> }.into_any(),
                SessionState::Unauthenticated => ().into_any(),
                SessionState::Authenticated(_) => children().into_any(),
            }
        }}
    }
}

/// Render children only when the current user holds `permission`.
///
/// Purely advisory (hides affordances the backend would reject anyway);
/// the backend re-authorizes every mutating call regardless of what the
/// client shows.
#[component]
pub fn PermissionGated(permission: u32, children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();

    view! {
        {move || {
            // Subscribe to session state so the gate re-evaluates on
            // login/logout, then check the decoded token claims.
            let _ = session.state.get();
            if has_permission(permission) {
                Some(children())
            } else {
                None
            }
        }}
    }
}
