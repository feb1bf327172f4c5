//! Header widget showing who is signed in, with profile and logout actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::{SessionState, use_session_context};

/// User menu component
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = use_session_context();

    let navigate = use_navigate();
    let handle_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            session.logout().await;
            navigate("/login", Default::default());
        });
    };

    view! {
        {move || {
            match session.state.get() {
                SessionState::Authenticated(user) => {
                    view! {
                        <div class="flex items-center gap-4">
                            <A href="/profile" attr:class="text-sm text-theme-secondary hover:text-theme-primary">
                                {user.full_name.clone()}
                            </A>
                            <button
                                class="text-sm text-theme-secondary hover:text-red-600"
                                on:click=handle_logout.clone()
                            >
                                "Sign out"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                _ => {
                    view! {
                        <A href="/login" attr:class="text-sm text-theme-secondary hover:text-theme-primary">
                            "Sign in"
                        </A>
                    }
                        .into_any()
                }
            }
        }}
    }
}
