//! Login page component
//!
//! A standalone page for administrator login, redirects to the dashboard on
//! success or when already authenticated.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{LoginForm, SessionState, use_session_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if matches!(session.state.get(), SessionState::Authenticated(_)) {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let navigate = use_navigate();
    let on_success = move |_| {
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center h-16">
                        <A href="/" attr:class="text-xl font-bold text-theme-primary">
                            "Innova Console"
                        </A>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <LoginForm on_success=Callback::new(on_success) />
                </div>
            </main>

            <footer class="py-4 border-t border-theme">
                <p class="text-center text-sm text-theme-tertiary">
                    "Administrator access only."
                </p>
            </footer>
        </div>
    }
}
