//! Login form component with email and password fields.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_session_context;

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Field-level validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_email = move || {
        let value = email.get();
        if value.is_empty() {
            email_error.set(Some("Email is required".to_string()));
            false
        } else if !value.contains('@') || !value.contains('.') {
            email_error.set(Some("Please enter a valid email".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    let validate_password = move || {
        let value = password.get();
        if value.is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        let email_valid = validate_email();
        let password_valid = validate_password();
        if !email_valid || !password_valid {
            return;
        }

        let email_val = email.get();
        let password_val = password.get();

        spawn_local(async move {
            if session.login(&email_val, &password_val).await.is_ok() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
            // On failure the message is already in session.error
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Administrator sign in"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign in to manage the innovation platform"
                </p>
            </div>

            // Error from the last login attempt
            {move || {
                session.error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                            <p class="text-sm text-red-700 dark:text-red-300">{error}</p>
                        </div>
                    }
                })
            }}

            <div>
                <label for="email" class="block text-sm font-medium text-theme-primary">
                    "Email"
                </label>
                <input
                    id="email"
                    type="email"
                    class="mt-1 w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                />
                {move || {
                    email_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-600">{error}</p> }
                    })
                }}
            </div>

            <div>
                <label for="password" class="block text-sm font-medium text-theme-primary">
                    "Password"
                </label>
                <input
                    id="password"
                    type="password"
                    class="mt-1 w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        password_error.set(None);
                    }
                />
                {move || {
                    password_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-600">{error}</p> }
                    })
                }}
            </div>

            <button
                type="submit"
                class="w-full py-2 px-4 bg-accent-primary text-white rounded-lg hover:opacity-90 disabled:opacity-50"
                disabled=move || session.loading.get()
            >
                {move || if session.loading.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
