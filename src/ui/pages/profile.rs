//! Profile page: lets the signed-in user complete or update their profile.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::auth::{self, UpdateProfileRequest};
use crate::ui::common::{ErrorMessage, SuccessMessage};
use crate::ui::layout::AdminLayout;
use crate::ui::auth::use_session_context;

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Profile page component
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session_context();

    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // Seed the form once the session resolves.
    Effect::new(move |_| {
        if let Some(user) = session.current_user() {
            full_name.set(user.full_name);
            phone.set(user.phone.unwrap_or_default());
            organization.set(user.organization.unwrap_or_default());
            bio.set(user.bio.unwrap_or_default());
        }
    });

    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if full_name.get().trim().is_empty() {
            error.set(Some("Full name is required".to_string()));
            return;
        }

        let request = UpdateProfileRequest {
            full_name: full_name.get_untracked().trim().to_string(),
            phone: optional(phone.get_untracked()),
            organization: optional(organization.get_untracked()),
            bio: optional(bio.get_untracked()),
        };
        spawn_local(async move {
            saving.set(true);
            error.set(None);
            match auth::update_profile(&request).await {
                Ok(user) => {
                    session.set_current_user(Some(user));
                    notice.set(Some("Profile saved".to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <AdminLayout>
            <h1 class="text-2xl font-bold text-theme-primary mb-2">"Profile"</h1>
            <Show when=move || {
                session
                    .current_user()
                    .map(|user| !user.profile_completed)
                    .unwrap_or(false)
            }>
                <p class="text-sm text-theme-secondary mb-4">
                    "Your profile is incomplete. Fill in the fields below to finish setting up your account."
                </p>
            </Show>

            <ErrorMessage error=Signal::derive(move || error.get()) />
            <SuccessMessage message=Signal::derive(move || notice.get()) />

            <form on:submit=handle_save class="max-w-lg space-y-4">
                <div>
                    <label class="block text-sm text-theme-secondary mb-1">"Full name"</label>
                    <input
                        type="text"
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm text-theme-secondary mb-1">"Phone"</label>
                    <input
                        type="tel"
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm text-theme-secondary mb-1">"Organization"</label>
                    <input
                        type="text"
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || organization.get()
                        on:input=move |ev| organization.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm text-theme-secondary mb-1">"About"</label>
                    <textarea
                        rows=4
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="py-2 px-4 bg-accent-primary text-white rounded-lg hover:opacity-90 disabled:opacity-50"
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </AdminLayout>
    }
}
