//! Contact inbox page: messages from the public contact form, with read
//! triage and deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::contact::{self, ContactMessage};
use crate::ui::common::{ErrorMessage, Spinner};
use crate::ui::layout::AdminLayout;

/// Contact inbox page component
#[component]
pub fn ContactPage() -> impl IntoView {
    let messages = RwSignal::new(Vec::<ContactMessage>::new());
    let page = RwSignal::new(1u32);
    let page_count = RwSignal::new(1u32);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<ContactMessage>);

    let load = move |target_page: u32| {
        spawn_local(async move {
            loading.set(true);
            match contact::list_messages(target_page).await {
                Ok(result) => {
                    page.set(result.page);
                    page_count.set(result.page_count());
                    messages.set(result.items);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        load(1);
    });

    let open_message = move |message: ContactMessage| {
        let id = message.id;
        let already_read = message.read;
        selected.set(Some(message));
        if !already_read {
            spawn_local(async move {
                match contact::mark_read(id).await {
                    Ok(updated) => {
                        selected.set(Some(updated));
                        load(page.get_untracked());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_delete = move |id: i64| {
        spawn_local(async move {
            match contact::delete_message(id).await {
                Ok(()) => {
                    selected.set(None);
                    load(page.get_untracked());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <AdminLayout>
            <h1 class="text-2xl font-bold text-theme-primary mb-6">"Contact messages"</h1>

            <ErrorMessage error=Signal::derive(move || error.get()) />

            {move || {
                selected.get().map(|message| {
                    view! {
                        <div class="mb-6 p-6 border border-theme rounded-lg">
                            <div class="flex items-center justify-between mb-2">
                                <h2 class="text-lg font-semibold text-theme-primary">
                                    {message.subject.clone().unwrap_or_else(|| "(no subject)".to_string())}
                                </h2>
                                <div class="flex items-center gap-3">
                                    <button
                                        class="text-sm text-red-600 hover:text-red-700"
                                        on:click=move |_| handle_delete(message.id)
                                    >
                                        "Delete"
                                    </button>
                                    <button
                                        class="text-sm text-theme-secondary"
                                        on:click=move |_| selected.set(None)
                                    >
                                        "Close"
                                    </button>
                                </div>
                            </div>
                            <p class="text-sm text-theme-secondary mb-4">
                                {format!("{} <{}> on {}", message.name, message.email, message.created_at)}
                            </p>
                            <p class="text-theme-primary whitespace-pre-wrap">{message.message.clone()}</p>
                        </div>
                    }
                })
            }}

            {move || {
                if loading.get() {
                    return view! { <Spinner centered=true /> }.into_any();
                }
                if messages.get().is_empty() {
                    return view! {
                        <p class="text-sm text-theme-secondary py-10 text-center">
                            "The inbox is empty."
                        </p>
                    }
                        .into_any();
                }

                view! {
                    <ul class="divide-y divide-theme border border-theme rounded-lg">
                        <For
                            each=move || messages.get()
                            key=|message| (message.id, message.read)
                            children=move |message: ContactMessage| {
                                let row = message.clone();
                                let weight = if message.read { "font-normal" } else { "font-semibold" };
                                view! {
                                    <li>
                                        <button
                                            class="w-full flex items-center justify-between p-4 text-left hover:bg-theme-secondary"
                                            on:click=move |_| open_message(row.clone())
                                        >
                                            <div>
                                                <p class=format!("text-theme-primary {}", weight)>
                                                    {message.name.clone()}
                                                </p>
                                                <p class="text-sm text-theme-secondary">
                                                    {message.subject.clone().unwrap_or_else(|| "(no subject)".to_string())}
                                                </p>
                                            </div>
                                            <span class="text-sm text-theme-tertiary">
                                                {message.created_at.clone()}
                                            </span>
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                }
                    .into_any()
            }}

            <div class="flex items-center justify-center gap-4 mt-6">
                <button
                    class="text-sm text-theme-secondary disabled:opacity-50"
                    disabled=move || page.get() <= 1
                    on:click=move |_| {
                        let current = page.get_untracked();
                        if current > 1 {
                            load(current - 1);
                        }
                    }
                >
                    "Previous"
                </button>
                <span class="text-sm text-theme-secondary">
                    {move || format!("Page {} of {}", page.get(), page_count.get().max(1))}
                </span>
                <button
                    class="text-sm text-theme-secondary disabled:opacity-50"
                    disabled=move || page.get() >= page_count.get()
                    on:click=move |_| {
                        let current = page.get_untracked();
                        if current < page_count.get_untracked() {
                            load(current + 1);
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        </AdminLayout>
    }
}
