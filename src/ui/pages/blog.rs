//! Blog administration page: searchable post list with publish, delete and a
//! create/edit form (multipart, optional cover image).

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::blog::{self, BlogPost};
use crate::core::util::{RequestSequence, SEARCH_DEBOUNCE_MS, sleep_ms};
use crate::ui::common::{ErrorMessage, Spinner, SuccessMessage};
use crate::ui::layout::AdminLayout;

/// Blog admin page component
#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = RwSignal::new(Vec::<BlogPost>::new());
    let page = RwSignal::new(1u32);
    let page_count = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // Editor state; `editing_id` is None when creating a new post
    let editor_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let title = RwSignal::new(String::new());
    let slug = RwSignal::new(String::new());
    let summary = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let cover_input: NodeRef<html::Input> = NodeRef::new();

    // Search fires a request per keystroke; only the newest ticket may
    // update the list, so slow responses cannot clobber fresh ones.
    let sequence = RequestSequence::new();
    let load = {
        let sequence = sequence.clone();
        move |target_page: u32, query: String, debounced: bool| {
            let sequence = sequence.clone();
            let ticket = sequence.begin();
            spawn_local(async move {
                if debounced {
                    sleep_ms(SEARCH_DEBOUNCE_MS).await;
                    if !sequence.is_current(ticket) {
                        return;
                    }
                }
                loading.set(true);
                // A superseded response must not touch anything, the spinner
                // included: the newest request will clear it.
                match blog::list_posts(target_page, &query).await {
                    Ok(result) => {
                        if sequence.is_current(ticket) {
                            page.set(result.page);
                            page_count.set(result.page_count());
                            posts.set(result.items);
                            error.set(None);
                            loading.set(false);
                        }
                    }
                    Err(e) => {
                        if sequence.is_current(ticket) {
                            error.set(Some(e.to_string()));
                            loading.set(false);
                        }
                    }
                }
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move |_| {
            load(1, String::new(), false);
        });
    }

    let on_search_input = {
        let load = load.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            search.set(value.clone());
            load(1, value, true);
        }
    };

    let open_editor = move |post: Option<BlogPost>| {
        match post {
            Some(post) => {
                editing_id.set(Some(post.id));
                title.set(post.title);
                slug.set(post.slug);
                summary.set(post.summary.unwrap_or_default());
                content.set(post.content);
            }
            None => {
                editing_id.set(None);
                title.set(String::new());
                slug.set(String::new());
                summary.set(String::new());
                content.set(String::new());
            }
        }
        editor_open.set(true);
    };

    let handle_save = {
        let load = load.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            if title.get().is_empty() || slug.get().is_empty() {
                error.set(Some("Title and slug are required".to_string()));
                return;
            }

            #[cfg(not(feature = "ssr"))]
            {
                let load = load.clone();
                spawn_local(async move {
                    let Ok(form) = web_sys::FormData::new() else {
                        error.set(Some("Failed to build form data".to_string()));
                        return;
                    };
                    let _ = form.append_with_str("title", &title.get_untracked());
                    let _ = form.append_with_str("slug", &slug.get_untracked());
                    let _ = form.append_with_str("summary", &summary.get_untracked());
                    let _ = form.append_with_str("content", &content.get_untracked());
                    if let Some(file) = cover_input
                        .get_untracked()
                        .and_then(|input| input.files())
                        .and_then(|files| files.get(0))
                    {
                        let _ = form.append_with_blob("coverImage", &file);
                    }

                    let result = match editing_id.get_untracked() {
                        Some(id) => blog::api::update_post(id, form).await,
                        None => blog::api::create_post(form).await,
                    };

                    match result {
                        Ok(_) => {
                            notice.set(Some("Post saved".to_string()));
                            editor_open.set(false);
                            load(page.get_untracked(), search.get_untracked(), false);
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            }
        }
    };

    let toggle_published = {
        let load = load.clone();
        move |post: &BlogPost| {
            let id = post.id;
            let published = !post.published;
            let load = load.clone();
            spawn_local(async move {
                match blog::set_published(id, published).await {
                    Ok(_) => load(page.get_untracked(), search.get_untracked(), false),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_delete = {
        let load = load.clone();
        move |id: i64| {
            let load = load.clone();
            spawn_local(async move {
                match blog::delete_post(id).await {
                    Ok(()) => {
                        notice.set(Some("Post deleted".to_string()));
                        load(page.get_untracked(), search.get_untracked(), false);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let go_to_page = {
        let load = load.clone();
        move |target: u32| {
            load(target, search.get_untracked(), false);
        }
    };
    let go_prev = {
        let go_to_page = go_to_page.clone();
        move |_: leptos::ev::MouseEvent| {
            let current = page.get_untracked();
            if current > 1 {
                go_to_page(current - 1);
            }
        }
    };
    let go_next = {
        let go_to_page = go_to_page.clone();
        move |_: leptos::ev::MouseEvent| {
            let current = page.get_untracked();
            if current < page_count.get_untracked() {
                go_to_page(current + 1);
            }
        }
    };

    view! {
        <AdminLayout>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-theme-primary">"Blog posts"</h1>
                <button
                    class="py-2 px-4 bg-accent-primary text-white rounded-lg hover:opacity-90"
                    on:click=move |_| open_editor(None)
                >
                    "New post"
                </button>
            </div>

            <ErrorMessage error=Signal::derive(move || error.get()) />
            <SuccessMessage message=Signal::derive(move || notice.get()) />

            <div class="mb-4">
                <input
                    type="search"
                    placeholder="Search posts..."
                    class="w-full max-w-sm px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                    prop:value=move || search.get()
                    on:input=on_search_input.clone()
                />
            </div>

            <Show when=move || editor_open.get()>
                <form
                    on:submit=handle_save.clone()
                    class="mb-8 p-6 border border-theme rounded-lg space-y-4"
                >
                    <h2 class="text-lg font-semibold text-theme-primary">
                        {move || {
                            if editing_id.get().is_some() { "Edit post" } else { "New post" }
                        }}
                    </h2>
                    <input
                        type="text"
                        placeholder="Title"
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Slug"
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || slug.get()
                        on:input=move |ev| slug.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Summary"
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || summary.get()
                        on:input=move |ev| summary.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Content"
                        rows=10
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    <div>
                        <label class="block text-sm text-theme-secondary mb-1">"Cover image"</label>
                        <input type="file" accept="image/*" node_ref=cover_input />
                    </div>
                    <div class="flex gap-2">
                        <button
                            type="submit"
                            class="py-2 px-4 bg-accent-primary text-white rounded-lg hover:opacity-90"
                        >
                            "Save"
                        </button>
                        <button
                            type="button"
                            class="py-2 px-4 border border-theme rounded-lg text-theme-secondary"
                            on:click=move |_| editor_open.set(false)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            {
                let toggle_published = toggle_published.clone();
                let handle_delete = handle_delete.clone();
                move || {
                if loading.get() {
                    return view! { <Spinner centered=true /> }.into_any();
                }
                if posts.get().is_empty() {
                    return view! {
                        <p class="text-sm text-theme-secondary py-10 text-center">
                            "No posts match this search."
                        </p>
                    }
                        .into_any();
                }

                let toggle_published = toggle_published.clone();
                let handle_delete = handle_delete.clone();
                let open_editor = open_editor.clone();
                view! {
                    <ul class="divide-y divide-theme border border-theme rounded-lg">
                        <For
                            each=move || posts.get()
                            key=|post| (post.id, post.published)
                            children=move |post: BlogPost| {
                                let toggle_published = toggle_published.clone();
                                let handle_delete = handle_delete.clone();
                                let open_editor = open_editor.clone();
                                let toggle_target = post.clone();
                                let edit_target = post.clone();
                                view! {
                                    <li class="flex items-center justify-between p-4">
                                        <div>
                                            <p class="font-medium text-theme-primary">{post.title.clone()}</p>
                                            <p class="text-sm text-theme-secondary">
                                                {if post.published { "Published" } else { "Draft" }}
                                            </p>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <button
                                                class="text-sm text-theme-secondary hover:text-theme-primary"
                                                on:click=move |_| toggle_published(&toggle_target)
                                            >
                                                {if post.published { "Unpublish" } else { "Publish" }}
                                            </button>
                                            <button
                                                class="text-sm text-theme-secondary hover:text-theme-primary"
                                                on:click=move |_| open_editor(Some(edit_target.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="text-sm text-red-600 hover:text-red-700"
                                                on:click=move |_| handle_delete(post.id)
                                            >
                                                "Delete"
                                            </button>
                                        </div>
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
                    on:click=go_prev.clone()
                >
                    "Previous"
                </button>
                <span class="text-sm text-theme-secondary">
                    {move || format!("Page {} of {}", page.get(), page_count.get().max(1))}
                </span>
                <button
                    class="text-sm text-theme-secondary disabled:opacity-50"
                    disabled={move || page.get() >= page_count.get()}
                    on:click=go_next.clone()
                >
                    "Next"
                </button>
            </div>
        </AdminLayout>
    }
}
