//! Content manager page: dynamic pages and the public site's navigation
//! menu, side by side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::config::get_site_url;
use crate::core::menu::{self, MenuItem, MenuItemRequest};
use crate::core::page::{self, DynamicPage, DynamicPageRequest};
use crate::ui::common::{ErrorMessage, SuccessMessage};
use crate::ui::layout::AdminLayout;

/// Content manager page component
#[component]
pub fn ContentPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    view! {
        <AdminLayout>
            <h1 class="text-2xl font-bold text-theme-primary mb-6">"Site content"</h1>

            <ErrorMessage error=Signal::derive(move || error.get()) />
            <SuccessMessage message=Signal::derive(move || notice.get()) />

            <div class="grid lg:grid-cols-2 gap-8">
                <PagesSection error=error notice=notice />
                <MenuSection error=error notice=notice />
            </div>
        </AdminLayout>
    }
}

#[component]
fn PagesSection(
    error: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let pages = RwSignal::new(Vec::<DynamicPage>::new());
    let editing_id = RwSignal::new(None::<i64>);
    let title = RwSignal::new(String::new());
    let slug = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let published = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            match page::list_pages().await {
                Ok(items) => pages.set(items),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    Effect::new(move |_| {
        load();
    });

    let reset_form = move || {
        editing_id.set(None);
        title.set(String::new());
        slug.set(String::new());
        content.set(String::new());
        published.set(false);
    };

    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if title.get().is_empty() || slug.get().is_empty() {
            error.set(Some("Page title and slug are required".to_string()));
            return;
        }

        let request = DynamicPageRequest {
            title: title.get_untracked(),
            slug: slug.get_untracked(),
            content: content.get_untracked(),
            published: published.get_untracked(),
        };
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                Some(id) => page::update_page(id, &request).await,
                None => page::create_page(&request).await,
            };
            match result {
                Ok(_) => {
                    notice.set(Some("Page saved".to_string()));
                    reset_form();
                    load();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn_local(async move {
            match page::delete_page(id).await {
                Ok(()) => {
                    notice.set(Some("Page deleted".to_string()));
                    load();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let start_edit = move |item: DynamicPage| {
        editing_id.set(Some(item.id));
        title.set(item.title);
        slug.set(item.slug);
        content.set(item.content);
        published.set(item.published);
    };

    view! {
        <section>
            <h2 class="text-lg font-semibold text-theme-primary mb-4">"Pages"</h2>

            <form on:submit=handle_save class="space-y-3 mb-6 p-4 border border-theme rounded-lg">
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
                <textarea
                    placeholder="Content"
                    rows=6
                    class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <label class="flex items-center gap-2 text-sm text-theme-secondary">
                    <input
                        type="checkbox"
                        prop:checked=move || published.get()
                        on:change=move |ev| published.set(event_target_checked(&ev))
                    />
                    "Published"
                </label>
                <div class="flex gap-2">
                    <button
                        type="submit"
                        class="py-2 px-4 bg-accent-primary text-white rounded-lg hover:opacity-90"
                    >
                        {move || if editing_id.get().is_some() { "Update page" } else { "Create page" }}
                    </button>
                    <Show when=move || editing_id.get().is_some()>
                        <button
                            type="button"
                            class="py-2 px-4 border border-theme rounded-lg text-theme-secondary"
                            on:click=move |_| reset_form()
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>

            <ul class="divide-y divide-theme border border-theme rounded-lg">
                <For
                    each=move || pages.get()
                    key=|item| (item.id, item.published)
                    children=move |item: DynamicPage| {
                        let edit_target = item.clone();
                        view! {
                            <li class="flex items-center justify-between p-3">
                                <div>
                                    <p class="text-theme-primary">{item.title.clone()}</p>
                                    <p class="text-sm text-theme-secondary">
                                        {format!("/{} · {}", item.slug, if item.published { "published" } else { "draft" })}
                                    </p>
                                </div>
                                <div class="flex items-center gap-2">
                                    <a
                                        href=get_site_url(&item.slug)
                                        target="_blank"
                                        class="text-sm text-theme-secondary hover:text-theme-primary"
                                    >
                                        "View"
                                    </a>
                                    <button
                                        class="text-sm text-theme-secondary hover:text-theme-primary"
                                        on:click=move |_| start_edit(edit_target.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="text-sm text-red-600 hover:text-red-700"
                                        on:click=move |_| handle_delete(item.id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

#[component]
fn MenuSection(
    error: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let items = RwSignal::new(Vec::<MenuItem>::new());
    let editing_id = RwSignal::new(None::<i64>);
    let label = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let parent_id = RwSignal::new(None::<i64>);
    let position = RwSignal::new(0u32);

    let load = move || {
        spawn_local(async move {
            match menu::list_menu().await {
                Ok(tree) => items.set(tree),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    Effect::new(move |_| {
        load();
    });

    let reset_form = move || {
        editing_id.set(None);
        label.set(String::new());
        url.set(String::new());
        parent_id.set(None);
        position.set(0);
    };

    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if label.get().is_empty() || url.get().is_empty() {
            error.set(Some("Menu label and URL are required".to_string()));
            return;
        }

        let request = MenuItemRequest {
            label: label.get_untracked(),
            url: url.get_untracked(),
            parent_id: parent_id.get_untracked(),
            position: position.get_untracked(),
        };
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                Some(id) => menu::update_item(id, &request).await,
                None => menu::create_item(&request).await,
            };
            match result {
                Ok(_) => {
                    notice.set(Some("Menu saved".to_string()));
                    reset_form();
                    load();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn_local(async move {
            match menu::delete_item(id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let start_edit = move |item: &MenuItem| {
        editing_id.set(Some(item.id));
        label.set(item.label.clone());
        url.set(item.url.clone());
        parent_id.set(item.parent_id);
        position.set(item.position);
    };

    // Flatten the tree for rendering: (depth, item) pairs, children after
    // their parent.
    let flattened = move || {
        fn walk(nodes: &[MenuItem], depth: u32, out: &mut Vec<(u32, MenuItem)>) {
            for node in nodes {
                out.push((depth, node.clone()));
                walk(&node.children, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(&items.get(), 0, &mut out);
        out
    };

    view! {
        <section>
            <h2 class="text-lg font-semibold text-theme-primary mb-4">"Navigation menu"</h2>

            <form on:submit=handle_save class="space-y-3 mb-6 p-4 border border-theme rounded-lg">
                <input
                    type="text"
                    placeholder="Label"
                    class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                    prop:value=move || label.get()
                    on:input=move |ev| label.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="URL"
                    class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
                <div class="flex gap-3">
                    <select
                        class="flex-1 px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        on:change=move |ev| {
                            parent_id.set(event_target_value(&ev).parse().ok());
                        }
                    >
                        <option value="">"(top level)"</option>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <option
                                            value=item.id.to_string()
                                            selected=move || parent_id.get() == Some(item.id)
                                        >
                                            {item.label.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <input
                        type="number"
                        min="0"
                        class="w-24 px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || position.get().to_string()
                        on:input=move |ev| {
                            position.set(event_target_value(&ev).parse().unwrap_or(0));
                        }
                    />
                </div>
                <div class="flex gap-2">
                    <button
                        type="submit"
                        class="py-2 px-4 bg-accent-primary text-white rounded-lg hover:opacity-90"
                    >
                        {move || if editing_id.get().is_some() { "Update item" } else { "Add item" }}
                    </button>
                    <Show when=move || editing_id.get().is_some()>
                        <button
                            type="button"
                            class="py-2 px-4 border border-theme rounded-lg text-theme-secondary"
                            on:click=move |_| reset_form()
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>

            <ul class="divide-y divide-theme border border-theme rounded-lg">
                <For
                    each=flattened
                    key=|(depth, item)| (*depth, item.id)
                    children=move |(depth, item): (u32, MenuItem)| {
                        let edit_target = item.clone();
                        view! {
                            <li class="flex items-center justify-between p-3">
                                <div style=format!("padding-left: {}rem", depth)>
                                    <p class="text-theme-primary">{item.label.clone()}</p>
                                    <p class="text-sm text-theme-secondary">{item.url.clone()}</p>
                                </div>
                                <div class="flex items-center gap-2">
                                    <button
                                        class="text-sm text-theme-secondary hover:text-theme-primary"
                                        on:click=move |_| start_edit(&edit_target)
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="text-sm text-red-600 hover:text-red-700"
                                        on:click=move |_| handle_delete(item.id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
