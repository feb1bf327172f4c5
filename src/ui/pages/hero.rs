//! Hero-slide management page: carousel slide list with reordering and a
//! create/edit form (multipart, image upload).

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::hero::{self, HeroSlide};
use crate::ui::common::{ErrorMessage, Spinner, SuccessMessage};
use crate::ui::layout::AdminLayout;

/// Hero slide admin page component
#[component]
pub fn HeroPage() -> impl IntoView {
    let slides = RwSignal::new(Vec::<HeroSlide>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // Editor state; `editing_id` is None when creating a new slide
    let editor_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let title = RwSignal::new(String::new());
    let subtitle = RwSignal::new(String::new());
    let link_url = RwSignal::new(String::new());
    let active = RwSignal::new(true);
    let image_input: NodeRef<html::Input> = NodeRef::new();

    let load = move || {
        spawn_local(async move {
            loading.set(true);
            match hero::list_slides().await {
                Ok(items) => {
                    slides.set(items);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let open_editor = move |slide: Option<HeroSlide>| {
        match slide {
            Some(slide) => {
                editing_id.set(Some(slide.id));
                title.set(slide.title);
                subtitle.set(slide.subtitle.unwrap_or_default());
                link_url.set(slide.link_url.unwrap_or_default());
                active.set(slide.active);
            }
            None => {
                editing_id.set(None);
                title.set(String::new());
                subtitle.set(String::new());
                link_url.set(String::new());
                active.set(true);
            }
        }
        editor_open.set(true);
    };

    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if title.get().is_empty() {
            error.set(Some("Slide title is required".to_string()));
            return;
        }
        // A new slide needs an image; updates may keep the existing one.
        #[cfg(not(feature = "ssr"))]
        {
            let has_image = image_input
                .get_untracked()
                .and_then(|input| input.files())
                .map(|files| files.length() > 0)
                .unwrap_or(false);
            if editing_id.get_untracked().is_none() && !has_image {
                error.set(Some("New slides need an image".to_string()));
                return;
            }

            spawn_local(async move {
                let Ok(form) = web_sys::FormData::new() else {
                    error.set(Some("Failed to build form data".to_string()));
                    return;
                };
                let _ = form.append_with_str("title", &title.get_untracked());
                let _ = form.append_with_str("subtitle", &subtitle.get_untracked());
                let _ = form.append_with_str("linkUrl", &link_url.get_untracked());
                let _ = form.append_with_str(
                    "active",
                    if active.get_untracked() { "true" } else { "false" },
                );
                if let Some(file) = image_input
                    .get_untracked()
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0))
                {
                    let _ = form.append_with_blob("image", &file);
                }

                let result = match editing_id.get_untracked() {
                    Some(id) => hero::update_slide(id, form).await,
                    None => hero::create_slide(form).await,
                };

                match result {
                    Ok(_) => {
                        notice.set(Some("Slide saved".to_string()));
                        editor_open.set(false);
                        load();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let handle_delete = move |id: i64| {
        spawn_local(async move {
            match hero::delete_slide(id).await {
                Ok(()) => {
                    notice.set(Some("Slide deleted".to_string()));
                    load();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    // Swap the slide with its neighbour, then persist the whole order.
    let move_slide = move |id: i64, up: bool| {
        let mut current = slides.get_untracked();
        let Some(index) = current.iter().position(|slide| slide.id == id) else {
            return;
        };
        let target = if up {
            index.checked_sub(1)
        } else if index + 1 < current.len() {
            Some(index + 1)
        } else {
            None
        };
        let Some(target) = target else {
            return;
        };
        current.swap(index, target);
        let ids: Vec<i64> = current.iter().map(|slide| slide.id).collect();
        slides.set(current);
        spawn_local(async move {
            match hero::reorder_slides(&ids).await {
                Ok(()) => load(),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    // Local order is now speculative; reload the truth.
                    load();
                }
            }
        });
    };

    view! {
        <AdminLayout>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-theme-primary">"Hero slides"</h1>
                <button
                    class="py-2 px-4 bg-accent-primary text-white rounded-lg hover:opacity-90"
                    on:click=move |_| open_editor(None)
                >
                    "New slide"
                </button>
            </div>

            <ErrorMessage error=Signal::derive(move || error.get()) />
            <SuccessMessage message=Signal::derive(move || notice.get()) />

            <Show when=move || editor_open.get()>
                <form
                    on:submit=handle_save
                    class="mb-8 p-6 border border-theme rounded-lg space-y-4"
                >
                    <h2 class="text-lg font-semibold text-theme-primary">
                        {move || {
                            if editing_id.get().is_some() { "Edit slide" } else { "New slide" }
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
                        placeholder="Subtitle"
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || subtitle.get()
                        on:input=move |ev| subtitle.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Link URL"
                        class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                        prop:value=move || link_url.get()
                        on:input=move |ev| link_url.set(event_target_value(&ev))
                    />
                    <label class="flex items-center gap-2 text-sm text-theme-secondary">
                        <input
                            type="checkbox"
                            prop:checked=move || active.get()
                            on:change=move |ev| active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <div>
                        <label class="block text-sm text-theme-secondary mb-1">"Image"</label>
                        <input type="file" accept="image/*" node_ref=image_input />
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

            {move || {
                if loading.get() {
                    return view! { <Spinner centered=true /> }.into_any();
                }
                if slides.get().is_empty() {
                    return view! {
                        <p class="text-sm text-theme-secondary py-10 text-center">
                            "No slides yet."
                        </p>
                    }
                        .into_any();
                }

                let count = slides.get().len();
                view! {
                    <ul class="divide-y divide-theme border border-theme rounded-lg">
                        <For
                            each={move || slides.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(index, slide)| (*index, slide.id, slide.active)
                            children=move |(index, slide): (usize, HeroSlide)| {
                                let edit_target = slide.clone();
                                view! {
                                    <li class="flex items-center justify-between p-4">
                                        <div class="flex items-center gap-4">
                                            <img
                                                src=slide.image_url.clone()
                                                alt=slide.title.clone()
                                                class="w-20 h-12 object-cover rounded"
                                            />
                                            <div>
                                                <p class="font-medium text-theme-primary">{slide.title.clone()}</p>
                                                <p class="text-sm text-theme-secondary">
                                                    {if slide.active { "Active" } else { "Hidden" }}
                                                </p>
                                            </div>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <button
                                                class="text-sm text-theme-secondary hover:text-theme-primary disabled:opacity-50"
                                                disabled=index == 0
                                                on:click=move |_| move_slide(slide.id, true)
                                            >
                                                "Up"
                                            </button>
                                            <button
                                                class="text-sm text-theme-secondary hover:text-theme-primary disabled:opacity-50"
                                                disabled={index + 1 >= count}
                                                on:click=move |_| move_slide(slide.id, false)
                                            >
                                                "Down"
                                            </button>
                                            <button
                                                class="text-sm text-theme-secondary hover:text-theme-primary"
                                                on:click=move |_| open_editor(Some(edit_target.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="text-sm text-red-600 hover:text-red-700"
                                                on:click=move |_| handle_delete(slide.id)
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
        </AdminLayout>
    }
}
