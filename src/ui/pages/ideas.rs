//! Idea review page: filterable idea list and the review decision workflow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::auth::permissions;
use crate::core::idea::{self, Idea, IdeaStatus};
use crate::core::util::{RequestSequence, SEARCH_DEBOUNCE_MS, sleep_ms};
use crate::ui::common::{ErrorMessage, Spinner};
use crate::ui::guard::PermissionGated;
use crate::ui::layout::AdminLayout;

const STATUS_FILTERS: [(&str, Option<IdeaStatus>); 5] = [
    ("All", None),
    ("Submitted", Some(IdeaStatus::Submitted)),
    ("Under review", Some(IdeaStatus::UnderReview)),
    ("Accepted", Some(IdeaStatus::Accepted)),
    ("Rejected", Some(IdeaStatus::Rejected)),
];

/// Status filter for a select index. The index comes from a DOM value, so an
/// out-of-range or unparsable one falls back to "All" instead of panicking.
fn status_filter_at(index: usize) -> Option<IdeaStatus> {
    STATUS_FILTERS.get(index).and_then(|(_, status)| *status)
}

/// Idea review page component
#[component]
pub fn IdeasPage() -> impl IntoView {
    let ideas = RwSignal::new(Vec::<Idea>::new());
    let page = RwSignal::new(1u32);
    let page_count = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(0usize);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let selected = RwSignal::new(None::<Idea>);
    let review_comment = RwSignal::new(String::new());

    let sequence = RequestSequence::new();
    let load = {
        let sequence = sequence.clone();
        move |target_page: u32, debounced: bool| {
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
                let status = status_filter_at(status_filter.get_untracked());
                let query = search.get_untracked();
                // A superseded response must not touch anything, the spinner
                // included: the newest request will clear it.
                match idea::list_ideas(target_page, None, status, &query).await {
                    Ok(result) => {
                        if sequence.is_current(ticket) {
                            page.set(result.page);
                            page_count.set(result.page_count());
                            ideas.set(result.items);
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
            load(1, false);
        });
    }

    let open_idea = move |id: i64| {
        review_comment.set(String::new());
        spawn_local(async move {
            match idea::get_idea(id).await {
                Ok(full) => selected.set(Some(full)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let submit_review = {
        let load = load.clone();
        move |status: IdeaStatus| {
            let Some(current) = selected.get_untracked() else {
                return;
            };
            let load = load.clone();
            spawn_local(async move {
                let comment_val = review_comment.get_untracked();
                let comment = if comment_val.is_empty() {
                    None
                } else {
                    Some(comment_val.as_str())
                };
                match idea::review_idea(current.id, status, comment).await {
                    Ok(updated) => {
                        selected.set(Some(updated));
                        load(page.get_untracked(), false);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <AdminLayout>
            <h1 class="text-2xl font-bold text-theme-primary mb-6">"Ideas"</h1>

            <ErrorMessage error=Signal::derive(move || error.get()) />

            <div class="flex flex-wrap items-center gap-4 mb-4">
                <input
                    type="search"
                    placeholder="Search ideas..."
                    class="px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                    prop:value=move || search.get()
                    on:input={
                        let load = load.clone();
                        move |ev| {
                            search.set(event_target_value(&ev));
                            load(1, true);
                        }
                    }
                />
                <select
                    class="px-3 py-2 border border-theme rounded-lg bg-theme-primary"
                    on:change={
                        let load = load.clone();
                        move |ev| {
                            let index: usize = event_target_value(&ev).parse().unwrap_or(0);
                            status_filter.set(index.min(STATUS_FILTERS.len() - 1));
                            load(1, false);
                        }
                    }
                >
                    {STATUS_FILTERS
                        .iter()
                        .enumerate()
                        .map(|(index, (label, _))| {
                            view! { <option value=index.to_string()>{*label}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            {
                let submit_review = submit_review.clone();
                move || {
                let submit_review = submit_review.clone();
                selected.get().map(|current| {
                    let accept = {
                        let submit_review = submit_review.clone();
                        move |_| submit_review(IdeaStatus::Accepted)
                    };
                    let reject = {
                        let submit_review = submit_review.clone();
                        move |_| submit_review(IdeaStatus::Rejected)
                    };
                    let start_review = {
                        let submit_review = submit_review.clone();
                        move |_| submit_review(IdeaStatus::UnderReview)
                    };
                    view! {
                        <div class="mb-6 p-6 border border-theme rounded-lg">
                            <div class="flex items-center justify-between mb-2">
                                <h2 class="text-lg font-semibold text-theme-primary">
                                    {current.title.clone()}
                                </h2>
                                <button
                                    class="text-sm text-theme-secondary"
                                    on:click=move |_| selected.set(None)
                                >
                                    "Close"
                                </button>
                            </div>
                            <p class="text-sm text-theme-secondary mb-1">
                                {format!(
                                    "{} · submitted {} · {}",
                                    current.submitter_name,
                                    current.submitted_at,
                                    current.status.label(),
                                )}
                            </p>
                            <p class="text-theme-primary whitespace-pre-wrap mb-4">
                                {current.description.clone()}
                            </p>
                            {current
                                .reviewer_comment
                                .clone()
                                .map(|comment| {
                                    view! {
                                        <p class="text-sm text-theme-secondary italic mb-4">
                                            {format!("Reviewer: {}", comment)}
                                        </p>
                                    }
                                })}
                            <PermissionGated permission=permissions::REVIEW_IDEAS>
                                <textarea
                                    placeholder="Review comment (optional)"
                                    rows=3
                                    class="w-full px-3 py-2 border border-theme rounded-lg bg-theme-primary mb-3"
                                    prop:value=move || review_comment.get()
                                    on:input=move |ev| review_comment.set(event_target_value(&ev))
                                ></textarea>
                                <div class="flex gap-2">
                                    <button
                                        class="py-2 px-4 bg-accent-primary text-white rounded-lg hover:opacity-90"
                                        on:click=start_review.clone()
                                    >
                                        "Start review"
                                    </button>
                                    <button
                                        class="py-2 px-4 bg-green-600 text-white rounded-lg hover:opacity-90"
                                        on:click=accept.clone()
                                    >
                                        "Accept"
                                    </button>
                                    <button
                                        class="py-2 px-4 bg-red-600 text-white rounded-lg hover:opacity-90"
                                        on:click=reject.clone()
                                    >
                                        "Reject"
                                    </button>
                                </div>
                            </PermissionGated>
                        </div>
                    }
                })
            }}

            {move || {
                if loading.get() {
                    return view! { <Spinner centered=true /> }.into_any();
                }
                if ideas.get().is_empty() {
                    return view! {
                        <p class="text-sm text-theme-secondary py-10 text-center">
                            "No ideas match these filters."
                        </p>
                    }
                        .into_any();
                }

                view! {
                    <ul class="divide-y divide-theme border border-theme rounded-lg">
                        <For
                            each=move || ideas.get()
                            key=|idea| (idea.id, idea.status)
                            children=move |idea: Idea| {
                                view! {
                                    <li>
                                        <button
                                            class="w-full flex items-center justify-between p-4 text-left hover:bg-theme-secondary"
                                            on:click=move |_| open_idea(idea.id)
                                        >
                                            <div>
                                                <p class="font-medium text-theme-primary">{idea.title.clone()}</p>
                                                <p class="text-sm text-theme-secondary">
                                                    {idea.summary.clone().unwrap_or_default()}
                                                </p>
                                            </div>
                                            <span class="text-sm text-theme-tertiary">
                                                {idea.status.label()}
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
                    disabled={move || page.get() <= 1}
                    on:click={
                        let load = load.clone();
                        move |_| {
                            let current = page.get_untracked();
                            if current > 1 {
                                load(current - 1, false);
                            }
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
                    disabled={move || page.get() >= page_count.get()}
                    on:click={
                        let load = load.clone();
                        move |_| {
                            let current = page.get_untracked();
                            if current < page_count.get_untracked() {
                                load(current + 1, false);
                            }
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        </AdminLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_lookup_matches_the_select_options() {
        assert_eq!(status_filter_at(0), None);
        assert_eq!(status_filter_at(1), Some(IdeaStatus::Submitted));
        assert_eq!(status_filter_at(4), Some(IdeaStatus::Rejected));
    }

    #[test]
    fn test_out_of_range_filter_index_falls_back_to_all() {
        assert_eq!(status_filter_at(STATUS_FILTERS.len()), None);
        assert_eq!(status_filter_at(usize::MAX), None);
    }
}
