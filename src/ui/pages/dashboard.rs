//! Dashboard page: idea counts by status and the currently open call stage.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::idea::{self, IdeaStats};
use crate::core::stage::{self, CallStage};
use crate::ui::common::{ErrorMessage, Spinner};
use crate::ui::layout::AdminLayout;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<IdeaStats>);
    let active = RwSignal::new(None::<CallStage>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match idea::idea_stats().await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => error.set(Some(e.to_string())),
            }
            match stage::active_stage().await {
                Ok(s) => active.set(s),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <AdminLayout>
            <h1 class="text-2xl font-bold text-theme-primary mb-6">"Dashboard"</h1>

            <ErrorMessage error=Signal::derive(move || error.get()) />

            {move || {
                if loading.get() {
                    return view! { <Spinner centered=true /> }.into_any();
                }

                view! {
                    <div class="space-y-8">
                        {move || {
                            stats.get().map(|s| {
                                view! {
                                    <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                                        <StatCard label="Total ideas" value=s.total />
                                        <StatCard label="Submitted" value=s.submitted />
                                        <StatCard label="Under review" value=s.under_review />
                                        <StatCard label="Accepted" value=s.accepted />
                                        <StatCard label="Rejected" value=s.rejected />
                                    </div>
                                }
                            })
                        }}

                        <div class="p-6 border border-theme rounded-lg">
                            <h2 class="text-lg font-semibold text-theme-primary mb-2">
                                "Current call stage"
                            </h2>
                            {move || {
                                match active.get() {
                                    Some(stage) => {
                                        view! {
                                            <div>
                                                <p class="text-theme-primary font-medium">{stage.name.clone()}</p>
                                                <p class="text-sm text-theme-secondary">
                                                    {stage.description.clone().unwrap_or_default()}
                                                </p>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <p class="text-sm text-theme-secondary">
                                                "No stage is currently open."
                                            </p>
                                        }
                                            .into_any()
                                    }
                                }
                            }}
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </AdminLayout>
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="p-4 border border-theme rounded-lg text-center">
            <p class="text-3xl font-bold text-theme-primary">{value}</p>
            <p class="text-sm text-theme-secondary">{label}</p>
        </div>
    }
}
