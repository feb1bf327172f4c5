use leptos::prelude::*;
use leptos_router::components::A;

/// 404 fallback
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold text-theme-primary">"404"</h1>
            <p class="text-theme-secondary">"This page does not exist."</p>
            <A href="/" attr:class="text-accent-primary hover:underline">
                "Back to the dashboard"
            </A>
        </div>
    }
}
