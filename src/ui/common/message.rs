//! Reusable message components for displaying errors and success feedback.

use leptos::prelude::*;

/// Error message component
/// Displays an error message when the signal holds one
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                <p class="text-sm text-red-700 dark:text-red-300">
                    {move || error.get().unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}

/// Success message component
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="p-3 bg-green-100 dark:bg-green-900/30 border border-green-300 dark:border-green-700 rounded-lg">
                <p class="text-sm text-green-700 dark:text-green-300">
                    {move || message.get().unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}
