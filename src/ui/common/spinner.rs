use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Whether to center the spinner in its container
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let spinner_class = if class.is_empty() {
        "animate-spin rounded-full h-8 w-8 border-b-2 border-accent-primary".to_string()
    } else {
        format!(
            "animate-spin rounded-full h-8 w-8 border-b-2 border-accent-primary {}",
            class
        )
    };

    let container_class = if centered {
        "flex items-center justify-center py-20"
    } else {
        "inline-flex"
    };

    view! {
        <div class=container_class>
            <div class=spinner_class></div>
        </div>
    }
}
