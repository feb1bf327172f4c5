use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{
    BlogPage, ContactPage, ContentPage, DashboardPage, HeroPage, IdeasPage, LoginPage,
    NotFoundPage, ProfilePage,
};
use crate::ui::provide_session_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Resolve the stored token into a session before any guarded page renders
    provide_session_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/innova-console.css"/>

        // sets the document title
        <Title text="Innova Console"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/ideas") view=IdeasPage />
                <Route path=path!("/blog") view=BlogPage />
                <Route path=path!("/content") view=ContentPage />
                <Route path=path!("/hero") view=HeroPage />
                <Route path=path!("/contact") view=ContactPage />
                <Route path=path!("/profile") view=ProfilePage />
            </Routes>
        </Router>
    }
}
