//! Shared chrome for the protected admin pages: top navigation plus the
//! session guard, so a page only renders once the session has resolved.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::auth::permissions;
use crate::ui::auth::UserMenu;
use crate::ui::guard::{PermissionGated, RequireSession};

/// Admin page wrapper: session-gated, with the console navigation on top.
#[component]
pub fn AdminLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireSession>
            <div class="min-h-screen bg-theme-primary">
                <header class="border-b border-theme">
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                        <div class="flex items-center justify-between h-16">
                            <div class="flex items-center gap-6">
                                <A href="/" attr:class="text-xl font-bold text-theme-primary">
                                    "Innova Console"
                                </A>
                                <nav class="flex items-center gap-4 text-sm text-theme-secondary">
                                    <A href="/" attr:class="hover:text-theme-primary">"Dashboard"</A>
                                    <PermissionGated permission=permissions::REVIEW_IDEAS>
                                        <A href="/ideas" attr:class="hover:text-theme-primary">"Ideas"</A>
                                    </PermissionGated>
                                    <PermissionGated permission=permissions::MANAGE_BLOG>
                                        <A href="/blog" attr:class="hover:text-theme-primary">"Blog"</A>
                                    </PermissionGated>
                                    <PermissionGated permission=permissions::MANAGE_CONTENT>
                                        <A href="/content" attr:class="hover:text-theme-primary">"Content"</A>
                                        <A href="/hero" attr:class="hover:text-theme-primary">"Hero slides"</A>
                                    </PermissionGated>
                                    <PermissionGated permission=permissions::MANAGE_CONTACT>
                                        <A href="/contact" attr:class="hover:text-theme-primary">"Messages"</A>
                                    </PermissionGated>
                                </nav>
                            </div>
                            <UserMenu/>
                        </div>
                    </div>
                </header>

                <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    {children()}
                </main>
            </div>
        </RequireSession>
    }
}
