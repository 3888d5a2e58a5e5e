use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::router::RouterContext;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the layout context to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Router context: current location + history integration.
    let router = RouterContext::new();
    router.init_popstate_listener();
    provide_context(router);

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
