//! Application shell - корневые компоненты приложения.
//!
//! Содержит:
//! - `AppShell` - auth gate (показывает LoginPage или MainLayout)
//! - `MainLayout` - основной layout приложения (Shell + Sidebar + PageHost)

use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::page_host::PageHost;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Main application layout: навигация слева, активная страница в центре.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageHost /> }.into_any()
        />
    }
}

/// Application shell - auth gate component.
///
/// Показывает:
/// - `LoginPage` если пользователь не авторизован
/// - `MainLayout` если авторизован
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
