use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a specific permission identifier.
/// Shows fallback if the session does not hold it.
///
/// The sidebar filter may legitimately route a user here without the
/// permission (a gated branch stays visible as a folder when a child is
/// visible), so destination pages re-check. The backend still enforces the
/// permission on every request; this gate only shapes the UI.
#[component]
pub fn RequirePermission(permission: String, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let permission = StoredValue::new(permission);

    view! {
        <Show
            when=move || {
                let state = auth_state.get();
                state.access_token.is_some()
                    && permission.with_value(|p| state.permissions().contains(p))
            }
            fallback=|| view! { <div class="access-denied">"Недостаточно прав для просмотра."</div> }
        >
            {children()}
        </Show>
    }
}
