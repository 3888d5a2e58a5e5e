//! Sidebar component with collapsible, permission-filtered menu items.
//!
//! The static tree from [`menu`] is filtered against the current session's
//! permission snapshot and rendered recursively. Only the deepest node
//! matching the current location is painted active; its ancestors stay
//! auto-expanded instead.

use std::collections::HashSet;

use contracts::shared::navigation::{
    filter_tree, has_active_descendant, is_highlighted, validate_tree, NavNode,
};
use leptos::prelude::*;

use crate::layout::left::menu::nav_tree;
use crate::routes::router::use_router;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, _) = use_auth();

    // The tree is built once per app and checked at construction; the
    // filter path trusts it afterwards.
    let tree = nav_tree();
    validate_tree(&tree).expect("invalid navigation tree definition");
    let tree = StoredValue::new(tree);

    // Granted snapshot, recomputed whenever the session changes.
    let granted = Memo::new(move |_| {
        auth_state
            .get()
            .user_info
            .as_ref()
            .map(|u| u.permission_set())
            .unwrap_or_else(HashSet::new)
    });

    // Memoized on the permission snapshot only; the static tree never
    // changes after startup. Safe to recompute redundantly.
    let visible = Memo::new(move |_| tree.with_value(|t| filter_tree(t, &granted.get())));

    // Paths of branches the user expanded by hand.
    let expanded = RwSignal::new(Vec::<String>::new());

    view! {
        <div class="app-sidebar__content">
            <For
                each=move || visible.get()
                key=|node| node.path.clone()
                children=move |node: NavNode| {
                    view! { <SidebarNode node=node expanded=expanded /> }.into_any()
                }
            />
        </div>
    }
}

/// One row of the sidebar plus, for branches, its collapsible children.
/// Returns `AnyView` so the component can recurse into itself.
#[component]
fn SidebarNode(node: NavNode, expanded: RwSignal<Vec<String>>) -> AnyView {
    let router = use_router();
    let is_branch = node.is_branch();
    let indent = 12 * node.level as u32;
    let node = StoredValue::new(node);

    let is_open = move || {
        let location = router.current_path.get();
        let manual =
            expanded.with(|items| items.iter().any(|path| node.with_value(|n| *path == n.path)));
        manual || node.with_value(|n| has_active_descendant(&location, n))
    };

    let on_click = move |_| {
        if is_branch {
            let key = node.with_value(|n| n.path.clone());
            expanded.update(|items| {
                if let Some(pos) = items.iter().position(|x| x == &key) {
                    items.remove(pos);
                } else {
                    items.push(key);
                }
            });
        } else {
            let path = node.with_value(|n| n.path.clone());
            router.navigate(&path);
        }
    };

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || {
                    let location = router.current_path.get();
                    node.with_value(|n| is_highlighted(&location, n))
                }
                style:padding-left=format!("{}px", indent)
                on:click=on_click
            >
                <div class="app-sidebar__item-content">
                    {node.with_value(|n| n.icon.clone()).map(|name| icon(&name))}
                    <span>{node.with_value(|n| n.label.clone())}</span>
                </div>
                {is_branch.then(|| {
                    view! {
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=is_open
                        >
                            {icon("chevron-right")}
                        </div>
                    }
                })}
            </div>

            {is_branch.then(|| {
                view! {
                    <Show when=is_open>
                        <div class="app-sidebar__children">
                            <For
                                each=move || node.with_value(|n| n.children.clone())
                                key=|child| child.path.clone()
                                children=move |child: NavNode| {
                                    view! { <SidebarNode node=child expanded=expanded /> }
                                        .into_any()
                                }
                            />
                        </div>
                    </Show>
                }
            })}
        </div>
    }
    .into_any()
}
