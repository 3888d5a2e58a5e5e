//! Center-zone host: resolves the current location against the navigation
//! tree and renders a standard page frame for it. The concrete screens are
//! served elsewhere; the host owns the frame, the not-found state and the
//! per-destination permission gate.

use contracts::shared::navigation::NavNode;
use leptos::prelude::*;

use crate::layout::left::menu::nav_tree;
use crate::routes::router::use_router;
use crate::system::auth::guard::RequirePermission;

#[component]
pub fn PageHost() -> impl IntoView {
    let router = use_router();
    let tree = StoredValue::new(nav_tree());

    // (label, permission) of the node matching the current location.
    let target = Memo::new(move |_| {
        let path = router.current_path.get();
        tree.with_value(|t| {
            NavNode::find_by_path(t, &path).map(|node| (node.label.clone(), node.permission.clone()))
        })
    });

    view! {
        <div class="page-standard">
            {move || match target.get() {
                None => view! {
                    <div class="page-standard__not-found">
                        <h1>"Страница не найдена"</h1>
                        <p>{router.current_path.get()}</p>
                    </div>
                }
                .into_any(),
                // The sidebar can surface a gated folder whose child is
                // visible; the destination re-checks its own permission.
                Some((label, Some(permission))) => view! {
                    <RequirePermission permission=permission>
                        <PageFrame label=label.clone() />
                    </RequirePermission>
                }
                .into_any(),
                Some((label, None)) => view! { <PageFrame label=label /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PageFrame(label: String) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="page-standard__header">
            <h1>{label}</h1>
        </div>
        <div class="page-standard__body">
            <p>{move || router.current_path.get()}</p>
        </div>
    }
}
