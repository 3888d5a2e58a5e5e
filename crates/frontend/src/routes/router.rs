//! Path-based router context.
//!
//! Holds the current location as a signal and keeps it in sync with the
//! browser history: `navigate` pushes a new entry, back/forward updates the
//! signal through a `popstate` listener. Query string and hash are ignored;
//! the navigation tree only ever matches on the path.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct RouterContext {
    pub current_path: RwSignal<String>,
}

impl RouterContext {
    pub fn new() -> Self {
        let initial = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        Self {
            current_path: RwSignal::new(initial),
        }
    }

    /// Navigate to `path`: push a history entry and update the signal.
    /// Redundant calls to the current location are ignored.
    pub fn navigate(&self, path: &str) {
        if self.current_path.with_untracked(|current| current == path) {
            return;
        }
        leptos::logging::log!("navigate: '{}'", path);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ =
                    history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
            }
        }
        self.current_path.set(path.to_string());
    }

    /// Subscribe to browser back/forward. Called once at app start; the
    /// listener lives for the whole session.
    pub fn init_popstate_listener(&self) {
        let current_path = self.current_path;
        let Some(w) = window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(
            move |_event: web_sys::PopStateEvent| {
                let path = window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_else(|| "/".to_string());
                current_path.set(path);
            },
        );
        if w
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("failed to attach popstate listener");
        }
        closure.forget();
    }
}

impl Default for RouterContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the router context.
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext not found in component tree")
}
