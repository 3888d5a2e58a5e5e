use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "session_access_token";
const REFRESH_TOKEN_KEY: &str = "session_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

pub fn get_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn save_refresh_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
    }
}

pub fn get_refresh_token() -> Option<String> {
    local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Clear both tokens, e.g. on logout or failed refresh.
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
