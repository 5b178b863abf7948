use contracts::system::auth::SessionUser;
use web_sys::window;

const SESSION_TOKEN_KEY: &str = "session_token";
const SESSION_USER_KEY: &str = "session_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session after a successful login.
pub fn save_session(token: &str, user: &SessionUser) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(SESSION_USER_KEY, &json);
        }
    }
}

/// Restore a previously saved session, if any.
pub fn load_session() -> Option<(String, SessionUser)> {
    let storage = get_local_storage()?;
    let token = storage.get_item(SESSION_TOKEN_KEY).ok()??;
    let user_json = storage.get_item(SESSION_USER_KEY).ok()??;
    let user = serde_json::from_str(&user_json).ok()?;
    Some((token, user))
}

/// Drop the stored session on logout.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
        let _ = storage.remove_item(SESSION_USER_KEY);
    }
}
