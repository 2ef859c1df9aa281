use contracts::system::auth::{SessionUser, SESSION_STORAGE_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Restore the persisted session, if any
pub fn load_session() -> Option<SessionUser> {
    let raw = get_local_storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    SessionUser::from_storage(&raw)
}

/// Persist the session to localStorage
pub fn save_session(user: &SessionUser) -> Result<(), String> {
    let raw = user.to_storage()?;
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(SESSION_STORAGE_KEY, &raw)
        .map_err(|e| format!("Failed to save session: {:?}", e))
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}
