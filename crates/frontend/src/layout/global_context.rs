use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

/// Query parameter holding the active tab key (`?active=a005_service`)
const ACTIVE_PARAM: &str = "active";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from the URL and keeps the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            self.open_tab(&active_key, tab_label_for_key(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = match this.active.get() {
                Some(key) => query_for_active(&key),
                None => "?".to_string(),
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                });
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Closes every tab (on logout)
    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ACTIVE_PARAM)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

fn query_for_active(key: &str) -> String {
    let params = HashMap::from([(ACTIVE_PARAM.to_string(), key.to_string())]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(
            active_from_query("?active=a006_card"),
            Some("a006_card".to_string())
        );
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?other=1"), None);
    }

    #[test]
    fn test_query_round_trip() {
        let query = query_for_active("a002_trainer");
        assert_eq!(query, "?active=a002_trainer");
        assert_eq!(active_from_query(&query), Some("a002_trainer".to_string()));
    }
}
