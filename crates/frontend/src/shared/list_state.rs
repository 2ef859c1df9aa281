//! Состояние экрана-списка: загруженные записи, флаг загрузки и занятые записи.

use crate::shared::api_utils::ApiError;
use crate::shared::flash::Flash;
use leptos::prelude::*;
use std::collections::HashSet;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

pub const MSG_LOAD_FAILED: &str = "Məlumatlar yüklənmədi.";
pub const MSG_UPDATED: &str = "Uğurla yeniləndi.";
pub const MSG_DELETED: &str = "Uğurla silindi.";
pub const MSG_DELETE_FAILED: &str = "Silinmə zamanı xəta baş verdi.";
pub const MSG_CONFIRM_DELETE: &str = "Silmək istədiyinizə əminsiniz?";
pub const MSG_SAVE_FAILED: &str = "Xəta baş verdi.";

pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    busy: RwSignal<HashSet<String>>,
    revision: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T: Clone + Send + Sync + 'static> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            busy: RwSignal::new(HashSet::new()),
            revision: RwSignal::new(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    /// Загрузка списка; ошибка показывается в баннере, прежние записи остаются
    pub fn load<F>(&self, flash: Flash, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let result = fetch.await;
            // Tab may be closed while the request was in flight
            let _ = this.loading.try_set(false);
            match result {
                Ok(items) => {
                    let _ = this.revision.try_update(|r| *r += 1);
                    let _ = this.items.try_set(items);
                }
                Err(e) => {
                    log::error!("list load failed: {}", e);
                    flash.error(MSG_LOAD_FAILED);
                }
            }
        });
    }

    /// Ключ строки для `<For>`: после каждой загрузки строки строятся заново,
    /// так отредактированная запись не остаётся со старым содержимым
    pub fn row_key<K>(&self, id: K) -> (u64, K) {
        (self.revision.get_untracked(), id)
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.with(|ids| ids.contains(id))
    }

    /// Действие над одной записью (удаление, деактивация).
    ///
    /// Пока запрос идёт, запись помечена занятой; по завершении показывается
    /// баннер и вызывается `after` при успехе.
    pub fn run_item_action<F, A>(&self, id: String, flash: Flash, messages: ItemActionMessages, action: F, after: A)
    where
        F: Future<Output = Result<(), ApiError>> + 'static,
        A: Fn() + 'static,
    {
        let this = *self;
        this.busy.update(|ids| {
            ids.insert(id.clone());
        });
        spawn_local(async move {
            let result = action.await;
            let _ = this.busy.try_update(|ids| ids.remove(&id));
            match result {
                Ok(()) => {
                    flash.success(messages.success);
                    after();
                }
                Err(e) => {
                    log::error!("item action on {} failed: {}", id, e);
                    flash.error(e.message_or(messages.failure));
                }
            }
        });
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ItemActionMessages {
    pub success: &'static str,
    pub failure: &'static str,
}

impl ItemActionMessages {
    pub const DELETE: Self = Self {
        success: MSG_DELETED,
        failure: MSG_DELETE_FAILED,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_action_failure_text() {
        let messages = ItemActionMessages {
            success: "Kart deaktiv edildi",
            failure: "Kart deaktiv edilə bilmədi",
        };
        let from_backend = ApiError::from_response(r#"{"statusMessage":"Kart artıq deaktivdir"}"#, 409);
        assert_eq!(from_backend.message_or(messages.failure), "Kart artıq deaktivdir");

        let bare = ApiError::from_response("", 500);
        assert_eq!(bare.message_or(messages.failure), "Kart deaktiv edilə bilmədi");
        assert_eq!(
            bare.message_or(ItemActionMessages::DELETE.failure),
            MSG_DELETE_FAILED
        );
    }
}
