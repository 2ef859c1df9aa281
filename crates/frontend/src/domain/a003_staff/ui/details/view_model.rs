use super::model;
use crate::shared::list_state::{MSG_SAVE_FAILED, MSG_UPDATED};
use contracts::domain::a003_staff::aggregate::{Staff, StaffDto, StaffId};
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone)]
pub struct StaffDetailsViewModel {
    id: Option<StaffId>,
    pub form: RwSignal<StaffDto>,
    pub photo: RwSignal<Option<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StaffDetailsViewModel {
    pub fn new(existing: Option<Staff>) -> Self {
        Self {
            form: RwSignal::new(existing.as_ref().map(StaffDto::from_staff).unwrap_or_default()),
            id: existing.map(|s| s.id),
            photo: RwSignal::new_local(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let id = self.id.clone();
        let message = if id.is_some() { MSG_UPDATED } else { "Yeni üzv yaradıldı." };
        let photo = self.photo.get_untracked();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(id, &current, photo).await;
            let _ = saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(message.to_string()),
                Err(e) => {
                    log::error!("staff save failed: {}", e);
                    let _ = error.try_set(Some(e.message_or(MSG_SAVE_FAILED)));
                }
            }
        });
    }
}
