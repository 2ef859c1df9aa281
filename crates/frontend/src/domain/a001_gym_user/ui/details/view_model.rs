use super::model;
use crate::shared::list_state::{MSG_SAVE_FAILED, MSG_UPDATED};
use contracts::domain::a001_gym_user::aggregate::{GymUser, GymUserDto, GymUserId};
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone)]
pub struct GymUserDetailsViewModel {
    id: Option<GymUserId>,
    pub form: RwSignal<GymUserDto>,
    pub photo: RwSignal<Option<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl GymUserDetailsViewModel {
    pub fn new(existing: Option<GymUser>) -> Self {
        let form = existing.as_ref().map(GymUserDto::from_user).unwrap_or_default();
        Self {
            id: existing.map(|u| u.id),
            form: RwSignal::new(form),
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
        let message = if id.is_some() {
            MSG_UPDATED
        } else {
            "Yeni istifadəçi yaradıldı."
        };
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
                    log::error!("gym user save failed: {}", e);
                    let _ = error.try_set(Some(e.message_or(MSG_SAVE_FAILED)));
                }
            }
        });
    }
}
