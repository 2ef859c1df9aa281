use super::model;
use crate::shared::list_state::MSG_SAVE_FAILED;
use contracts::domain::a004_service_category::aggregate::{CategoryDto, CategoryId, ServiceCategory};
use leptos::prelude::*;

/// ViewModel for the category form
#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    id: Option<CategoryId>,
    pub form: RwSignal<CategoryDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new(existing: Option<ServiceCategory>) -> Self {
        let form = existing
            .as_ref()
            .map(CategoryDto::from_category)
            .unwrap_or_default();
        Self {
            id: existing.map(|c| c.id),
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Save form data; `on_saved` receives the success message
    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let id = self.id.clone();
        let message = if id.is_some() {
            "Kateqoriya yeniləndi"
        } else {
            "Yeni kateqoriya yaradıldı"
        };
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(id, &current).await;
            let _ = saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(message.to_string()),
                Err(e) => {
                    log::error!("category save failed: {}", e);
                    let _ = error.try_set(Some(e.message_or(MSG_SAVE_FAILED)));
                }
            }
        });
    }
}
