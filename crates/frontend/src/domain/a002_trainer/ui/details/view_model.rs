use super::model;
use crate::shared::list_state::{MSG_SAVE_FAILED, MSG_UPDATED};
use contracts::domain::a002_trainer::aggregate::{Trainer, TrainerDto, TrainerId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TrainerDetailsViewModel {
    id: StoredValue<Option<TrainerId>>,
    pub form: RwSignal<TrainerDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl TrainerDetailsViewModel {
    pub fn new(existing: Option<Trainer>) -> Self {
        Self {
            form: RwSignal::new(existing.as_ref().map(TrainerDto::from_trainer).unwrap_or_default()),
            id: StoredValue::new(existing.map(|t| t.id)),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    /// Предупреждение по графику под полями времени
    pub fn schedule_warning(&self) -> Option<String> {
        self.form.with(TrainerDto::schedule_warning)
    }

    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get();
        if !current.is_complete() {
            self.error.set(Some("Bütün sahələri doldurun".to_string()));
            return;
        }

        let id = self.id.get_value();
        let message = if id.is_some() { MSG_UPDATED } else { "Yeni məşqçi yaradıldı." };
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
                    log::error!("trainer save failed: {}", e);
                    let _ = error.try_set(Some(e.message_or(MSG_SAVE_FAILED)));
                }
            }
        });
    }
}
