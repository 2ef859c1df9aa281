use super::model;
use crate::shared::api_utils::ApiError;
use crate::shared::list_state::{MSG_LOAD_FAILED, MSG_SAVE_FAILED};
use contracts::domain::a002_trainer::aggregate::{find_trainer, Trainer};
use contracts::domain::a004_service_category::aggregate::ServiceCategory;
use contracts::domain::a005_service::aggregate::{Service, ServiceId};
use contracts::domain::a005_service::form::{
    AvailabilityField, AvailabilityRow, PlanField, PlanRow, RowKey, ServiceForm,
};
use contracts::shared::time_of_day::TimeBounds;
use leptos::prelude::*;

/// ViewModel формы услуги со строками слотов и планов.
///
/// Строки адресуются по `RowKey`: индекс строки меняется при удалении.
#[derive(Clone, Copy)]
pub struct ServiceDetailsViewModel {
    id: StoredValue<Option<ServiceId>>,
    pub form: RwSignal<ServiceForm>,
    pub trainers: RwSignal<Vec<Trainer>>,
    pub categories: RwSignal<Vec<ServiceCategory>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ServiceDetailsViewModel {
    pub fn new(existing: Option<Service>) -> Self {
        Self {
            form: RwSignal::new(existing.as_ref().map(ServiceForm::from_service).unwrap_or_default()),
            id: StoredValue::new(existing.map(|s| s.id)),
            trainers: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    /// Загрузка справочников тренеров и категорий
    pub fn load_lookups(&self) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let trainers = model::fetch_trainers().await?;
                let categories = model::fetch_categories().await?;
                Ok::<_, ApiError>((trainers, categories))
            }
            .await;
            let _ = this.loading.try_set(false);
            match result {
                Ok((trainers, categories)) => {
                    let _ = this.trainers.try_set(trainers);
                    let _ = this.categories.try_set(categories);
                }
                Err(e) => {
                    log::error!("service form lookups failed: {}", e);
                    let _ = this.error.try_set(Some(e.message_or(MSG_LOAD_FAILED)));
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------

    pub fn availability_keys(&self) -> Vec<RowKey> {
        self.form.with(|f| f.availabilities.iter().map(|r| r.key).collect())
    }

    pub fn plan_keys(&self) -> Vec<RowKey> {
        self.form.with(|f| f.subscription_plans.iter().map(|r| r.key).collect())
    }

    pub fn availability_row(&self, key: RowKey) -> Option<AvailabilityRow> {
        self.form.with(|f| {
            f.availability_position(key)
                .map(|index| f.availabilities[index].clone())
        })
    }

    pub fn plan_row(&self, key: RowKey) -> Option<PlanRow> {
        self.form.with(|f| f.plan_position(key).map(|index| f.subscription_plans[index].clone()))
    }

    pub fn set_availability(&self, key: RowKey, field: AvailabilityField, value: String) {
        self.form.update(|f| {
            if let Some(index) = f.availability_position(key) {
                f.set_availability_field(index, field, value);
            }
        });
    }

    pub fn set_plan(&self, key: RowKey, field: PlanField, value: String) {
        self.form.update(|f| {
            if let Some(index) = f.plan_position(key) {
                f.set_plan_field(index, field, value);
            }
        });
    }

    pub fn add_availability(&self) {
        self.form.update(|f| {
            f.add_availability_row();
        });
    }

    pub fn remove_availability(&self, key: RowKey) {
        self.form.update(|f| {
            if let Some(index) = f.availability_position(key) {
                f.remove_availability_row(index);
            }
        });
    }

    pub fn add_plan(&self) {
        self.form.update(|f| {
            f.add_plan_row();
        });
    }

    pub fn remove_plan(&self, key: RowKey) {
        self.form.update(|f| {
            if let Some(index) = f.plan_position(key) {
                f.remove_plan_row(index);
            }
        });
    }

    // ------------------------------------------------------------------
    // Trainer constraints of a row
    // ------------------------------------------------------------------

    pub fn row_trainer(&self, key: RowKey) -> Option<Trainer> {
        let trainer_id = self.availability_row(key)?.trainer_id;
        self.trainers
            .with(|trainers| find_trainer(trainers, &trainer_id).cloned())
    }

    pub fn day_options(&self, key: RowKey) -> Vec<u8> {
        self.with_row(key, |form, index, trainers| form.day_options(index, trainers))
            .unwrap_or_default()
    }

    pub fn start_bounds(&self, key: RowKey) -> Option<TimeBounds> {
        self.with_row(key, |form, index, trainers| {
            form.time_constraint_for_row(index, trainers)
                .map(|c| c.start_bounds())
        })
        .flatten()
    }

    pub fn end_bounds(&self, key: RowKey) -> Option<TimeBounds> {
        self.with_row(key, |form, index, trainers| form.end_time_bounds(index, trainers))
            .flatten()
    }

    fn with_row<R>(&self, key: RowKey, f: impl FnOnce(&ServiceForm, usize, &[Trainer]) -> R) -> Option<R> {
        self.trainers.with(|trainers| {
            self.form.with(|form| {
                form.availability_position(key)
                    .map(|index| f(form, index, trainers))
            })
        })
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    pub fn save_command(&self, on_saved: Callback<String>) {
        let current = self.form.get();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let payload = current.to_payload();
        let id = self.id.get_value();
        let message = if id.is_some() {
            "Xidmət yeniləndi"
        } else {
            "Yeni xidmət yaradıldı"
        };
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(id, &payload).await;
            let _ = saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(message.to_string()),
                Err(e) => {
                    log::error!("service save failed: {}", e);
                    let _ = error.try_set(Some(e.message_or(MSG_SAVE_FAILED)));
                }
            }
        });
    }
}
