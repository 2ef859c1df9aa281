use super::model;
use crate::shared::list_state::MSG_LOAD_FAILED;
use contracts::domain::a005_service::aggregate::{Availability, Service, SubscriptionPlan};
use contracts::domain::a006_card::aggregate::card_type_choices;
use contracts::domain::a006_card::issue_form::{CardEligibilityForm, CardOwner, IssuePhase};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const MSG_ISSUE_FAILED: &str = "Kart əlavə olunarkən xəta baş verdi.";

/// ViewModel формы выдачи карты
#[derive(Clone, Copy)]
pub struct CardIssueViewModel {
    pub form: RwSignal<CardEligibilityForm>,
    pub services: RwSignal<Vec<Service>>,
    pub card_types: RwSignal<Vec<String>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    restrict_type: Option<&'static str>,
}

impl CardIssueViewModel {
    pub fn new(owner: CardOwner, restrict_type: Option<&'static str>) -> Self {
        Self {
            form: RwSignal::new(CardEligibilityForm::new(owner)),
            services: RwSignal::new(Vec::new()),
            card_types: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            restrict_type,
        }
    }

    /// Загрузка каталога услуг и словаря типов карт
    pub fn load_lookups(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let services = model::fetch_services().await;
            let card_types = model::fetch_card_types().await;
            let _ = this.loading.try_set(false);

            match services {
                Ok(list) => {
                    let _ = this.services.try_set(list);
                }
                Err(e) => {
                    log::error!("card form lookups failed: {}", e);
                    let _ = this.error.try_set(Some(e.message_or(MSG_LOAD_FAILED)));
                }
            }
            match card_types {
                Ok(types) => {
                    let choices = card_type_choices(&types, this.restrict_type);
                    // Single allowed type is preselected
                    if let [only] = choices.as_slice() {
                        let only = only.clone();
                        let _ = this.form.try_update(|f| f.card_type = only);
                    }
                    let _ = this.card_types.try_set(types);
                }
                Err(e) => {
                    log::error!("card form lookups failed: {}", e);
                    let _ = this.error.try_set(Some(e.message_or(MSG_LOAD_FAILED)));
                }
            }
        });
    }

    pub fn type_choices(&self) -> Vec<String> {
        self.card_types
            .with(|types| card_type_choices(types, self.restrict_type))
    }

    pub fn plans(&self) -> Vec<SubscriptionPlan> {
        let form = self.form.get();
        self.services
            .with(|catalog| form.offering(catalog).plans.to_vec())
    }

    pub fn availabilities(&self) -> Vec<Availability> {
        let form = self.form.get();
        self.services
            .with(|catalog| form.offering(catalog).availabilities.to_vec())
    }

    pub fn dependent_fields_enabled(&self) -> bool {
        self.form.with(|f| f.dependent_fields_enabled())
    }

    pub fn phase(&self) -> IssuePhase {
        self.form.with(|f| f.phase())
    }

    pub fn select_service(&self, service_id: String) {
        self.form.update(|f| f.select_service(service_id));
    }

    pub fn select_plan(&self, plan_id: String) {
        self.form.update(|f| f.select_plan(plan_id));
    }

    pub fn toggle_availability(&self, availability_id: &str) {
        self.form.update(|f| f.toggle_availability(availability_id));
    }

    /// Отправка формы; `on_issued` получает сообщение об успехе
    pub fn submit_command(&self, on_issued: Callback<String>) {
        let form = self.form.get();
        let payload = match self.services.with(|catalog| form.build_payload(catalog)) {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let message = form.owner().issued_message();
        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            let result = model::issue_card(&payload).await;
            let _ = this.saving.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("card #{} issued", payload.card_number);
                    on_issued.run(message);
                }
                // The form stays open with the backend message
                Err(e) => {
                    log::error!("card issue failed: {}", e);
                    let _ = this.error.try_set(Some(e.message_or(MSG_ISSUE_FAILED)));
                }
            }
        });
    }
}
