//! Форма выдачи карты владельцу (участник, тренер или сотрудник).
//!
//! Фазы: услуга не выбрана -> услуга выбрана -> выбран план (и слоты)
//! -> можно отправлять. Смена услуги всегда сбрасывает план и слоты.

use crate::domain::a005_service::aggregate::{
    AvailabilityId, Service, ServiceId, SubscriptionPlanId,
};
use crate::domain::a005_service::offering::{filter_service_offering, ServiceOffering};
use crate::shared::date::{parse_input_date, to_iso_instant, utc_midnight_instant};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Кому выдаётся карта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOwner {
    pub id: String,
    pub display_name: String,
}

impl CardOwner {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Сообщение об успешной выдаче
    pub fn issued_message(&self) -> String {
        format!("🎉 {} üçün kart uğurla əlavə edildi!", self.display_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuePhase {
    NoServiceSelected,
    ServiceSelected,
    PlanAndSlotsChosen,
    Submittable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardFormError {
    #[error("Kart nömrəsi tələb olunur")]
    MissingCardNumber,
    #[error("Kart nömrəsi müsbət tam ədəd olmalıdır: '{0}'")]
    InvalidCardNumber(String),
    #[error("Kart növü seçilməyib")]
    MissingCardType,
    #[error("Xidmət seçilməyib")]
    MissingService,
    #[error("Xidmət tapılmadı: {0}")]
    UnknownService(String),
    #[error("Abunəlik planı seçilməyib")]
    MissingPlan,
    #[error("Plan {0} seçilmiş xidmətə aid deyil")]
    PlanNotInService(String),
    #[error("Vaxt {0} seçilmiş xidmətə aid deyil")]
    AvailabilityNotInService(String),
    #[error("Başlama tarixi tələb olunur")]
    MissingStartDate,
    #[error("Başlama tarixi səhvdir: '{0}'")]
    InvalidStartDate(String),
    #[error("Kartın sahibi seçilməyib")]
    MissingOwner,
}

/// Payload для `POST /api/cards`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    pub card_number: u64,
    pub start_date: String,
    pub is_active: bool,
    /// Бэкенд ждёт владельца в поле `userId` для всех видов владельцев
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub subscription_plan_id: SubscriptionPlanId,
    pub service_availability_ids: Vec<AvailabilityId>,
    pub card_type: String,
}

/// Состояние формы выдачи карты: сырые значения полей ввода
#[derive(Debug, Clone, PartialEq)]
pub struct CardEligibilityForm {
    owner: CardOwner,
    pub card_number: String,
    pub card_type: String,
    pub start_date: String,
    pub is_active: bool,
    service_id: String,
    subscription_plan_id: String,
    service_availability_ids: Vec<String>,
}

impl CardEligibilityForm {
    pub fn new(owner: CardOwner) -> Self {
        Self {
            owner,
            card_number: String::new(),
            card_type: String::new(),
            start_date: String::new(),
            is_active: true,
            service_id: String::new(),
            subscription_plan_id: String::new(),
            service_availability_ids: Vec::new(),
        }
    }

    pub fn owner(&self) -> &CardOwner {
        &self.owner
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn subscription_plan_id(&self) -> &str {
        &self.subscription_plan_id
    }

    pub fn service_availability_ids(&self) -> &[String] {
        &self.service_availability_ids
    }

    fn selected_service(&self) -> Option<ServiceId> {
        if self.service_id.is_empty() {
            None
        } else {
            Some(ServiceId::new(self.service_id.clone()))
        }
    }

    // ------------------------------------------------------------------
    // Переходы
    // ------------------------------------------------------------------

    /// Выбор услуги (пустая строка = сброс). План и слоты сбрасываются всегда.
    pub fn select_service(&mut self, service_id: impl Into<String>) {
        self.service_id = service_id.into();
        self.subscription_plan_id.clear();
        self.service_availability_ids.clear();
        log::debug!("card form: service -> '{}', plan and slots reset", self.service_id);
    }

    /// Выбор плана; без выбранной услуги игнорируется
    pub fn select_plan(&mut self, plan_id: impl Into<String>) {
        if self.service_id.is_empty() {
            return;
        }
        self.subscription_plan_id = plan_id.into();
    }

    /// Замена набора слотов (значения multi-select)
    pub fn set_availability_ids(&mut self, ids: Vec<String>) {
        if self.service_id.is_empty() {
            return;
        }
        let mut unique: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids.into_iter().filter(|id| !id.is_empty()) {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        self.service_availability_ids = unique;
    }

    /// Переключение одного слота
    pub fn toggle_availability(&mut self, availability_id: &str) {
        if self.service_id.is_empty() || availability_id.is_empty() {
            return;
        }
        if let Some(pos) = self
            .service_availability_ids
            .iter()
            .position(|id| id == availability_id)
        {
            self.service_availability_ids.remove(pos);
        } else {
            self.service_availability_ids.push(availability_id.to_string());
        }
    }

    pub fn is_availability_selected(&self, availability_id: &str) -> bool {
        self.service_availability_ids
            .iter()
            .any(|id| id == availability_id)
    }

    // ------------------------------------------------------------------
    // Производное состояние
    // ------------------------------------------------------------------

    /// Планы и слоты выбранной услуги
    pub fn offering<'a>(&self, catalog: &'a [Service]) -> ServiceOffering<'a> {
        filter_service_offering(catalog, self.selected_service().as_ref())
    }

    /// Зависимые поля (план, слоты) недоступны до выбора услуги
    pub fn dependent_fields_enabled(&self) -> bool {
        !self.service_id.is_empty()
    }

    pub fn phase(&self) -> IssuePhase {
        if self.service_id.is_empty() {
            IssuePhase::NoServiceSelected
        } else if self.subscription_plan_id.is_empty() {
            IssuePhase::ServiceSelected
        } else if self.check_fields().is_err() {
            IssuePhase::PlanAndSlotsChosen
        } else {
            IssuePhase::Submittable
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase() == IssuePhase::Submittable
    }

    /// Проверка полей без учёта каталога
    fn check_fields(&self) -> Result<(u64, chrono::NaiveDate), CardFormError> {
        if self.owner.id.is_empty() {
            return Err(CardFormError::MissingOwner);
        }

        let raw_number = self.card_number.trim();
        if raw_number.is_empty() {
            return Err(CardFormError::MissingCardNumber);
        }
        let card_number = raw_number
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| CardFormError::InvalidCardNumber(raw_number.to_string()))?;

        if self.card_type.trim().is_empty() {
            return Err(CardFormError::MissingCardType);
        }
        if self.service_id.is_empty() {
            return Err(CardFormError::MissingService);
        }
        if self.subscription_plan_id.is_empty() {
            return Err(CardFormError::MissingPlan);
        }

        let raw_date = self.start_date.trim();
        if raw_date.is_empty() {
            return Err(CardFormError::MissingStartDate);
        }
        let start_date = parse_input_date(raw_date)
            .ok_or_else(|| CardFormError::InvalidStartDate(raw_date.to_string()))?;

        Ok((card_number, start_date))
    }

    /// Сборка payload.
    ///
    /// Дата начала отправляется как полночь этого дня по UTC.
    pub fn build_payload(&self, catalog: &[Service]) -> Result<CardPayload, CardFormError> {
        let (card_number, start_date) = self.check_fields()?;

        let service = catalog
            .iter()
            .find(|s| s.id.as_str() == self.service_id)
            .ok_or_else(|| CardFormError::UnknownService(self.service_id.clone()))?;

        let plan = service
            .find_plan(&self.subscription_plan_id)
            .ok_or_else(|| CardFormError::PlanNotInService(self.subscription_plan_id.clone()))?;

        let mut availability_ids = Vec::with_capacity(self.service_availability_ids.len());
        for id in &self.service_availability_ids {
            let slot = service
                .find_availability(id)
                .ok_or_else(|| CardFormError::AvailabilityNotInService(id.clone()))?;
            availability_ids.push(slot.id.clone());
        }

        Ok(CardPayload {
            card_number,
            start_date: to_iso_instant(utc_midnight_instant(start_date)),
            is_active: self.is_active,
            owner_id: self.owner.id.clone(),
            subscription_plan_id: plan.id.clone(),
            service_availability_ids: availability_ids,
            card_type: self.card_type.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Service> {
        serde_json::from_str(
            r#"[
            {"id": "S1", "name": "Yoga",
             "subscriptionPlans": [{"id": "P1", "entryCount": 10, "price": 50}],
             "availabilities": [{"id": "A1", "day": 2, "startTime": "10:00", "endTime": "11:00"}]},
            {"id": "S2", "name": "Boks",
             "subscriptionPlans": [{"id": "P7", "entryCount": 4, "price": 20}],
             "availabilities": [{"id": "A7", "day": 5, "startTime": "18:00", "endTime": "19:00"}]}
        ]"#,
        )
        .unwrap()
    }

    fn filled_form() -> CardEligibilityForm {
        let mut form = CardEligibilityForm::new(CardOwner::new("U1", "Aysel Məmmədova"));
        form.card_number = "100".into();
        form.card_type = "MONTHLY".into();
        form.start_date = "2024-01-01".into();
        form.select_service("S1");
        form.select_plan("P1");
        form.set_availability_ids(vec!["A1".into()]);
        form
    }

    #[test]
    fn test_full_issue_scenario() {
        let form = filled_form();
        assert_eq!(form.phase(), IssuePhase::Submittable);

        let payload = form.build_payload(&catalog()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cardNumber": 100,
                "startDate": "2024-01-01T00:00:00.000Z",
                "isActive": true,
                "userId": "U1",
                "subscriptionPlanId": "P1",
                "serviceAvailabilityIds": ["A1"],
                "cardType": "MONTHLY"
            })
        );
    }

    #[test]
    fn test_start_date_is_utc_midnight_of_chosen_day() {
        let mut form = filled_form();
        form.start_date = "2024-03-01".into();
        let payload = form.build_payload(&catalog()).unwrap();
        assert_eq!(payload.start_date, "2024-03-01T00:00:00.000Z");
    }

    #[test]
    fn test_service_change_resets_plan_and_slots() {
        let mut form = filled_form();
        form.select_service("S2");
        assert_eq!(form.subscription_plan_id(), "");
        assert!(form.service_availability_ids().is_empty());
        assert_eq!(form.phase(), IssuePhase::ServiceSelected);

        // re-selecting the same service resets too
        form.select_plan("P7");
        form.toggle_availability("A7");
        form.select_service("S2");
        assert_eq!(form.subscription_plan_id(), "");
        assert!(form.service_availability_ids().is_empty());

        form.select_service("");
        assert_eq!(form.phase(), IssuePhase::NoServiceSelected);
        assert!(!form.dependent_fields_enabled());
    }

    #[test]
    fn test_dependent_fields_ignored_without_service() {
        let mut form = CardEligibilityForm::new(CardOwner::new("U1", "Aysel"));
        form.select_plan("P1");
        form.toggle_availability("A1");
        form.set_availability_ids(vec!["A1".into()]);
        assert_eq!(form.subscription_plan_id(), "");
        assert!(form.service_availability_ids().is_empty());
        assert!(form.offering(&catalog()).is_empty());
    }

    #[test]
    fn test_offering_follows_selected_service() {
        let catalog = catalog();
        let mut form = CardEligibilityForm::new(CardOwner::new("U1", "Aysel"));
        form.select_service("S2");
        let offering = form.offering(&catalog);
        assert_eq!(offering.plans[0].id.as_str(), "P7");
        assert_eq!(offering.availabilities[0].id.as_str(), "A7");
    }

    #[test]
    fn test_slots_are_optional() {
        let mut form = filled_form();
        form.set_availability_ids(Vec::new());
        assert!(form.can_submit());
        let payload = form.build_payload(&catalog()).unwrap();
        assert!(payload.service_availability_ids.is_empty());
    }

    #[test]
    fn test_toggle_and_dedup_slots() {
        let mut form = filled_form();
        form.toggle_availability("A1");
        assert!(!form.is_availability_selected("A1"));
        form.toggle_availability("A1");
        assert!(form.is_availability_selected("A1"));

        form.set_availability_ids(vec!["A1".into(), "A1".into(), "".into()]);
        assert_eq!(form.service_availability_ids(), ["A1".to_string()]);
    }

    #[test]
    fn test_missing_fields_block_submission() {
        let mut form = filled_form();
        form.card_number = "".into();
        assert_eq!(form.phase(), IssuePhase::PlanAndSlotsChosen);
        assert_eq!(
            form.build_payload(&catalog()),
            Err(CardFormError::MissingCardNumber)
        );

        form.card_number = "-5".into();
        assert!(matches!(
            form.build_payload(&catalog()),
            Err(CardFormError::InvalidCardNumber(_))
        ));

        form.card_number = "0".into();
        assert!(!form.can_submit());

        let mut form = filled_form();
        form.card_type = " ".into();
        assert_eq!(
            form.build_payload(&catalog()),
            Err(CardFormError::MissingCardType)
        );

        let mut form = filled_form();
        form.start_date = "".into();
        assert_eq!(
            form.build_payload(&catalog()),
            Err(CardFormError::MissingStartDate)
        );

        let mut form = filled_form();
        form.select_service("S1");
        assert_eq!(
            form.build_payload(&catalog()),
            Err(CardFormError::MissingPlan)
        );
    }

    #[test]
    fn test_selection_must_belong_to_service() {
        let mut form = filled_form();
        form.select_plan("P7");
        assert_eq!(
            form.build_payload(&catalog()),
            Err(CardFormError::PlanNotInService("P7".into()))
        );

        let mut form = filled_form();
        form.toggle_availability("A7");
        assert_eq!(
            form.build_payload(&catalog()),
            Err(CardFormError::AvailabilityNotInService("A7".into()))
        );

        let form = filled_form();
        assert_eq!(
            form.build_payload(&[]),
            Err(CardFormError::UnknownService("S1".into()))
        );
    }

    #[test]
    fn test_issued_message_names_owner() {
        let owner = CardOwner::new("U1", "Aysel Məmmədova");
        assert_eq!(
            owner.issued_message(),
            "🎉 Aysel Məmmədova üçün kart uğurla əlavə edildi!"
        );
    }
}
