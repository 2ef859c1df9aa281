//! Форма создания/редактирования услуги со строками слотов и планов.
//!
//! Строки хранят сырые строковые значения полей ввода; числа и время
//! разбираются только при сборке payload.

use super::aggregate::{
    AvailabilityPayload, Service, ServicePayload, SubscriptionPlanPayload,
};
use crate::domain::a002_trainer::aggregate::{find_trainer, Trainer, TrainerId};
use crate::domain::a002_trainer::schedule::TrainerTimeConstraint;
use crate::shared::time_of_day::{ClockTime, TimeBounds};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Стабильный ключ строки для рендера списков (индекс меняется при удалении)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowKey(Uuid);

impl RowKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowKey {
    fn default() -> Self {
        Self::new()
    }
}

/// Строка слота: день, время и тренер
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailabilityRow {
    pub key: RowKey,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub trainer_id: String,
}

impl AvailabilityRow {
    fn is_complete(&self) -> bool {
        !self.day.is_empty()
            && !self.start_time.is_empty()
            && !self.end_time.is_empty()
            && !self.trainer_id.is_empty()
    }

    fn to_payload(&self) -> Option<AvailabilityPayload> {
        if !self.is_complete() {
            return None;
        }
        Some(AvailabilityPayload {
            day: self.day.trim().parse().ok()?,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            trainer_id: TrainerId::new(self.trainer_id.clone()),
        })
    }
}

/// Строка плана: число посещений и цена
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanRow {
    pub key: RowKey,
    pub entry_count: String,
    pub price: String,
}

impl PlanRow {
    fn to_payload(&self) -> Option<SubscriptionPlanPayload> {
        if self.entry_count.is_empty() || self.price.is_empty() {
            return None;
        }
        let entry_count: u32 = self.entry_count.trim().parse().ok()?;
        let price: f64 = self.price.trim().parse().ok()?;
        if !price.is_finite() {
            return None;
        }
        Some(SubscriptionPlanPayload { entry_count, price })
    }
}

/// Редактируемое поле строки слота
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityField {
    Day,
    StartTime,
    EndTime,
    Trainer,
}

/// Редактируемое поле строки плана
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanField {
    EntryCount,
    Price,
}

/// Состояние формы услуги
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceForm {
    pub name: String,
    pub category_id: String,
    pub availabilities: Vec<AvailabilityRow>,
    pub subscription_plans: Vec<PlanRow>,
}

impl Default for ServiceForm {
    /// Новая форма: по одной пустой строке каждого вида
    fn default() -> Self {
        Self {
            name: String::new(),
            category_id: String::new(),
            availabilities: vec![AvailabilityRow::default()],
            subscription_plans: vec![PlanRow::default()],
        }
    }
}

impl ServiceForm {
    /// Форма редактирования существующей услуги
    pub fn from_service(service: &Service) -> Self {
        let mut availabilities: Vec<AvailabilityRow> = service
            .availabilities
            .iter()
            .map(|a| AvailabilityRow {
                key: RowKey::new(),
                day: a.day.to_string(),
                start_time: a.start_time.clone(),
                end_time: a.end_time.clone(),
                trainer_id: a
                    .trainer
                    .as_ref()
                    .map(|t| t.id.as_str().to_string())
                    .unwrap_or_default(),
            })
            .collect();
        if availabilities.is_empty() {
            availabilities.push(AvailabilityRow::default());
        }

        let mut subscription_plans: Vec<PlanRow> = service
            .subscription_plans
            .iter()
            .map(|p| PlanRow {
                key: RowKey::new(),
                entry_count: p.entry_count.to_string(),
                price: p.price.to_string(),
            })
            .collect();
        if subscription_plans.is_empty() {
            subscription_plans.push(PlanRow::default());
        }

        Self {
            name: service.name.clone(),
            category_id: service
                .category
                .as_ref()
                .map(|c| c.id.as_str().to_string())
                .unwrap_or_default(),
            availabilities,
            subscription_plans,
        }
    }

    // ------------------------------------------------------------------
    // Строки
    // ------------------------------------------------------------------

    pub fn add_availability_row(&mut self) -> RowKey {
        let row = AvailabilityRow::default();
        let key = row.key;
        self.availabilities.push(row);
        key
    }

    /// Удаление по позиции; позиция вне диапазона игнорируется
    pub fn remove_availability_row(&mut self, index: usize) {
        if index < self.availabilities.len() {
            self.availabilities.remove(index);
        }
    }

    pub fn add_plan_row(&mut self) -> RowKey {
        let row = PlanRow::default();
        let key = row.key;
        self.subscription_plans.push(row);
        key
    }

    pub fn remove_plan_row(&mut self, index: usize) {
        if index < self.subscription_plans.len() {
            self.subscription_plans.remove(index);
        }
    }

    pub fn availability_position(&self, key: RowKey) -> Option<usize> {
        self.availabilities.iter().position(|r| r.key == key)
    }

    pub fn plan_position(&self, key: RowKey) -> Option<usize> {
        self.subscription_plans.iter().position(|r| r.key == key)
    }

    /// Изменение поля строки слота.
    ///
    /// Смена тренера сбрасывает выбранный день.
    pub fn set_availability_field(
        &mut self,
        index: usize,
        field: AvailabilityField,
        value: impl Into<String>,
    ) {
        let Some(row) = self.availabilities.get_mut(index) else {
            return;
        };
        let value = value.into();
        match field {
            AvailabilityField::Day => row.day = value,
            AvailabilityField::StartTime => row.start_time = value,
            AvailabilityField::EndTime => row.end_time = value,
            AvailabilityField::Trainer => {
                log::debug!("availability row {} trainer -> '{}', day reset", index, value);
                row.trainer_id = value;
                row.day.clear();
            }
        }
    }

    pub fn set_plan_field(&mut self, index: usize, field: PlanField, value: impl Into<String>) {
        let Some(row) = self.subscription_plans.get_mut(index) else {
            return;
        };
        match field {
            PlanField::EntryCount => row.entry_count = value.into(),
            PlanField::Price => row.price = value.into(),
        }
    }

    // ------------------------------------------------------------------
    // Ограничения выбора по тренеру строки
    // ------------------------------------------------------------------

    fn row_trainer<'a>(&self, index: usize, trainers: &'a [Trainer]) -> Option<&'a Trainer> {
        let row = self.availabilities.get(index)?;
        find_trainer(trainers, &row.trainer_id)
    }

    /// Дни, доступные для строки: рабочие дни её тренера
    pub fn day_options(&self, index: usize, trainers: &[Trainer]) -> Vec<u8> {
        self.row_trainer(index, trainers)
            .map(Trainer::available_days)
            .unwrap_or_default()
    }

    pub fn time_constraint_for_row(
        &self,
        index: usize,
        trainers: &[Trainer],
    ) -> Option<TrainerTimeConstraint> {
        self.row_trainer(index, trainers)
            .and_then(Trainer::time_constraint)
    }

    /// Границы выбора времени окончания с учётом выбранного начала
    pub fn end_time_bounds(&self, index: usize, trainers: &[Trainer]) -> Option<TimeBounds> {
        let constraint = self.time_constraint_for_row(index, trainers)?;
        let chosen_start = self
            .availabilities
            .get(index)
            .and_then(|row| row.start_time.parse::<ClockTime>().ok());
        Some(constraint.end_bounds(chosen_start))
    }

    // ------------------------------------------------------------------
    // Отправка
    // ------------------------------------------------------------------

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Xidmət adı tələb olunur".into());
        }
        Ok(())
    }

    /// Payload для POST/PATCH.
    ///
    /// Неполные строки слотов и планов молча отбрасываются.
    pub fn to_payload(&self) -> ServicePayload {
        let availabilities: Vec<AvailabilityPayload> = self
            .availabilities
            .iter()
            .filter_map(AvailabilityRow::to_payload)
            .collect();
        let subscription_plans: Vec<SubscriptionPlanPayload> = self
            .subscription_plans
            .iter()
            .filter_map(PlanRow::to_payload)
            .collect();

        let dropped = (self.availabilities.len() - availabilities.len())
            + (self.subscription_plans.len() - subscription_plans.len());
        if dropped > 0 {
            log::debug!("service form: {} incomplete row(s) dropped", dropped);
        }

        ServicePayload {
            name: self.name.clone(),
            category_id: self.category_id.clone(),
            availabilities,
            subscription_plans,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trainers() -> Vec<Trainer> {
        serde_json::from_str(
            r#"[
            {"id": "T1", "firstName": "Elvin", "lastName": "Quliyev", "phoneNumber": "1",
             "availableDays": "2-4", "startTime": "09:00", "endTime": "18:00"},
            {"id": "T2", "firstName": "Nigar", "lastName": "Əliyeva", "phoneNumber": "2",
             "availableDays": "6-7", "startTime": "12:00", "endTime": "20:00"}
        ]"#,
        )
        .unwrap()
    }

    fn service() -> Service {
        serde_json::from_str(
            r#"{"id": "S1", "name": "Yoga",
                "category": {"id": "C1", "name": "Fitness"},
                "availabilities": [
                    {"id": "A1", "day": 3, "startTime": "10:00", "endTime": "11:00",
                     "trainer": {"id": "T1", "firstName": "Elvin", "lastName": "Quliyev"}}
                ],
                "subscriptionPlans": [{"id": "P1", "entryCount": 8, "price": 40}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_new_form_has_one_blank_row_each() {
        let form = ServiceForm::default();
        assert_eq!(form.availabilities.len(), 1);
        assert_eq!(form.subscription_plans.len(), 1);
        assert_eq!(form.availabilities[0].day, "");
        assert_eq!(form.subscription_plans[0].price, "");
    }

    #[test]
    fn test_from_service_maps_rows_to_strings() {
        let form = ServiceForm::from_service(&service());
        assert_eq!(form.name, "Yoga");
        assert_eq!(form.category_id, "C1");
        assert_eq!(form.availabilities[0].day, "3");
        assert_eq!(form.availabilities[0].trainer_id, "T1");
        assert_eq!(form.subscription_plans[0].entry_count, "8");
        assert_eq!(form.subscription_plans[0].price, "40");
    }

    #[test]
    fn test_from_service_with_empty_collections() {
        let mut empty = service();
        empty.availabilities.clear();
        empty.subscription_plans.clear();
        empty.category = None;
        let form = ServiceForm::from_service(&empty);
        assert_eq!(form.availabilities.len(), 1);
        assert_eq!(form.availabilities[0].trainer_id, "");
        assert_eq!(form.subscription_plans.len(), 1);
        assert_eq!(form.category_id, "");
    }

    #[test]
    fn test_rows_add_and_remove() {
        let mut form = ServiceForm::default();
        let key = form.add_availability_row();
        assert_eq!(form.availability_position(key), Some(1));

        form.remove_availability_row(0);
        assert_eq!(form.availability_position(key), Some(0));

        form.remove_availability_row(5);
        assert_eq!(form.availabilities.len(), 1);

        form.remove_availability_row(0);
        assert!(form.availabilities.is_empty());

        form.add_plan_row();
        form.remove_plan_row(0);
        form.remove_plan_row(9);
        assert_eq!(form.subscription_plans.len(), 1);
    }

    #[test]
    fn test_trainer_change_resets_day() {
        let mut form = ServiceForm::from_service(&service());
        form.set_availability_field(0, AvailabilityField::StartTime, "10:30");
        form.set_availability_field(0, AvailabilityField::Trainer, "T2");
        let row = &form.availabilities[0];
        assert_eq!(row.day, "");
        assert_eq!(row.trainer_id, "T2");
        assert_eq!(row.start_time, "10:30");

        // even re-selecting the same trainer clears the day
        form.set_availability_field(0, AvailabilityField::Day, "6");
        form.set_availability_field(0, AvailabilityField::Trainer, "T2");
        assert_eq!(form.availabilities[0].day, "");
    }

    #[test]
    fn test_day_options_follow_row_trainer() {
        let trainers = trainers();
        let mut form = ServiceForm::default();
        assert!(form.day_options(0, &trainers).is_empty());

        form.set_availability_field(0, AvailabilityField::Trainer, "T1");
        assert_eq!(form.day_options(0, &trainers), vec![2, 3, 4]);
        assert!(form.day_options(3, &trainers).is_empty());
    }

    #[test]
    fn test_time_bounds_follow_trainer_and_start() {
        let trainers = trainers();
        let mut form = ServiceForm::default();
        assert!(form.end_time_bounds(0, &trainers).is_none());

        form.set_availability_field(0, AvailabilityField::Trainer, "T2");
        let constraint = form.time_constraint_for_row(0, &trainers).unwrap();
        assert_eq!(constraint.start_time.to_string(), "12:00");

        let bounds = form.end_time_bounds(0, &trainers).unwrap();
        assert_eq!(bounds.min.to_string(), "12:00");
        assert_eq!(bounds.max.to_string(), "20:00");

        form.set_availability_field(0, AvailabilityField::StartTime, "15:00");
        let bounds = form.end_time_bounds(0, &trainers).unwrap();
        assert_eq!(bounds.min.to_string(), "15:00");
    }

    #[test]
    fn test_payload_drops_incomplete_rows() {
        let mut form = ServiceForm {
            name: "Pilates".into(),
            category_id: "C2".into(),
            ..ServiceForm::default()
        };
        // row 0 is missing its trainer
        form.set_availability_field(0, AvailabilityField::Day, "2");
        form.set_availability_field(0, AvailabilityField::StartTime, "09:00");
        form.set_availability_field(0, AvailabilityField::EndTime, "10:00");

        form.add_availability_row();
        form.set_availability_field(1, AvailabilityField::Trainer, "T1");
        form.set_availability_field(1, AvailabilityField::Day, "3");
        form.set_availability_field(1, AvailabilityField::StartTime, "10:00");
        form.set_availability_field(1, AvailabilityField::EndTime, "11:00");

        form.set_plan_field(0, PlanField::EntryCount, "8");
        form.set_plan_field(0, PlanField::Price, "40");
        form.add_plan_row();
        form.set_plan_field(1, PlanField::EntryCount, "12");

        let payload = form.to_payload();
        assert_eq!(payload.availabilities.len(), 1);
        assert_eq!(payload.availabilities[0].day, 3);
        assert_eq!(payload.subscription_plans.len(), 1);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Pilates",
                "categoryId": "C2",
                "availabilities": [
                    {"day": 3, "startTime": "10:00", "endTime": "11:00", "trainerId": "T1"}
                ],
                "subscriptionPlans": [{"entryCount": 8, "price": 40.0}]
            })
        );
    }

    #[test]
    fn test_payload_drops_row_with_blank_day() {
        let mut form = ServiceForm {
            name: "Yoga".into(),
            category_id: "C1".into(),
            ..ServiceForm::default()
        };
        // every field but the day is filled
        form.set_availability_field(0, AvailabilityField::Trainer, "T1");
        form.set_availability_field(0, AvailabilityField::StartTime, "09:00");
        form.set_availability_field(0, AvailabilityField::EndTime, "10:00");
        assert_eq!(form.availabilities[0].day, "");

        form.add_availability_row();
        form.set_availability_field(1, AvailabilityField::Trainer, "T1");
        form.set_availability_field(1, AvailabilityField::Day, "2");
        form.set_availability_field(1, AvailabilityField::StartTime, "10:00");
        form.set_availability_field(1, AvailabilityField::EndTime, "11:00");

        let json = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(
            json["availabilities"],
            serde_json::json!([
                {"day": 2, "startTime": "10:00", "endTime": "11:00", "trainerId": "T1"}
            ])
        );
    }

    #[test]
    fn test_payload_drops_non_numeric_plan() {
        let mut form = ServiceForm::default();
        form.set_plan_field(0, PlanField::EntryCount, "on");
        form.set_plan_field(0, PlanField::Price, "40");
        assert!(form.to_payload().subscription_plans.is_empty());
    }

    #[test]
    fn test_validate_requires_name() {
        assert!(ServiceForm::default().validate().is_err());
        assert!(ServiceForm::from_service(&service()).validate().is_ok());
    }
}
