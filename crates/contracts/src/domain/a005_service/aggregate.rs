use crate::domain::a002_trainer::aggregate::{TrainerId, TrainerSummary};
use crate::domain::a002_trainer::schedule::weekday_label;
use crate::domain::a004_service_category::aggregate::{CategoryId, ServiceCategory};
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================

crate::define_string_id!(
    /// Уникальный идентификатор услуги
    ServiceId
);

crate::define_string_id!(
    /// Идентификатор слота (день + время + тренер) услуги
    AvailabilityId
);

crate::define_string_id!(
    /// Идентификатор абонементного плана услуги
    SubscriptionPlanId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Услуга зала со слотами и абонементными планами
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<ServiceCategory>,
    /// Слоты в порядке, заданном бэкендом
    #[serde(default)]
    pub availabilities: Vec<Availability>,
    /// Планы в порядке, заданном бэкендом
    #[serde(default)]
    pub subscription_plans: Vec<SubscriptionPlan>,
}

impl Service {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    pub fn find_plan(&self, plan_id: &str) -> Option<&SubscriptionPlan> {
        self.subscription_plans
            .iter()
            .find(|p| p.id.as_str() == plan_id)
    }

    pub fn find_availability(&self, availability_id: &str) -> Option<&Availability> {
        self.availabilities
            .iter()
            .find(|a| a.id.as_str() == availability_id)
    }
}

impl AggregateRoot for Service {
    type Id = ServiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn entity_key() -> &'static str {
        "service"
    }

    fn collection_name() -> &'static str {
        "services"
    }

    fn element_name() -> &'static str {
        "Xidmət"
    }

    fn list_name() -> &'static str {
        "Xidmətlər"
    }
}

/// Слот услуги: день недели, окно времени и тренер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: AvailabilityId,
    /// 1 = понедельник
    pub day: u8,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub trainer: Option<TrainerSummary>,
}

impl Availability {
    /// Подпись опции в форме выдачи карты
    pub fn option_label(&self) -> String {
        format!(
            "Gün: {} Saat: {} - {}",
            self.day, self.start_time, self.end_time
        )
    }

    /// Короткая подпись для карточки услуги: "Çərşənbə 10:00-11:00"
    pub fn short_label(&self) -> String {
        format!(
            "{} {}-{}",
            weekday_label(self.day).unwrap_or("?"),
            self.start_time,
            self.end_time
        )
    }
}

/// Абонементный план: число посещений и цена
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: SubscriptionPlanId,
    pub entry_count: u32,
    pub price: f64,
}

impl SubscriptionPlan {
    /// Подпись опции в форме выдачи карты: "10 giriş - 50 AZN"
    pub fn option_label(&self) -> String {
        format!("{} giriş - {} AZN", self.entry_count, self.price)
    }

    /// Бейдж на карточке услуги: "10x - 50₼"
    pub fn badge_label(&self) -> String {
        format!("{}x - {}₼", self.entry_count, self.price)
    }
}

// ============================================================================
// Payload (POST /api/services, PATCH /api/services/{id})
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub name: String,
    /// Пустая строка, если категория не выбрана
    pub category_id: String,
    pub availabilities: Vec<AvailabilityPayload>,
    pub subscription_plans: Vec<SubscriptionPlanPayload>,
}

impl ServicePayload {
    pub fn category(&self) -> Option<CategoryId> {
        if self.category_id.is_empty() {
            None
        } else {
            Some(CategoryId::new(self.category_id.clone()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPayload {
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
    pub trainer_id: TrainerId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlanPayload {
    pub entry_count: u32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE_JSON: &str = r#"{
        "id": "S1",
        "name": "Yoga",
        "category": {"id": "C1", "name": "Fitness", "description": null},
        "availabilities": [
            {"id": "A1", "day": 3, "startTime": "10:00", "endTime": "11:00",
             "trainer": {"id": "T1", "firstName": "Elvin", "lastName": "Quliyev"}}
        ],
        "subscriptionPlans": [
            {"id": "P1", "entryCount": 8, "price": 40},
            {"id": "P2", "entryCount": 12, "price": 55.5}
        ]
    }"#;

    #[test]
    fn test_deserialize_service() {
        let service: Service = serde_json::from_str(SERVICE_JSON).unwrap();
        assert_eq!(service.category_name(), Some("Fitness"));
        assert_eq!(service.availabilities.len(), 1);
        assert_eq!(
            service.availabilities[0].trainer.as_ref().map(|t| t.display_name()),
            Some("Elvin Quliyev".to_string())
        );
        assert!(service.find_plan("P2").is_some());
        assert!(service.find_availability("A9").is_none());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let service: Service = serde_json::from_str(r#"{"id": 4, "name": "Sauna"}"#).unwrap();
        assert!(service.availabilities.is_empty());
        assert!(service.subscription_plans.is_empty());
        assert_eq!(service.category_name(), None);
    }

    #[test]
    fn test_labels() {
        let service: Service = serde_json::from_str(SERVICE_JSON).unwrap();
        assert_eq!(service.subscription_plans[0].option_label(), "8 giriş - 40 AZN");
        assert_eq!(service.subscription_plans[1].badge_label(), "12x - 55.5₼");
        assert_eq!(
            service.availabilities[0].option_label(),
            "Gün: 3 Saat: 10:00 - 11:00"
        );
        assert_eq!(service.availabilities[0].short_label(), "Çərşənbə 10:00-11:00");
    }
}
