//! Фильтр предложения услуги: планы и слоты выбранной услуги.

use super::aggregate::{Availability, Service, ServiceId, SubscriptionPlan};

/// Планы и слоты, доступные для выбранной услуги.
///
/// Ссылается на элементы каталога без копирования, порядок сохраняется.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceOffering<'a> {
    pub plans: &'a [SubscriptionPlan],
    pub availabilities: &'a [Availability],
}

impl<'a> ServiceOffering<'a> {
    pub fn empty() -> Self {
        Self {
            plans: &[],
            availabilities: &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty() && self.availabilities.is_empty()
    }
}

/// Предложение выбранной услуги.
///
/// Пустой выбор или неизвестный id дают пустые коллекции.
pub fn filter_service_offering<'a>(
    catalog: &'a [Service],
    selected: Option<&ServiceId>,
) -> ServiceOffering<'a> {
    selected
        .and_then(|id| catalog.iter().find(|s| &s.id == id))
        .map(|service| ServiceOffering {
            plans: &service.subscription_plans,
            availabilities: &service.availabilities,
        })
        .unwrap_or_else(ServiceOffering::empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Service> {
        serde_json::from_str(
            r#"[
            {"id": "S1", "name": "Yoga",
             "availabilities": [
                {"id": "A1", "day": 3, "startTime": "10:00", "endTime": "11:00"},
                {"id": "A2", "day": 5, "startTime": "18:00", "endTime": "19:00"}
             ],
             "subscriptionPlans": [
                {"id": "P2", "entryCount": 12, "price": 55},
                {"id": "P1", "entryCount": 8, "price": 40}
             ]},
            {"id": "S2", "name": "Boks", "availabilities": [], "subscriptionPlans": []}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_known_service_keeps_order() {
        let catalog = catalog();
        let offering = filter_service_offering(&catalog, Some(&ServiceId::new("S1")));
        assert_eq!(offering.plans, catalog[0].subscription_plans.as_slice());
        assert_eq!(offering.availabilities, catalog[0].availabilities.as_slice());
        let ids: Vec<&str> = offering.plans.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[test]
    fn test_unknown_or_missing_selection_is_empty() {
        let catalog = catalog();
        assert!(filter_service_offering(&catalog, Some(&ServiceId::new("S9"))).is_empty());
        assert!(filter_service_offering(&catalog, None).is_empty());
        assert!(filter_service_offering(&[], Some(&ServiceId::new("S1"))).is_empty());
    }

    #[test]
    fn test_service_without_offers() {
        let catalog = catalog();
        let offering = filter_service_offering(&catalog, Some(&ServiceId::new("S2")));
        assert!(offering.is_empty());
    }
}
