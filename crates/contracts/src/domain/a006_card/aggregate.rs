use crate::domain::common::AggregateRoot;
use crate::shared::date::parse_instant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Горизонт шкалы оставшихся дней (100% = 30 дней)
pub const PROGRESS_HORIZON_DAYS: i64 = 30;

// ============================================================================
// ID Type
// ============================================================================

crate::define_string_id!(
    /// Уникальный идентификатор карты
    CardId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Абонементная карта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "cardId")]
    pub id: CardId,
    pub card_number: u64,
    #[serde(default)]
    pub card_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub entry_limit: Option<u32>,
    #[serde(default)]
    pub is_active: bool,
}

/// Статус карты для бейджа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Active,
    Expired,
    Inactive,
}

impl CardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CardStatus::Active => "Aktiv",
            CardStatus::Expired => "Vaxtı Keçib",
            CardStatus::Inactive => "Passiv",
        }
    }
}

/// Срочность по числу оставшихся дней (цвет шкалы)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Comfortable,
    Warning,
    Critical,
}

impl Urgency {
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left > 7 {
            Urgency::Comfortable
        } else if days_left > 3 {
            Urgency::Warning
        } else {
            Urgency::Critical
        }
    }
}

impl Card {
    fn end_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.end_date)
    }

    /// Дата окончания в прошлом. Нераспознанная дата не считается истёкшей.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end_instant().is_some_and(|end| end < now)
    }

    /// Оставшиеся дни, округление вверх
    pub fn days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        let diff = (self.end_instant()? - now).num_milliseconds();
        Some((diff + MILLIS_PER_DAY - 1).div_euclid(MILLIS_PER_DAY))
    }

    pub fn status(&self, now: DateTime<Utc>) -> CardStatus {
        if self.is_expired(now) {
            CardStatus::Expired
        } else if self.is_active {
            CardStatus::Active
        } else {
            CardStatus::Inactive
        }
    }

    pub fn urgency(&self, now: DateTime<Utc>) -> Option<Urgency> {
        self.days_left(now).map(Urgency::from_days_left)
    }

    /// Ширина шкалы оставшегося времени в процентах, `0..=100`
    pub fn progress_percent(&self, now: DateTime<Utc>) -> Option<f64> {
        let days = self.days_left(now)?;
        Some((days as f64 / PROGRESS_HORIZON_DAYS as f64 * 100.0).clamp(0.0, 100.0))
    }

    /// Деактивировать можно только действующую карту
    pub fn can_deactivate(&self, now: DateTime<Utc>) -> bool {
        self.status(now) == CardStatus::Active
    }

    pub fn glyph(&self) -> &'static str {
        card_type_glyph(&self.card_type)
    }

    /// Путь действия деактивации
    pub fn deactivate_path(id: &CardId) -> String {
        format!("{}/deactivate", Self::item_path(id))
    }

    /// Путь словаря типов карт
    pub fn types_path() -> String {
        format!("{}/types", Self::api_path())
    }
}

impl AggregateRoot for Card {
    type Id = CardId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("#{}", self.card_number)
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn entity_key() -> &'static str {
        "card"
    }

    fn collection_name() -> &'static str {
        "cards"
    }

    fn element_name() -> &'static str {
        "Kart"
    }

    fn list_name() -> &'static str {
        "Kartlar"
    }
}

/// Значок типа карты
pub fn card_type_glyph(card_type: &str) -> &'static str {
    match card_type {
        "MONTHLY" => "📅",
        "YEARLY" => "🗓️",
        "DAILY" => "📋",
        _ => "💳",
    }
}

/// Типы карт, доступные для выбора.
///
/// `restrict_to` оставляет только совпадающий тип (без учёта регистра).
pub fn card_type_choices(vocabulary: &[String], restrict_to: Option<&str>) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|t| restrict_to.map_or(true, |only| t.eq_ignore_ascii_case(only)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn card(end: DateTime<Utc>, active: bool) -> Card {
        Card {
            id: CardId::new("K1"),
            card_number: 100,
            card_type: "MONTHLY".into(),
            start_date: "2024-02-01T00:00:00.000Z".into(),
            end_date: end.to_rfc3339(),
            entry_limit: Some(12),
            is_active: active,
        }
    }

    #[test]
    fn test_deserialize_card() {
        let json = r#"{"cardId": 5, "cardNumber": 100, "cardType": "YEARLY",
            "startDate": "2024-01-01T00:00:00.000Z", "endDate": "2025-01-01T00:00:00.000Z",
            "entryLimit": 100, "isActive": true}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id.as_str(), "5");
        assert_eq!(card.display_name(), "#100");
        assert_eq!(card.glyph(), "🗓️");
    }

    #[test]
    fn test_days_left_rounds_up() {
        let now = now();
        assert_eq!(card(now + Duration::hours(1), true).days_left(now), Some(1));
        assert_eq!(card(now + Duration::days(10), true).days_left(now), Some(10));
        assert_eq!(card(now - Duration::hours(1), true).days_left(now), Some(0));
        assert_eq!(card(now - Duration::hours(36), true).days_left(now), Some(-1));
    }

    #[test]
    fn test_status() {
        let now = now();
        assert_eq!(card(now + Duration::days(5), true).status(now), CardStatus::Active);
        assert_eq!(card(now + Duration::days(5), false).status(now), CardStatus::Inactive);
        assert_eq!(card(now - Duration::days(1), true).status(now), CardStatus::Expired);
        assert_eq!(card(now - Duration::days(1), false).status(now), CardStatus::Expired);

        assert!(card(now + Duration::days(5), true).can_deactivate(now));
        assert!(!card(now - Duration::days(1), true).can_deactivate(now));
        assert!(!card(now + Duration::days(5), false).can_deactivate(now));
    }

    #[test]
    fn test_urgency_and_progress() {
        let now = now();
        let long = card(now + Duration::days(45), true);
        assert_eq!(long.urgency(now), Some(Urgency::Comfortable));
        assert_eq!(long.progress_percent(now), Some(100.0));

        let mid = card(now + Duration::days(15), true);
        assert_eq!(mid.progress_percent(now), Some(50.0));

        assert_eq!(card(now + Duration::days(5), true).urgency(now), Some(Urgency::Warning));
        assert_eq!(card(now + Duration::days(3), true).urgency(now), Some(Urgency::Critical));
    }

    #[test]
    fn test_unparsable_end_date() {
        let mut broken = card(now(), true);
        broken.end_date = "never".into();
        assert!(!broken.is_expired(now()));
        assert_eq!(broken.days_left(now()), None);
        assert_eq!(broken.status(now()), CardStatus::Active);
    }

    #[test]
    fn test_card_type_choices() {
        let vocab: Vec<String> = ["MONTHLY", "LIMITLESS", "DAILY"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(card_type_choices(&vocab, None), vocab);
        assert_eq!(card_type_choices(&vocab, Some("limitless")), vec!["LIMITLESS"]);
        assert!(card_type_choices(&vocab, Some("weekly")).is_empty());
        assert_eq!(card_type_glyph("LIMITLESS"), "💳");
    }

    #[test]
    fn test_paths() {
        let id = CardId::new("K1");
        assert_eq!(Card::deactivate_path(&id), "/api/cards/K1/deactivate");
        assert_eq!(Card::types_path(), "/api/cards/types");
    }
}
