use super::schedule::{expand_weekday_range, TrainerTimeConstraint, WeekdayRange};
use crate::domain::common::{AggregateRoot, PersonProfile};
use crate::shared::time_of_day::ClockTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::define_string_id!(
    /// Уникальный идентификатор тренера
    TrainerId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Тренер зала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: TrainerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    /// Диапазон рабочих дней, например "2-5"
    #[serde(default)]
    pub available_days: Option<String>,
    /// Начало рабочего дня, "HH:MM"
    #[serde(default)]
    pub start_time: Option<String>,
    /// Конец рабочего дня, "HH:MM"
    #[serde(default)]
    pub end_time: Option<String>,
}

impl Trainer {
    /// Рабочие дни тренера (пустой список, если диапазон не задан)
    pub fn available_days(&self) -> Vec<u8> {
        expand_weekday_range(self.available_days.as_deref())
    }

    /// Окно времени для слотов этого тренера
    pub fn time_constraint(&self) -> Option<TrainerTimeConstraint> {
        TrainerTimeConstraint::from_times(self.start_time.as_deref(), self.end_time.as_deref())
    }

    /// Подпись графика для карточки: "2-5 · 09:00 - 18:00"
    pub fn schedule_summary(&self) -> String {
        let days = self.available_days.as_deref().unwrap_or("-");
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => format!("{} · {} - {}", days, start, end),
            _ => days.to_string(),
        }
    }
}

impl PersonProfile for Trainer {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

impl AggregateRoot for Trainer {
    type Id = TrainerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> String {
        self.person_name()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn entity_key() -> &'static str {
        "trainer"
    }

    fn collection_name() -> &'static str {
        "trainers"
    }

    fn element_name() -> &'static str {
        "Məşqçi"
    }

    fn list_name() -> &'static str {
        "Məşqçilər"
    }
}

/// Тренер, вложенный в слот услуги (бэкенд отдаёт сокращённую запись)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerSummary {
    pub id: TrainerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl TrainerSummary {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Поиск тренера в снимке каталога по строковому id из формы
pub fn find_trainer<'a>(trainers: &'a [Trainer], trainer_id: &str) -> Option<&'a Trainer> {
    if trainer_id.is_empty() {
        return None;
    }
    trainers.iter().find(|t| t.id.as_str() == trainer_id)
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления тренера (отправляется как JSON)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainerDto {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub available_days: String,
    pub start_time: String,
    pub end_time: String,
}

impl TrainerDto {
    pub fn from_trainer(trainer: &Trainer) -> Self {
        Self {
            first_name: trainer.first_name.clone(),
            last_name: trainer.last_name.clone(),
            phone_number: trainer.phone_number.clone(),
            available_days: trainer.available_days.clone().unwrap_or_default(),
            start_time: trainer.start_time.clone().unwrap_or_default(),
            end_time: trainer.end_time.clone().unwrap_or_default(),
        }
    }

    /// Обязательные поля заполнены
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.phone_number,
            &self.available_days,
            &self.start_time,
            &self.end_time,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }

    /// Подсказка по графику: диапазон дней и порядок времени.
    ///
    /// Не блокирует отправку, окончательную проверку делает бэкенд.
    pub fn schedule_warning(&self) -> Option<String> {
        if !self.available_days.trim().is_empty() {
            if let Err(e) = WeekdayRange::parse(&self.available_days) {
                return Some(format!("Günlər aralığı səhvdir: {}", e));
            }
        }
        let start = self.start_time.parse::<ClockTime>().ok();
        let end = self.end_time.parse::<ClockTime>().ok();
        match (start, end) {
            (Some(s), Some(e)) if s >= e => {
                Some("Başlama saatı bitmə saatından əvvəl olmalıdır".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trainer(days: Option<&str>, start: Option<&str>, end: Option<&str>) -> Trainer {
        Trainer {
            id: TrainerId::new("T1"),
            first_name: "Elvin".into(),
            last_name: "Quliyev".into(),
            phone_number: "+994551112233".into(),
            available_days: days.map(String::from),
            start_time: start.map(String::from),
            end_time: end.map(String::from),
        }
    }

    #[test]
    fn test_deserialize_from_api() {
        let json = r#"{
            "id": "T1",
            "firstName": "Elvin",
            "lastName": "Quliyev",
            "phoneNumber": "+994551112233",
            "availableDays": "2-5",
            "startTime": "10:00",
            "endTime": "19:00"
        }"#;
        let t: Trainer = serde_json::from_str(json).unwrap();
        assert_eq!(t.available_days(), vec![2, 3, 4, 5]);
        let c = t.time_constraint().unwrap();
        assert_eq!(c.start_time.to_string(), "10:00");
        assert_eq!(c.end_time.to_string(), "19:00");
    }

    #[test]
    fn test_missing_schedule_gives_no_choices() {
        let t = trainer(None, None, None);
        assert!(t.available_days().is_empty());
        assert!(t.time_constraint().is_none());
        assert_eq!(t.schedule_summary(), "-");
    }

    #[test]
    fn test_find_trainer() {
        let list = vec![trainer(Some("1-5"), None, None)];
        assert!(find_trainer(&list, "T1").is_some());
        assert!(find_trainer(&list, "T2").is_none());
        assert!(find_trainer(&list, "").is_none());
    }

    #[test]
    fn test_dto_roundtrip_and_warning() {
        let t = trainer(Some("2-5"), Some("10:00"), Some("19:00"));
        let dto = TrainerDto::from_trainer(&t);
        assert!(dto.is_complete());
        assert_eq!(dto.schedule_warning(), None);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["availableDays"], "2-5");
        assert_eq!(json["startTime"], "10:00");

        let inverted = TrainerDto {
            available_days: "5-2".into(),
            ..dto.clone()
        };
        assert!(inverted.schedule_warning().is_some());

        let late_start = TrainerDto {
            start_time: "20:00".into(),
            ..dto
        };
        assert!(late_start.schedule_warning().is_some());
    }

    #[test]
    fn test_paths() {
        assert_eq!(Trainer::api_path(), "/api/trainers");
        assert_eq!(Trainer::item_path(&TrainerId::new("T1")), "/api/trainers/T1");
        assert_eq!(Trainer::full_name(), "a002_trainer");
    }
}
