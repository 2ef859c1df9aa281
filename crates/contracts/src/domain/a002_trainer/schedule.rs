//! Рабочий график тренера: диапазон дней недели и окно времени.
//!
//! Дни недели нумеруются 1..=7, понедельник = 1.

use crate::shared::time_of_day::{ClockTime, TimeBounds};
use thiserror::Error;

pub const FIRST_WEEKDAY: u8 = 1;
pub const LAST_WEEKDAY: u8 = 7;

/// Названия дней недели, индекс 0 = понедельник
const WEEKDAY_LABELS: [&str; 7] = [
    "Bazar ertəsi",
    "Çərşənbə axşamı",
    "Çərşənbə",
    "Cümə axşamı",
    "Cümə",
    "Şənbə",
    "Bazar",
];

/// Ошибка разбора строки диапазона дней (`"2-5"`)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekdayRangeError {
    #[error("weekday range is empty")]
    Empty,
    #[error("weekday range '{0}' is not in 'start-end' form")]
    Malformed(String),
    #[error("weekday {0} is outside 1..=7")]
    OutOfBounds(u8),
    #[error("weekday range starts at {start} after it ends at {end}")]
    Inverted { start: u8, end: u8 },
}

/// Включительный диапазон рабочих дней тренера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayRange {
    start: u8,
    end: u8,
}

impl WeekdayRange {
    /// Строгий разбор `"<start>-<end>"`.
    ///
    /// Перевёрнутый диапазон (`"5-2"`) является ошибкой, а не пустым набором.
    pub fn parse(raw: &str) -> Result<Self, WeekdayRangeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WeekdayRangeError::Empty);
        }

        let (start, end) = trimmed
            .split_once('-')
            .ok_or_else(|| WeekdayRangeError::Malformed(trimmed.to_string()))?;
        let start = parse_weekday(start, trimmed)?;
        let end = parse_weekday(end, trimmed)?;

        if start > end {
            return Err(WeekdayRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn days(&self) -> Vec<u8> {
        (self.start..=self.end).collect()
    }

    pub fn contains(&self, day: u8) -> bool {
        (self.start..=self.end).contains(&day)
    }
}

impl std::fmt::Display for WeekdayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn parse_weekday(part: &str, whole: &str) -> Result<u8, WeekdayRangeError> {
    let day: u8 = part
        .trim()
        .parse()
        .map_err(|_| WeekdayRangeError::Malformed(whole.to_string()))?;
    if !(FIRST_WEEKDAY..=LAST_WEEKDAY).contains(&day) {
        return Err(WeekdayRangeError::OutOfBounds(day));
    }
    Ok(day)
}

/// Раскрывает диапазон дней тренера в список дней по возрастанию.
///
/// Отсутствующий, пустой или некорректный диапазон даёт пустой список:
/// выпадающий список дней просто остаётся пустым.
pub fn expand_weekday_range(raw: Option<&str>) -> Vec<u8> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match WeekdayRange::parse(raw) {
        Ok(range) => range.days(),
        Err(WeekdayRangeError::Empty) => Vec::new(),
        Err(e) => {
            log::debug!("weekday range '{}' ignored: {}", raw, e);
            Vec::new()
        }
    }
}

/// Название дня недели (1 = понедельник)
pub fn weekday_label(day: u8) -> Option<&'static str> {
    day.checked_sub(1)
        .and_then(|idx| WEEKDAY_LABELS.get(idx as usize))
        .copied()
}

/// Допустимое окно времени для слотов тренера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainerTimeConstraint {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl TrainerTimeConstraint {
    /// Окно из строк `HH:MM`; `None`, если граница не задана
    /// или начало не раньше конца
    pub fn from_times(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start_time = ClockTime::parse_opt(start)?;
        let end_time = ClockTime::parse_opt(end)?;
        if start_time >= end_time {
            log::debug!("trainer window {}-{} is empty", start_time, end_time);
            return None;
        }
        Some(Self {
            start_time,
            end_time,
        })
    }

    /// Границы для выбора времени начала слота
    pub fn start_bounds(&self) -> TimeBounds {
        TimeBounds {
            min: self.start_time,
            max: self.end_time,
        }
    }

    /// Границы для выбора времени окончания: не раньше выбранного начала
    pub fn end_bounds(&self, chosen_start: Option<ClockTime>) -> TimeBounds {
        let min = match chosen_start {
            Some(start) if start > self.start_time => start,
            _ => self.start_time,
        };
        TimeBounds {
            min,
            max: self.end_time,
        }
    }

    /// Слот целиком внутри окна тренера и начинается раньше, чем кончается
    pub fn admits(&self, start: ClockTime, end: ClockTime) -> bool {
        start < end && self.start_time <= start && end <= self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_expand_all_valid_ranges() {
        for a in 1..=7u8 {
            for b in a..=7u8 {
                let raw = format!("{a}-{b}");
                let expected: Vec<u8> = (a..=b).collect();
                assert_eq!(expand_weekday_range(Some(&raw)), expected, "range {raw}");
            }
        }
    }

    #[test]
    fn test_expand_single_day_and_empty() {
        assert_eq!(expand_weekday_range(Some("3-3")), vec![3]);
        assert_eq!(expand_weekday_range(Some("")), Vec::<u8>::new());
        assert_eq!(expand_weekday_range(None), Vec::<u8>::new());
    }

    #[test]
    fn test_expand_malformed_is_empty() {
        assert!(expand_weekday_range(Some("5-2")).is_empty());
        assert!(expand_weekday_range(Some("0-3")).is_empty());
        assert!(expand_weekday_range(Some("2-9")).is_empty());
        assert!(expand_weekday_range(Some("mon-fri")).is_empty());
        assert!(expand_weekday_range(Some("4")).is_empty());
    }

    #[test]
    fn test_strict_parse_errors() {
        assert_eq!(WeekdayRange::parse(" "), Err(WeekdayRangeError::Empty));
        assert_eq!(
            WeekdayRange::parse("5-2"),
            Err(WeekdayRangeError::Inverted { start: 5, end: 2 })
        );
        assert_eq!(WeekdayRange::parse("1-8"), Err(WeekdayRangeError::OutOfBounds(8)));
        assert!(matches!(WeekdayRange::parse("x-2"), Err(WeekdayRangeError::Malformed(_))));

        let range = WeekdayRange::parse(" 2 - 5 ").unwrap();
        assert_eq!(range.to_string(), "2-5");
        assert!(range.contains(4));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_label(1), Some("Bazar ertəsi"));
        assert_eq!(weekday_label(7), Some("Bazar"));
        assert_eq!(weekday_label(0), None);
        assert_eq!(weekday_label(8), None);
    }

    #[test]
    fn test_time_constraint_bounds() {
        let c = TrainerTimeConstraint::from_times(Some("09:00"), Some("18:00")).unwrap();
        assert_eq!(c.start_bounds(), TimeBounds { min: t("09:00"), max: t("18:00") });

        assert_eq!(c.end_bounds(None).min, t("09:00"));
        assert_eq!(c.end_bounds(Some(t("11:30"))).min, t("11:30"));
        // начало раньше окна не расширяет границы
        assert_eq!(c.end_bounds(Some(t("07:00"))).min, t("09:00"));
    }

    #[test]
    fn test_time_constraint_admits() {
        let c = TrainerTimeConstraint::from_times(Some("09:00"), Some("18:00")).unwrap();
        assert!(c.admits(t("09:00"), t("10:00")));
        assert!(c.admits(t("17:00"), t("18:00")));
        assert!(!c.admits(t("08:30"), t("10:00")));
        assert!(!c.admits(t("17:00"), t("18:30")));
        assert!(!c.admits(t("12:00"), t("12:00")));
    }

    #[test]
    fn test_time_constraint_requires_both_times() {
        assert!(TrainerTimeConstraint::from_times(Some("09:00"), None).is_none());
        assert!(TrainerTimeConstraint::from_times(Some(""), Some("18:00")).is_none());
    }

    #[test]
    fn test_time_constraint_rejects_inverted_window() {
        assert!(TrainerTimeConstraint::from_times(Some("18:00"), Some("09:00")).is_none());
        assert!(TrainerTimeConstraint::from_times(Some("09:00"), Some("09:00")).is_none());
        assert!(TrainerTimeConstraint::from_times(Some("09:00"), Some("09:01")).is_some());
    }
}
