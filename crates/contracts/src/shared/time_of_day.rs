use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ошибка разбора времени `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    #[error("time is empty")]
    Empty,
    #[error("time '{0}' is not in HH:MM form")]
    Malformed(String),
    #[error("time '{0}' is out of range")]
    OutOfRange(String),
}

/// Время суток без часового пояса (24-часовой формат).
///
/// Порядок совпадает с лексикографическим порядком строк `HH:MM`
/// с ведущими нулями.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Разбор необязательного значения: пустая строка и мусор дают `None`
    pub fn parse_opt(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    /// Принимает `HH:MM` и `HH:MM:SS` (секунды отбрасываются)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ClockTimeError::Empty);
        }

        let mut parts = trimmed.split(':');
        let (Some(h), Some(m)) = (parts.next(), parts.next()) else {
            return Err(ClockTimeError::Malformed(trimmed.to_string()));
        };
        let seconds_ok = match parts.next() {
            None => true,
            Some(sec) => sec.len() == 2 && sec.bytes().all(|b| b.is_ascii_digit()),
        };
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if parts.next().is_some() || !seconds_ok || !two_digits(h) || !two_digits(m) {
            return Err(ClockTimeError::Malformed(trimmed.to_string()));
        }

        let hour: u8 = h
            .parse()
            .map_err(|_| ClockTimeError::Malformed(trimmed.to_string()))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| ClockTimeError::Malformed(trimmed.to_string()))?;

        ClockTime::new(hour, minute).ok_or_else(|| ClockTimeError::OutOfRange(trimmed.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Границы для выбора времени (`min`/`max` у `<input type="time">`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBounds {
    pub min: ClockTime,
    pub max: ClockTime,
}

impl TimeBounds {
    pub fn contains(&self, t: ClockTime) -> bool {
        self.min <= t && t <= self.max
    }

    /// Пустой интервал (например, выбранное начало позже конца окна тренера)
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t: ClockTime = "09:05".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 5));
        assert_eq!(t.to_string(), "09:05");

        let with_seconds: ClockTime = "18:30:00".parse().unwrap();
        assert_eq!(with_seconds.to_string(), "18:30");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ClockTime>(), Err(ClockTimeError::Empty));
        assert!(matches!("9:00".parse::<ClockTime>(), Err(ClockTimeError::Malformed(_))));
        assert!(matches!("ab:cd".parse::<ClockTime>(), Err(ClockTimeError::Malformed(_))));
        assert!(matches!("24:00".parse::<ClockTime>(), Err(ClockTimeError::OutOfRange(_))));
        assert!(matches!("10:00:00:00".parse::<ClockTime>(), Err(ClockTimeError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_signs_and_spaces_inside() {
        for raw in ["+9:30", "09:+3", "-1:00", "0 :30", "09: 5"] {
            assert!(
                matches!(raw.parse::<ClockTime>(), Err(ClockTimeError::Malformed(_))),
                "{raw} should be malformed"
            );
        }
    }

    #[test]
    fn test_order_matches_zero_padded_strings() {
        let samples = ["00:00", "07:59", "08:00", "12:30", "23:59"];
        for a in samples {
            for b in samples {
                let ta: ClockTime = a.parse().unwrap();
                let tb: ClockTime = b.parse().unwrap();
                assert_eq!(ta.cmp(&tb), a.cmp(b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_bounds() {
        let bounds = TimeBounds {
            min: "10:00".parse().unwrap(),
            max: "18:00".parse().unwrap(),
        };
        assert!(bounds.contains("10:00".parse().unwrap()));
        assert!(bounds.contains("18:00".parse().unwrap()));
        assert!(!bounds.contains("09:59".parse().unwrap()));
        assert!(!bounds.is_empty());
    }
}
