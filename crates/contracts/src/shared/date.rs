//! Даты и моменты времени в формате API.
//!
//! Бэкенд принимает моменты в виде `toISOString()` браузера
//! (`2024-01-01T00:00:00.000Z`) и отдаёт их в RFC 3339.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Разбор даты из `<input type="date">` (`YYYY-MM-DD`)
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(value), "%Y-%m-%d").ok()
}

/// Дата без времени: `"1990-05-01T00:00:00Z"` -> `"1990-05-01"`
pub fn date_part(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed.split('T').next().unwrap_or(trimmed)
}

/// Полночь указанной даты по UTC.
///
/// Так браузер читает голую дату `YYYY-MM-DD`: `2024-01-01` это
/// `2024-01-01T00:00:00Z` независимо от часового пояса пользователя.
pub fn utc_midnight_instant(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Формат `Date.prototype.toISOString()`: миллисекунды и суффикс `Z`
pub fn to_iso_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Разбор момента из ответа API.
///
/// Понимает RFC 3339, дату-время без зоны (считается UTC) и голую дату.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_utc_midnight_instant() {
        let instant = utc_midnight_instant(ymd(2024, 1, 1));
        assert_eq!(to_iso_instant(instant), "2024-01-01T00:00:00.000Z");

        let instant = utc_midnight_instant(ymd(2024, 2, 29));
        assert_eq!(to_iso_instant(instant), "2024-02-29T00:00:00.000Z");
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-03-15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_input_date("2024-03-15T10:00:00Z"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15.03.2024"), None);
    }

    #[test]
    fn test_parse_instant_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(parse_instant("2024-05-10T12:00:00Z"), Some(expected));
        assert_eq!(parse_instant("2024-05-10T16:00:00+04:00"), Some(expected));
        assert_eq!(parse_instant("2024-05-10T12:00:00.000"), Some(expected));
        assert_eq!(
            parse_instant("2024-05-10"),
            Some(Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_instant("soon"), None);
    }
}
