//! Настройки клиента панели.
//!
//! Значения фиксируются при сборке через переменные окружения:
//! - `GYM_API_URL` - базовый адрес API (по умолчанию `{protocol}//{hostname}:3000`)
//! - `GYM_FLASH_TIMEOUT_MS` - время показа баннера уведомления

/// Время показа баннера по умолчанию, мс
pub const DEFAULT_FLASH_TIMEOUT_MS: u32 = 5_000;

/// Порт бэкенда, если адрес API не задан при сборке
const DEFAULT_API_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub flash_timeout_ms: u32,
}

impl AppConfig {
    pub fn load() -> Self {
        let config = Self {
            api_base: normalize_base(option_env!("GYM_API_URL"))
                .unwrap_or_else(location_api_base),
            flash_timeout_ms: parse_timeout(option_env!("GYM_FLASH_TIMEOUT_MS")),
        };
        log::debug!("config: api_base={}, flash={}ms", config.api_base, config.flash_timeout_ms);
        config
    }
}

/// Адрес API рядом со страницей: тот же хост, порт бэкенда
fn location_api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

fn normalize_base(raw: Option<&str>) -> Option<String> {
    raw.map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_FLASH_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base(Some("https://gym.example.app/")),
            Some("https://gym.example.app".to_string())
        );
        assert_eq!(normalize_base(Some("  ")), None);
        assert_eq!(normalize_base(None), None);
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(Some("2500")), 2500);
        assert_eq!(parse_timeout(Some("0")), DEFAULT_FLASH_TIMEOUT_MS);
        assert_eq!(parse_timeout(Some("soon")), DEFAULT_FLASH_TIMEOUT_MS);
        assert_eq!(parse_timeout(None), DEFAULT_FLASH_TIMEOUT_MS);
    }
}
