use serde::{Deserialize, Serialize};

/// Конверт списка из API: `{ "data": [...], "totalPages": n }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total_pages: None,
        }
    }
}

/// Тело ошибки от бэкенда
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status_message: Option<String>,
}

impl ApiErrorBody {
    /// Сообщение для показа пользователю как есть (пустые строки игнорируются)
    pub fn message(&self) -> Option<&str> {
        self.status_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Параметры постраничного запроса (`?page=1&pageSize=6`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_tolerates_missing_fields() {
        let parsed: ListResponse<String> = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.total_pages, None);

        let parsed: ListResponse<String> =
            serde_json::from_str(r#"{"data":["a","b"],"totalPages":3}"#).unwrap();
        assert_eq!(parsed.data, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(parsed.total_pages, Some(3));
    }

    #[test]
    fn test_error_body_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"statusMessage":"Card number already exists"}"#).unwrap();
        assert_eq!(body.message(), Some("Card number already exists"));

        let blank: ApiErrorBody = serde_json::from_str(r#"{"statusMessage":"  "}"#).unwrap();
        assert_eq!(blank.message(), None);
    }
}
