//! API utilities for frontend-backend communication
//!
//! Все запросы идут через `gloo-net`; ответы списков приходят в конверте
//! `{ "data": [...] }`, ошибки в теле `{ "statusMessage": "..." }`.

use crate::shared::config::AppConfig;
use contracts::domain::common::{ApiErrorBody, ListResponse, MultipartFields, PageQuery};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use web_sys::{File, FormData};

/// Заголовок, отключающий промежуточную страницу туннеля ngrok
const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Get the base URL for API requests
pub fn api_base() -> String {
    leptos::prelude::use_context::<AppConfig>()
        .unwrap_or_else(AppConfig::load)
        .api_base
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn request(method: HttpMethod, url: &str) -> RequestBuilder {
    let builder = match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Patch => Request::patch(url),
        HttpMethod::Delete => Request::delete(url),
    };
    builder
        .header(NGROK_SKIP_HEADER, "true")
        .header("Accept", "application/json")
}

/// Ошибка запроса к API.
///
/// `message` заполнен, только если бэкенд прислал `statusMessage`;
/// иначе экран показывает свой запасной текст, а `detail` уходит в лог.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: Option<String>,
    pub detail: String,
}

impl ApiError {
    /// Ошибка до ответа сервера: сеть, сериализация, разбор
    pub fn local(detail: impl Into<String>) -> Self {
        Self {
            message: None,
            detail: detail.into(),
        }
    }

    /// Неуспешный ответ: `statusMessage` из тела, если он есть
    pub fn from_response(body: &str, status: u16) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message().map(str::to_string));
        Self {
            message,
            detail: format!("HTTP {}", status),
        }
    }

    /// Текст для пользователя: сообщение бэкенда или запасной текст экрана
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} ({})", message, self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

async fn check(response: Response, method: HttpMethod, url: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(&body, status);
    log::error!("{:?} {} failed: {}", method, url, error);
    Err(error)
}

/// GET с разбором JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    let response = request(HttpMethod::Get, &url)
        .send()
        .await
        .map_err(|e| ApiError::local(format!("Failed to send request: {}", e)))?;
    check(response, HttpMethod::Get, &url)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::local(format!("Failed to parse response: {}", e)))
}

/// GET списка в конверте `{ data }`
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    get_json::<ListResponse<T>>(path).await.map(|r| r.data)
}

/// GET страницы списка: `?page=N&pageSize=M`
pub async fn get_page<T: DeserializeOwned>(
    path: &str,
    query: PageQuery,
) -> Result<ListResponse<T>, ApiError> {
    let qs = serde_qs::to_string(&query)
        .map_err(|e| ApiError::local(format!("Failed to encode query: {}", e)))?;
    get_json::<ListResponse<T>>(&format!("{}?{}", path, qs)).await
}

/// POST/PUT/PATCH с JSON-телом
pub async fn send_json<B: Serialize>(
    method: HttpMethod,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let url = api_url(path);
    let response = request(method, &url)
        .json(body)
        .map_err(|e| ApiError::local(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::local(format!("Failed to send request: {}", e)))?;
    check(response, method, &url).await?;
    log::info!("{:?} {} ok", method, url);
    Ok(())
}

/// Тело multipart: непустые текстовые поля и необязательный файл под именем `file_field`
pub fn multipart_form<F: MultipartFields>(
    fields: &F,
    file_field: &str,
    file: Option<&File>,
) -> Result<FormData, ApiError> {
    let form = FormData::new()
        .map_err(|e| ApiError::local(format!("Failed to create form data: {:?}", e)))?;
    for (name, value) in fields.multipart_fields() {
        form.append_with_str(name, &value)
            .map_err(|e| ApiError::local(format!("Failed to append {}: {:?}", name, e)))?;
    }
    if let Some(file) = file {
        form.append_with_blob_and_filename(file_field, file, &file.name())
            .map_err(|e| ApiError::local(format!("Failed to append {}: {:?}", file_field, e)))?;
    }
    Ok(form)
}

/// POST/PUT с телом multipart/form-data (браузер сам ставит boundary)
pub async fn send_multipart(method: HttpMethod, path: &str, form: FormData) -> Result<(), ApiError> {
    let url = api_url(path);
    let response = request(method, &url)
        .body(form)
        .map_err(|e| ApiError::local(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::local(format!("Failed to send request: {}", e)))?;
    check(response, method, &url).await?;
    log::info!("{:?} {} ok", method, url);
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    let response = request(HttpMethod::Delete, &url)
        .send()
        .await
        .map_err(|e| ApiError::local(format!("Failed to send request: {}", e)))?;
    check(response, HttpMethod::Delete, &url).await?;
    log::info!("DELETE {} ok", url);
    Ok(())
}

/// Browser confirm() для разрушающих действий
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Kart əlavə olunarkən xəta baş verdi.";

    #[test]
    fn test_status_message_is_shown_as_is() {
        let error = ApiError::from_response(r#"{"statusMessage":"Card number already exists"}"#, 409);
        assert_eq!(error.message_or(FALLBACK), "Card number already exists");
        assert_eq!(error.to_string(), "Card number already exists (HTTP 409)");
    }

    #[test]
    fn test_body_without_status_message_uses_screen_fallback() {
        for (body, status) in [
            ("", 500),
            ("<html>Bad gateway</html>", 502),
            (r#"{"statusMessage":""}"#, 400),
            (r#"{"error":"boom"}"#, 500),
        ] {
            let error = ApiError::from_response(body, status);
            assert_eq!(error.message, None);
            assert_eq!(error.message_or(FALLBACK), FALLBACK);
            assert_eq!(error.to_string(), format!("HTTP {}", status));
        }
    }

    #[test]
    fn test_local_failure_uses_screen_fallback() {
        let error = ApiError::local("Failed to send request: offline");
        assert_eq!(error.message_or(FALLBACK), FALLBACK);
    }
}
