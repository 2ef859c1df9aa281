use crate::shared::api_utils::{get_json, get_list, send_json, ApiError, HttpMethod};
use contracts::domain::a005_service::aggregate::Service;
use contracts::domain::a006_card::aggregate::Card;
use contracts::domain::a006_card::issue_form::CardPayload;
use contracts::domain::common::AggregateRoot;

/// Каталог услуг со слотами и планами
pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    get_list(&Service::api_path()).await
}

/// Словарь типов карт (массив строк без конверта)
pub async fn fetch_card_types() -> Result<Vec<String>, ApiError> {
    get_json(&Card::types_path()).await
}

pub async fn issue_card(payload: &CardPayload) -> Result<(), ApiError> {
    send_json(HttpMethod::Post, &Card::api_path(), payload).await
}
