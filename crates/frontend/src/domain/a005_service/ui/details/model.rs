use crate::shared::api_utils::{get_list, get_page, send_json, ApiError, HttpMethod};
use contracts::domain::a002_trainer::aggregate::Trainer;
use contracts::domain::a004_service_category::aggregate::{category_lookup, ServiceCategory};
use contracts::domain::a005_service::aggregate::{Service, ServiceId, ServicePayload};
use contracts::domain::common::AggregateRoot;

pub async fn fetch_trainers() -> Result<Vec<Trainer>, ApiError> {
    get_list(&Trainer::api_path()).await
}

/// Все категории одной страницей (для выпадающего списка)
pub async fn fetch_categories() -> Result<Vec<ServiceCategory>, ApiError> {
    get_page::<ServiceCategory>(&ServiceCategory::api_path(), category_lookup())
        .await
        .map(|r| r.data)
}

/// Create (POST) or update (PATCH) a service
pub async fn save_form(id: Option<ServiceId>, payload: &ServicePayload) -> Result<(), ApiError> {
    match id {
        Some(id) => send_json(HttpMethod::Patch, &Service::item_path(&id), payload).await,
        None => send_json(HttpMethod::Post, &Service::api_path(), payload).await,
    }
}
