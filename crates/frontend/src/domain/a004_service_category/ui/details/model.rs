use crate::shared::api_utils::{send_json, ApiError, HttpMethod};
use contracts::domain::a004_service_category::aggregate::{CategoryDto, CategoryId, ServiceCategory};
use contracts::domain::common::AggregateRoot;

/// Create (POST) or update (PATCH) a category
pub async fn save_form(id: Option<CategoryId>, dto: &CategoryDto) -> Result<(), ApiError> {
    match id {
        Some(id) => send_json(HttpMethod::Patch, &ServiceCategory::item_path(&id), dto).await,
        None => send_json(HttpMethod::Post, &ServiceCategory::api_path(), dto).await,
    }
}
