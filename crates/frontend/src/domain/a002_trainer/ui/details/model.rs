use crate::shared::api_utils::{send_json, ApiError, HttpMethod};
use contracts::domain::a002_trainer::aggregate::{Trainer, TrainerDto, TrainerId};
use contracts::domain::common::AggregateRoot;

/// Create (POST) or update (PATCH) a trainer
pub async fn save_form(id: Option<TrainerId>, dto: &TrainerDto) -> Result<(), ApiError> {
    match id {
        Some(id) => send_json(HttpMethod::Patch, &Trainer::item_path(&id), dto).await,
        None => send_json(HttpMethod::Post, &Trainer::api_path(), dto).await,
    }
}
