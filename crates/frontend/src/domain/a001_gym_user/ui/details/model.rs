use crate::shared::api_utils::{multipart_form, send_multipart, ApiError, HttpMethod};
use contracts::domain::a001_gym_user::aggregate::{GymUser, GymUserDto, GymUserId};
use contracts::domain::common::AggregateRoot;
use web_sys::File;

const PHOTO_FIELD: &str = "profilePhoto";

/// Create (POST) or update (PUT) a gym user as multipart/form-data
pub async fn save_form(id: Option<GymUserId>, dto: &GymUserDto, photo: Option<File>) -> Result<(), ApiError> {
    let form = multipart_form(dto, PHOTO_FIELD, photo.as_ref())?;
    match id {
        Some(id) => send_multipart(HttpMethod::Put, &GymUser::item_path(&id), form).await,
        None => send_multipart(HttpMethod::Post, &GymUser::api_path(), form).await,
    }
}
