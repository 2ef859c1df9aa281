use crate::shared::api_utils::{multipart_form, send_multipart, ApiError, HttpMethod};
use contracts::domain::a003_staff::aggregate::{Staff, StaffDto, StaffId};
use contracts::domain::common::AggregateRoot;
use web_sys::File;

const PHOTO_FIELD: &str = "profilePhoto";

pub async fn save_form(id: Option<StaffId>, dto: &StaffDto, photo: Option<File>) -> Result<(), ApiError> {
    let form = multipart_form(dto, PHOTO_FIELD, photo.as_ref())?;
    match id {
        Some(id) => send_multipart(HttpMethod::Put, &Staff::item_path(&id), form).await,
        None => send_multipart(HttpMethod::Post, &Staff::api_path(), form).await,
    }
}
