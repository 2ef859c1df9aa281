use crate::domain::common::person::non_empty_fields;
use crate::domain::common::{AggregateRoot, MultipartFields, PersonProfile};
use crate::shared::date::date_part;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::define_string_id!(
    /// Уникальный идентификатор участника зала
    GymUserId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Участник (клиент) зала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymUser {
    pub id: GymUserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    /// ISO-строка, может прийти с временем
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

impl PersonProfile for GymUser {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn phone_number(&self) -> &str {
        &self.phone_number
    }

    fn father_name(&self) -> Option<&str> {
        self.father_name.as_deref()
    }

    fn date_of_birth(&self) -> Option<&str> {
        self.date_of_birth.as_deref()
    }

    fn profile_photo(&self) -> Option<&str> {
        self.profile_photo_url.as_deref()
    }
}

impl AggregateRoot for GymUser {
    type Id = GymUserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> String {
        self.person_name()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn entity_key() -> &'static str {
        "gym_user"
    }

    fn collection_name() -> &'static str {
        "gymusers"
    }

    fn element_name() -> &'static str {
        "İstifadəçi"
    }

    fn list_name() -> &'static str {
        "Gym istifadəçiləri"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Текстовые поля формы участника (фото передаётся отдельно как файл)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GymUserDto {
    pub first_name: String,
    pub last_name: String,
    pub father_name: String,
    pub phone_number: String,
    /// `YYYY-MM-DD` из `<input type="date">`
    pub date_of_birth: String,
}

impl GymUserDto {
    pub fn from_user(user: &GymUser) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            father_name: user.father_name.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone(),
            date_of_birth: user
                .date_of_birth
                .as_deref()
                .map(date_part)
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("Ad və soyad tələb olunur".into());
        }
        if self.phone_number.trim().is_empty() {
            return Err("Telefon nömrəsi tələb olunur".into());
        }
        Ok(())
    }
}

impl MultipartFields for GymUserDto {
    fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        non_empty_fields(vec![
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("fatherName", self.father_name.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
            ("dateOfBirth", self.date_of_birth.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_and_dto() {
        let json = r#"{"id": 12, "firstName": "Aysel", "lastName": "Məmmədova",
            "fatherName": "Rauf", "phoneNumber": "+994501234567",
            "dateOfBirth": "1995-04-20T00:00:00.000Z",
            "profilePhotoUrl": "https://cdn.example/u12.jpg"}"#;
        let user: GymUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_str(), "12");
        assert_eq!(user.display_name(), "Aysel Məmmədova");
        assert_eq!(user.profile_photo(), Some("https://cdn.example/u12.jpg"));

        let dto = GymUserDto::from_user(&user);
        assert_eq!(dto.date_of_birth, "1995-04-20");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_multipart_skips_empty_fields() {
        let dto = GymUserDto {
            first_name: "Orxan".into(),
            last_name: "Həsənov".into(),
            phone_number: "+994551112233".into(),
            ..Default::default()
        };
        let names: Vec<&str> = dto.multipart_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["firstName", "lastName", "phoneNumber"]);
    }

    #[test]
    fn test_validate_presence() {
        assert!(GymUserDto::default().validate().is_err());
        let no_phone = GymUserDto {
            first_name: "Orxan".into(),
            last_name: "Həsənov".into(),
            ..Default::default()
        };
        assert!(no_phone.validate().is_err());
    }

    #[test]
    fn test_paths() {
        assert_eq!(GymUser::api_path(), "/api/gymusers");
        assert_eq!(GymUser::full_name(), "a001_gym_user");
    }
}
