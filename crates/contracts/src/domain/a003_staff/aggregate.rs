use crate::domain::common::person::non_empty_fields;
use crate::domain::common::{AggregateRoot, MultipartFields, PersonProfile};
use crate::shared::date::date_part;
use serde::{Deserialize, Serialize};

/// Сотрудникам выдаются только карты этого типа (сравнение без учёта регистра)
pub const STAFF_CARD_TYPE: &str = "limitless";

// ============================================================================
// ID Type
// ============================================================================

crate::define_string_id!(
    /// Уникальный идентификатор сотрудника
    StaffId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сотрудник зала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: StaffId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

impl PersonProfile for Staff {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn phone_number(&self) -> &str {
        &self.phone_number
    }

    fn date_of_birth(&self) -> Option<&str> {
        self.date_of_birth.as_deref()
    }

    fn profile_photo(&self) -> Option<&str> {
        self.profile_photo_url.as_deref()
    }
}

impl AggregateRoot for Staff {
    type Id = StaffId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> String {
        self.person_name()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn entity_key() -> &'static str {
        "staff"
    }

    fn collection_name() -> &'static str {
        "gymstaffs"
    }

    fn element_name() -> &'static str {
        "İşçi"
    }

    fn list_name() -> &'static str {
        "İşçilər"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: String,
}

impl StaffDto {
    pub fn from_staff(staff: &Staff) -> Self {
        Self {
            first_name: staff.first_name.clone(),
            last_name: staff.last_name.clone(),
            phone_number: staff.phone_number.clone(),
            date_of_birth: staff
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

impl MultipartFields for StaffDto {
    fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        non_empty_fields(vec![
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
            ("dateOfBirth", self.date_of_birth.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_card::aggregate::card_type_choices;

    #[test]
    fn test_staff_from_api_without_birth_date() {
        let staff: Staff = serde_json::from_str(
            r#"{"id": "W1", "firstName": "Leyla", "lastName": "Kərimova", "phoneNumber": "+994"}"#,
        )
        .unwrap();
        assert_eq!(staff.date_of_birth(), None);

        let dto = StaffDto::from_staff(&staff);
        assert_eq!(dto.date_of_birth, "");
        assert!(dto.validate().is_ok());
        assert_eq!(dto.multipart_fields().len(), 3);
    }

    #[test]
    fn test_staff_card_types_are_restricted() {
        let vocab = vec!["MONTHLY".to_string(), "LIMITLESS".to_string()];
        assert_eq!(
            card_type_choices(&vocab, Some(STAFF_CARD_TYPE)),
            vec!["LIMITLESS".to_string()]
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(Staff::item_path(&StaffId::new("W1")), "/api/gymstaffs/W1");
    }
}
