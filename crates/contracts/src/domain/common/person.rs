//! Общая форма «персоны» (участник, тренер, сотрудник).
//!
//! Наследования нет: каждая сущность хранится через свой набор эндпоинтов,
//! общим является только набор полей и способ их показа.

/// Поля персоны, одинаковые для всех экранов с карточками людей
pub trait PersonProfile {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn phone_number(&self) -> &str;

    fn father_name(&self) -> Option<&str> {
        None
    }

    fn date_of_birth(&self) -> Option<&str> {
        None
    }

    fn profile_photo(&self) -> Option<&str> {
        None
    }

    /// "Имя Фамилия"
    fn person_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
            .trim()
            .to_string()
    }

    /// Инициалы для заглушки аватара
    fn initials(&self) -> String {
        self.first_name()
            .chars()
            .take(1)
            .chain(self.last_name().chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Текстовые поля формы для отправки как multipart/form-data
///
/// Пустые значения не передаются (бэкенд сохраняет прежние).
pub trait MultipartFields {
    fn multipart_fields(&self) -> Vec<(&'static str, String)>;
}

/// Отбрасывает пустые значения в списке полей
pub fn non_empty_fields(fields: Vec<(&'static str, &str)>) -> Vec<(&'static str, String)> {
    fields
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(name, value)| (name, value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl PersonProfile for Sample {
        fn first_name(&self) -> &str {
            "aysel"
        }
        fn last_name(&self) -> &str {
            "məmmədova"
        }
        fn phone_number(&self) -> &str {
            "+994501234567"
        }
    }

    #[test]
    fn test_person_name_and_initials() {
        assert_eq!(Sample.person_name(), "aysel məmmədova");
        assert_eq!(Sample.initials(), "AM");
    }

    #[test]
    fn test_non_empty_fields_skips_blank_values() {
        let fields = non_empty_fields(vec![("firstName", "Orxan"), ("fatherName", " ")]);
        assert_eq!(fields, vec![("firstName", "Orxan".to_string())]);
    }
}
