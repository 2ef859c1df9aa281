use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Идентификаторы выдаёт бэкенд, клиент их никогда не генерирует.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки (например, из значения `<select>`)
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Сырой идентификатор в JSON: строка или целое число
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// Десериализует идентификатор, принимая как строку, так и число
pub fn deserialize_raw_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Проверка строкового представления ID
pub fn parse_raw_id(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Empty identifier".into());
    }
    Ok(trimmed.to_string())
}

/// Объявляет newtype-идентификатор поверх строки бэкенда
#[macro_export]
macro_rules! define_string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::domain::common::aggregate_id::deserialize_raw_id(deserializer).map(Self)
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.clone()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                $crate::domain::common::aggregate_id::parse_raw_id(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::define_string_id!(SampleId);

    #[test]
    fn test_id_accepts_string_and_number() {
        let from_text: SampleId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(from_text.as_str(), "abc-1");

        let from_number: SampleId = serde_json::from_str("42").unwrap();
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = SampleId::new("S1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"S1\"");
    }

    #[test]
    fn test_from_string_rejects_blank() {
        assert!(SampleId::from_string("   ").is_err());
        assert_eq!(SampleId::from_string(" P1 ").unwrap(), SampleId::new("P1"));
    }
}
