use serde::{Deserialize, Serialize};

/// Ключ localStorage с сохранённой сессией
pub const SESSION_STORAGE_KEY: &str = "user";

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "1234";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Проверка учётной записи администратора панели.
    ///
    /// Успех возвращает пользователя сессии.
    pub fn verify(&self) -> Result<SessionUser, String> {
        if self.username == ADMIN_USERNAME && self.password == ADMIN_PASSWORD {
            Ok(SessionUser {
                username: self.username.clone(),
            })
        } else {
            Err("İstifadəçi adı və ya şifrə yanlışdır".to_string())
        }
    }
}

/// Пользователь текущей сессии (хранится как JSON `{"username": ...}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
}

impl SessionUser {
    /// Разбор сохранённой сессии; пустой или битый JSON означает отсутствие сессии
    pub fn from_storage(raw: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .filter(|user| !user.username.trim().is_empty())
    }

    pub fn to_storage(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_admin() {
        let user = Credentials::new("admin", "1234").verify().unwrap();
        assert_eq!(user.username, "admin");
        assert!(Credentials::new("admin", "12345").verify().is_err());
        assert!(Credentials::new("Admin", "1234").verify().is_err());
        assert!(Credentials::default().verify().is_err());
    }

    #[test]
    fn test_storage_format() {
        let user = SessionUser {
            username: "admin".into(),
        };
        assert_eq!(user.to_storage().unwrap(), r#"{"username":"admin"}"#);
        assert_eq!(SessionUser::from_storage(r#"{"username":"admin"}"#), Some(user));
        assert_eq!(SessionUser::from_storage("not json"), None);
        assert_eq!(SessionUser::from_storage(r#"{"username":""}"#), None);
    }
}
