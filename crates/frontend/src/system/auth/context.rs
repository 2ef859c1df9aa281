use contracts::system::auth::{Credentials, SessionUser};
use leptos::prelude::*;

use super::storage;

/// Текущая сессия администратора панели.
///
/// Создаётся в корне приложения; при создании читает сохранённую сессию,
/// выход из системы её удаляет.
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: RwSignal<Option<SessionUser>>,
}

impl SessionContext {
    pub fn init() -> Self {
        let restored = storage::load_session();
        if let Some(user) = &restored {
            log::info!("session restored for {}", user.username);
        }
        Self {
            user: RwSignal::new(restored),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn username(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.username.clone()))
    }

    pub fn login(&self, credentials: &Credentials) -> Result<(), String> {
        let user = credentials.verify()?;
        if let Err(e) = storage::save_session(&user) {
            // Сессия действует до перезагрузки страницы
            log::warn!("{}", e);
        }
        log::info!("login: {}", user.username);
        self.user.set(Some(user));
        Ok(())
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.user.set(None);
        log::info!("logout");
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::init());
    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
