use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::load());
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());

    view! {
        <SessionProvider>
            <AppShell />
            <ModalHost />
        </SessionProvider>
    }
}
