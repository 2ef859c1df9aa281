//! Application Shell - корневые компоненты приложения
//!
//! - `AppShell` - auth gate (показывает LoginPage или MainLayout)
//! - `MainLayout` - основной layout (Shell + Sidebar + Tabs)

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Main application layout с Sidebar и Tabs.
///
/// Инициализирует синхронизацию активного таба с URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
