use super::tab_bar::TabBar;
use crate::layout::global_context::AppGlobalContext;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;

/// Content zone: tab bar with the open tab pages, welcome panel when none is open
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let has_tabs = move || tabs_store.opened.with(|tabs| !tabs.is_empty());

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <Show when=has_tabs>
                <TabBar />
            </Show>
            <Show when=move || !has_tabs()>
                <HomePage />
            </Show>
            {children()}
        </div>
    }
}
