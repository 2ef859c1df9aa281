use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

/// Left zone: navigation menu and the signed-in administrator.
///
/// Collapsed by the header menu button (`AppGlobalContext::left_open`).
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            <nav class="left__menu">{children()}</nav>
            <div class="left__footer">
                {icon("user")}
                <span class="left__username">{move || session.username().unwrap_or_default()}</span>
            </div>
        </aside>
    }
}
