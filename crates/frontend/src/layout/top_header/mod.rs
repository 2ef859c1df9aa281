//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title and the user menu
//! (username with a dropdown holding logout).

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let (menu_open, set_menu_open) = signal(false);

    let logout = move |_| {
        set_menu_open.set(false);
        ctx.close_all();
        session.logout();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Menyunu gizlət" } else { "Menyunu göstər" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Gym Panel"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user" on:click=move |_| set_menu_open.update(|v| *v = !*v)>
                    {icon("user")}
                    <span>{move || session.username().unwrap_or_default()}</span>
                    {icon("chevron-down")}
                </div>
                <Show when=move || menu_open.get()>
                    <div class="top-header__dropdown">
                        <button class="top-header__dropdown-item" on:click=logout>
                            {icon("logout")}
                            <span>"Çıxış"</span>
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
