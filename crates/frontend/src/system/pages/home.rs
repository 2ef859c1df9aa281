use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::context::use_session;
use contracts::domain::a001_gym_user::aggregate::GymUser;
use contracts::domain::a005_service::aggregate::Service;
use contracts::domain::a006_card::aggregate::Card;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Welcome panel shown while no tab is open
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let shortcuts = [
        (GymUser::full_name(), "members"),
        (Service::full_name(), "services"),
        (Card::full_name(), "cards"),
    ];

    view! {
        <PageFrame page_id="home--system" category=PAGE_CAT_SYSTEM>
            <div class="home">
                <h1 class="home__title">
                    {move || format!("Xoş gəlmisiniz, {}!", session.username().unwrap_or_default())}
                </h1>
                <p class="home__hint">"Soldakı menyudan bölmə seçin."</p>
                <div class="home__shortcuts">
                    {shortcuts
                        .into_iter()
                        .map(|(key, icon_name)| {
                            let label = tab_label_for_key(&key);
                            view! {
                                <button class="home__shortcut" on:click=move |_| ctx.open_tab(&key, label)>
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
