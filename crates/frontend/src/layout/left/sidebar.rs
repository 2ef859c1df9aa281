//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use contracts::domain::a001_gym_user::aggregate::GymUser;
use contracts::domain::a002_trainer::aggregate::Trainer;
use contracts::domain::a003_staff::aggregate::Staff;
use contracts::domain::a004_service_category::aggregate::ServiceCategory;
use contracts::domain::a005_service::aggregate::Service;
use contracts::domain::a006_card::aggregate::Card;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(String, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "people",
            label: "İnsanlar",
            icon: "members",
            items: vec![
                (GymUser::full_name(), "members"),
                (Trainer::full_name(), "trainers"),
                (Staff::full_name(), "staff"),
            ],
        },
        MenuGroup {
            id: "offer",
            label: "Xidmətlər və kartlar",
            icon: "services",
            items: vec![
                (ServiceCategory::full_name(), "categories"),
                (Service::full_name(), "services"),
                (Card::full_name(), "cards"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(
        groups
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<String>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_exp = group_id.clone();
                let gid_show = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|(key, icon_name)| {
                                    let item_key = StoredValue::new(key);
                                    let label = tab_label_for_key(&item_key.get_value());
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                item_key.with_value(|k| ctx.active.get().as_deref() == Some(k.as_str()))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(&item_key.get_value(), label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
