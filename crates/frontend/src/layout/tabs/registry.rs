//! Tab content registry - маппинг tab.key → View

use crate::domain::a001_gym_user::ui::list::GymUserList;
use crate::domain::a002_trainer::ui::list::TrainerList;
use crate::domain::a003_staff::ui::list::StaffList;
use crate::domain::a004_service_category::ui::list::CategoryList;
use crate::domain::a005_service::ui::list::ServiceList;
use crate::domain::a006_card::ui::list::CardList;
use contracts::domain::a001_gym_user::aggregate::GymUser;
use contracts::domain::a002_trainer::aggregate::Trainer;
use contracts::domain::a003_staff::aggregate::Staff;
use contracts::domain::a004_service_category::aggregate::ServiceCategory;
use contracts::domain::a005_service::aggregate::Service;
use contracts::domain::a006_card::aggregate::Card;
use contracts::domain::common::AggregateRoot;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу (`AggregateRoot::full_name()` экрана).
///
/// Для неизвестных ключей возвращает placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        k if k == GymUser::full_name() => view! { <GymUserList /> }.into_any(),
        k if k == Trainer::full_name() => view! { <TrainerList /> }.into_any(),
        k if k == Staff::full_name() => view! { <StaffList /> }.into_any(),
        k if k == ServiceCategory::full_name() => view! { <CategoryList /> }.into_any(),
        k if k == Service::full_name() => view! { <ServiceList /> }.into_any(),
        k if k == Card::full_name() => view! { <CardList /> }.into_any(),
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">"Bu bölmə mövcud deyil"</div> }.into_any()
        }
    }
}
