use crate::domain::a005_service::ui::details::ServiceDetails;
use crate::shared::api_utils::{self, confirm, get_list, ApiError};
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::state_panels::{EmptyState, LoadingSpinner};
use crate::shared::components::ui::Button;
use crate::shared::flash::{Flash, FlashBanner};
use crate::shared::icons::icon;
use crate::shared::list_state::{ItemActionMessages, ListState};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};
use contracts::domain::a005_service::aggregate::{Availability, Service, ServiceId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

const DELETE_MESSAGES: ItemActionMessages = ItemActionMessages {
    success: "Xidmət silindi",
    failure: "Xidmət silinmədi",
};

/// Подпись слота на карточке: день, время и тренер
fn slot_label(slot: &Availability) -> String {
    match &slot.trainer {
        Some(trainer) => format!("{} · {}", slot.short_label(), trainer.display_name()),
        None => slot.short_label(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let flash = Flash::from_config();
    let list = ListState::<Service>::new();

    let fetch = move || list.load(flash, fetch_services());
    fetch();

    let open_details_modal = move |existing: Option<Service>| {
        let title = if existing.is_some() {
            "✏️ Xidməti Yenilə"
        } else {
            "✨ Yeni Xidmət"
        };
        modal_stack.open_with_width(title, "820px", move |handle| {
            view! {
                <ServiceDetails
                    existing=existing.clone()
                    modal=handle.clone()
                    on_saved=Callback::new({
                        let handle = handle.clone();
                        move |message: String| {
                            handle.close();
                            flash.success(message);
                            fetch();
                        }
                    })
                />
            }
            .into_any()
        });
    };

    let handle_delete = move |id: ServiceId| {
        if !confirm("Bu xidməti silmək istədiyinizə əminsiniz?") {
            return;
        }
        list.run_item_action(
            id.as_string(),
            flash,
            DELETE_MESSAGES,
            async move { delete_service(&id).await },
            fetch,
        );
    };

    view! {
        <PageFrame page_id=page_id(&Service::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=Service::list_name() count=Signal::derive(move || list.len())>
                <Button on_click=Callback::new(move |_| open_details_modal(None))>
                    {icon("plus")}
                    "Yeni xidmət"
                </Button>
            </PageHeader>

            <FlashBanner flash=flash />

            <div class="page__content">
                <Show
                    when=move || !(list.loading.get() && list.is_empty())
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <Show
                        when=move || !list.is_empty()
                        fallback=|| view! { <EmptyState title="Xidmət yoxdur" hint="Yeni xidmət əlavə edin." /> }
                    >
                        <div class="card-grid">
                            <For
                                each=move || list.items.get().into_iter().enumerate()
                                key=move |(_, item)| list.row_key(item.id.clone())
                                children=move |(index, service)| {
                                    let id = service.id.clone();
                                    let id_for_busy = id.as_string();
                                    let category = service
                                        .category_name()
                                        .unwrap_or("Kateqoriya yoxdur")
                                        .to_string();
                                    let slots: Vec<String> = service.availabilities.iter().map(slot_label).collect();
                                    let plans: Vec<String> = service
                                        .subscription_plans
                                        .iter()
                                        .map(|p| p.badge_label())
                                        .collect();
                                    let for_edit = service.clone();
                                    view! {
                                        <CardAnimated delay_ms=stagger_delay(index) class="service-card">
                                            <h3 class="service-card__name">{service.name.clone()}</h3>
                                            <div class="service-card__category">"📂 " {category}</div>

                                            <h4>"⏰ Vaxtlar"</h4>
                                            {if slots.is_empty() {
                                                view! { <p class="muted">"Mövcud deyil"</p> }.into_any()
                                            } else {
                                                view! {
                                                    <ul class="service-card__slots">
                                                        {slots.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                                                    </ul>
                                                }
                                                .into_any()
                                            }}

                                            <h4>"💎 Paketlər"</h4>
                                            {if plans.is_empty() {
                                                view! { <p class="muted">"Paket yoxdur"</p> }.into_any()
                                            } else {
                                                view! {
                                                    <div class="service-card__plans">
                                                        {plans.into_iter().map(|p| view! { <span class="badge">{p}</span> }).collect_view()}
                                                    </div>
                                                }
                                                .into_any()
                                            }}

                                            <div class="card-actions">
                                                <Button
                                                    variant="secondary"
                                                    size="sm"
                                                    on_click=Callback::new(move |_| open_details_modal(Some(for_edit.clone())))
                                                >
                                                    {icon("edit")}
                                                    "Redaktə"
                                                </Button>
                                                <Button
                                                    variant="danger"
                                                    size="sm"
                                                    busy=Signal::derive(move || list.is_busy(&id_for_busy))
                                                    on_click=Callback::new(move |_| handle_delete(id.clone()))
                                                >
                                                    {icon("trash")}
                                                    "Sil"
                                                </Button>
                                            </div>
                                        </CardAnimated>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}

async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    get_list(&Service::api_path()).await
}

async fn delete_service(id: &ServiceId) -> Result<(), ApiError> {
    api_utils::delete(&Service::item_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_label_with_and_without_trainer() {
        let slots: Vec<Availability> = serde_json::from_str(
            r#"[
                {"id": "A1", "day": 3, "startTime": "10:00", "endTime": "11:00",
                 "trainer": {"id": "T1", "firstName": "Murad", "lastName": "Quliyev"}},
                {"id": "A2", "day": 7, "startTime": "12:00", "endTime": "13:00"}
            ]"#,
        )
        .unwrap();
        assert_eq!(slot_label(&slots[0]), "Çərşənbə 10:00-11:00 · Murad Quliyev");
        assert_eq!(slot_label(&slots[1]), "Bazar 12:00-13:00");
    }
}
