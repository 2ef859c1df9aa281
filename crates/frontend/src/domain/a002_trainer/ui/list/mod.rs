use crate::domain::a002_trainer::ui::details::TrainerDetails;
use crate::domain::a006_card::ui::issue::open_card_issue_modal;
use crate::shared::api_utils::{self, confirm, get_list, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::person_card::{person_details, PersonCard};
use crate::shared::components::state_panels::{EmptyState, LoadingSpinner};
use crate::shared::components::ui::Button;
use crate::shared::flash::{Flash, FlashBanner};
use crate::shared::icons::icon;
use crate::shared::list_state::{ItemActionMessages, ListState, MSG_CONFIRM_DELETE};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_trainer::aggregate::{Trainer, TrainerId};
use contracts::domain::a006_card::issue_form::CardOwner;
use contracts::domain::common::{AggregateId, AggregateRoot, PersonProfile};
use leptos::prelude::*;

/// Строки карточки тренера: контакты и рабочий график
fn trainer_details(trainer: &Trainer) -> Vec<(&'static str, String)> {
    let mut rows = person_details(trainer);
    rows.push(("Qrafik", trainer.schedule_summary()));
    rows
}

#[component]
#[allow(non_snake_case)]
pub fn TrainerList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let flash = Flash::from_config();
    let list = ListState::<Trainer>::new();

    let fetch = move || list.load(flash, fetch_trainers());
    fetch();

    let open_details_modal = move |existing: Option<Trainer>| {
        let title = if existing.is_some() {
            "✏️ Məşqçini Yenilə"
        } else {
            "✨ Yeni Məşqçi"
        };
        modal_stack.open(title, move |handle| {
            view! {
                <TrainerDetails
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

    let handle_delete = move |id: TrainerId| {
        if !confirm(MSG_CONFIRM_DELETE) {
            return;
        }
        list.run_item_action(
            id.as_string(),
            flash,
            ItemActionMessages::DELETE,
            async move { delete_trainer(&id).await },
            fetch,
        );
    };

    view! {
        <PageFrame page_id=page_id(&Trainer::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=Trainer::list_name() count=Signal::derive(move || list.len())>
                <Button on_click=Callback::new(move |_| open_details_modal(None))>
                    {icon("plus")}
                    "Yeni məşqçi"
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
                        fallback=|| view! { <EmptyState title="Məşqçi tapılmadı" hint="Yeni məşqçi əlavə edin." /> }
                    >
                        <div class="card-grid">
                            <For
                                each=move || list.items.get().into_iter().enumerate()
                                key=move |(_, item)| list.row_key(item.id.clone())
                                children=move |(index, trainer)| {
                                    let id = trainer.id.clone();
                                    let id_for_busy = id.as_string();
                                    let owner = CardOwner::new(id.as_string(), trainer.person_name());
                                    let for_edit = trainer.clone();
                                    view! {
                                        <PersonCard
                                            name=trainer.person_name()
                                            initials=trainer.initials()
                                            details=trainer_details(&trainer)
                                            index=index
                                        >
                                            <Button
                                                variant="ghost"
                                                size="sm"
                                                on_click=Callback::new(move |_| open_details_modal(Some(for_edit.clone())))
                                            >
                                                "✏️ Redaktə"
                                            </Button>
                                            <Button
                                                variant="ghost"
                                                size="sm"
                                                on_click=Callback::new(move |_| {
                                                    open_card_issue_modal(modal_stack, owner.clone(), None, flash)
                                                })
                                            >
                                                "➕ Kart əlavə et"
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
                                        </PersonCard>
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

async fn fetch_trainers() -> Result<Vec<Trainer>, ApiError> {
    get_list(&Trainer::api_path()).await
}

async fn delete_trainer(id: &TrainerId) -> Result<(), ApiError> {
    api_utils::delete(&Trainer::item_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_details_include_schedule() {
        let trainer: Trainer = serde_json::from_str(
            r#"{"id": "T1", "firstName": "Murad", "lastName": "Quliyev", "phoneNumber": "+994701234567",
                "availableDays": "1-5", "startTime": "09:00", "endTime": "18:00"}"#,
        )
        .unwrap();
        assert_eq!(
            trainer_details(&trainer),
            vec![
                ("Telefon", "+994701234567".to_string()),
                ("Qrafik", "1-5 · 09:00 - 18:00".to_string()),
            ]
        );
    }
}
