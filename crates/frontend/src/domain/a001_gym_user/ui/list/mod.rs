use crate::domain::a001_gym_user::ui::details::GymUserDetails;
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
use contracts::domain::a001_gym_user::aggregate::{GymUser, GymUserId};
use contracts::domain::a006_card::issue_form::CardOwner;
use contracts::domain::common::{AggregateId, AggregateRoot, PersonProfile};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn GymUserList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let flash = Flash::from_config();
    let list = ListState::<GymUser>::new();

    let fetch = move || list.load(flash, fetch_users());
    fetch();

    let open_details_modal = move |existing: Option<GymUser>| {
        let title = if existing.is_some() {
            "✏️ İstifadəçini Yenilə"
        } else {
            "✨ Yeni İstifadəçi"
        };
        modal_stack.open(title, move |handle| {
            view! {
                <GymUserDetails
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

    let handle_delete = move |id: GymUserId| {
        if !confirm(MSG_CONFIRM_DELETE) {
            return;
        }
        list.run_item_action(
            id.as_string(),
            flash,
            ItemActionMessages::DELETE,
            async move { delete_user(&id).await },
            fetch,
        );
    };

    view! {
        <PageFrame page_id=page_id(&GymUser::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=GymUser::list_name() count=Signal::derive(move || list.len())>
                <Button on_click=Callback::new(move |_| open_details_modal(None))>
                    {icon("plus")}
                    "Yeni istifadəçi"
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
                        fallback=|| view! { <EmptyState title="İstifadəçi tapılmadı" hint="Yeni istifadəçi əlavə edin." /> }
                    >
                        <div class="card-grid">
                            <For
                                each=move || list.items.get().into_iter().enumerate()
                                key=move |(_, item)| list.row_key(item.id.clone())
                                children=move |(index, user)| {
                                    let id = user.id.clone();
                                    let id_for_busy = id.as_string();
                                    let owner = CardOwner::new(id.as_string(), user.person_name());
                                    let for_edit = user.clone();
                                    view! {
                                        <PersonCard
                                            name=user.person_name()
                                            initials=user.initials()
                                            photo_url=user.profile_photo().map(str::to_string)
                                            details=person_details(&user)
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

async fn fetch_users() -> Result<Vec<GymUser>, ApiError> {
    get_list(&GymUser::api_path()).await
}

async fn delete_user(id: &GymUserId) -> Result<(), ApiError> {
    api_utils::delete(&GymUser::item_path(id)).await
}
