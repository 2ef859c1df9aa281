pub mod state;

use self::state::create_state;
use crate::domain::a004_service_category::ui::details::CategoryDetails;
use crate::shared::api_utils::{self, confirm, get_page, ApiError};
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::state_panels::{EmptyState, LoadingSpinner};
use crate::shared::components::ui::Button;
use crate::shared::flash::{Flash, FlashBanner};
use crate::shared::icons::icon;
use crate::shared::list_state::{ItemActionMessages, ListState};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};
use contracts::domain::a004_service_category::aggregate::{category_page, CategoryId, ServiceCategory};
use contracts::domain::common::{AggregateId, AggregateRoot, ListResponse};
use leptos::prelude::*;

const DELETE_MESSAGES: ItemActionMessages = ItemActionMessages {
    success: "Kateqoriya silindi",
    failure: "Kateqoriya silinmədi",
};

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let flash = Flash::from_config();
    let list = ListState::<ServiceCategory>::new();
    let paging = create_state();

    let fetch = move || {
        let page = paging.get_untracked().page;
        list.load(flash, async move {
            let response = fetch_categories(page).await?;
            let _ = paging.try_update(|p| *p = p.with_total(response.total_pages));
            Ok(response.data)
        });
    };

    // Reload whenever the page number changes (and on first render)
    let current_page = Memo::new(move |_| paging.with(|p| p.page));
    Effect::new(move |_| {
        current_page.track();
        fetch();
    });

    let open_details_modal = move |existing: Option<ServiceCategory>| {
        let title = if existing.is_some() {
            "Kateqoriyanı redaktə et"
        } else {
            "Yeni kateqoriya"
        };
        modal_stack.open(title, move |handle| {
            view! {
                <CategoryDetails
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

    let handle_delete = move |id: CategoryId| {
        if !confirm("Bu kateqoriyanı silmək istədiyinizə əminsiniz?") {
            return;
        }
        list.run_item_action(
            id.as_string(),
            flash,
            DELETE_MESSAGES,
            async move { delete_category(&id).await },
            fetch,
        );
    };

    view! {
        <PageFrame page_id=page_id(&ServiceCategory::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=ServiceCategory::list_name()>
                <Button on_click=Callback::new(move |_| open_details_modal(None))>
                    {icon("plus")}
                    "Yeni kateqoriya"
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
                        fallback=|| view! { <EmptyState title="Kateqoriya yoxdur" hint="Yeni kateqoriya əlavə edin." /> }
                    >
                        <div class="card-grid">
                            <For
                                each=move || list.items.get().into_iter().enumerate()
                                key=move |(_, item)| list.row_key(item.id.clone())
                                children=move |(index, category)| {
                                    let id = category.id.clone();
                                    let id_for_busy = id.as_string();
                                    let description = category
                                        .description
                                        .clone()
                                        .filter(|d| !d.trim().is_empty())
                                        .unwrap_or_else(|| "Təsvir yoxdur".to_string());
                                    let for_edit = category.clone();
                                    view! {
                                        <CardAnimated delay_ms=stagger_delay(index) class="category-card">
                                            <h3 class="category-card__name">{category.name.clone()}</h3>
                                            <p class="category-card__description">{description}</p>
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

                <PaginationControls
                    current_page=Signal::derive(move || paging.get().page)
                    total_pages=Signal::derive(move || paging.get().total_pages)
                    on_page_change=Callback::new(move |page: u32| paging.update(|p| *p = p.go_to(page)))
                />
            </div>
        </PageFrame>
    }
}

async fn fetch_categories(page: u32) -> Result<ListResponse<ServiceCategory>, ApiError> {
    get_page(&ServiceCategory::api_path(), category_page(page)).await
}

async fn delete_category(id: &CategoryId) -> Result<(), ApiError> {
    api_utils::delete(&ServiceCategory::item_path(id)).await
}
