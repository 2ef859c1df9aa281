use crate::shared::api_utils::{self, confirm, get_list, send_json, ApiError, HttpMethod};
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::state_panels::{EmptyState, LoadingSpinner};
use crate::shared::components::ui::Button;
use crate::shared::date_utils::{format_date, now_utc};
use crate::shared::flash::{Flash, FlashBanner};
use crate::shared::icons::icon;
use crate::shared::list_state::{ItemActionMessages, ListState};
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};
use contracts::domain::a006_card::aggregate::{Card, CardId, CardStatus, Urgency};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

const DELETE_MESSAGES: ItemActionMessages = ItemActionMessages {
    success: "Kart silindi",
    failure: "Kart silinə bilmədi",
};

const DEACTIVATE_MESSAGES: ItemActionMessages = ItemActionMessages {
    success: "Kart deaktiv edildi",
    failure: "Kart deaktiv edilə bilmədi",
};

fn status_class(status: CardStatus) -> &'static str {
    match status {
        CardStatus::Active => "badge badge--success",
        CardStatus::Expired => "badge badge--danger",
        CardStatus::Inactive => "badge badge--muted",
    }
}

fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Comfortable => "progress__bar progress__bar--ok",
        Urgency::Warning => "progress__bar progress__bar--warning",
        Urgency::Critical => "progress__bar progress__bar--critical",
    }
}

fn days_left_label(days: i64) -> String {
    if days > 0 {
        format!("{} gün qalıb", days)
    } else {
        "Müddət bitib".to_string()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CardList() -> impl IntoView {
    let flash = Flash::from_config();
    let list = ListState::<Card>::new();

    let fetch = move || list.load(flash, fetch_cards());
    fetch();

    let handle_delete = move |id: CardId| {
        if !confirm("Bu kartı silmək istədiyinizə əminsiniz?") {
            return;
        }
        list.run_item_action(
            format!("delete-{}", id.as_string()),
            flash,
            DELETE_MESSAGES,
            async move { delete_card(&id).await },
            fetch,
        );
    };

    let handle_deactivate = move |id: CardId| {
        if !confirm("Bu kartı deaktiv etmək istədiyinizə əminsiniz?") {
            return;
        }
        list.run_item_action(
            format!("deactivate-{}", id.as_string()),
            flash,
            DEACTIVATE_MESSAGES,
            async move { deactivate_card(&id).await },
            fetch,
        );
    };

    view! {
        <PageFrame page_id=page_id(&Card::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=Card::list_name() count=Signal::derive(move || list.len())>
                <Button variant="secondary" on_click=Callback::new(move |_| fetch())>
                    "Yenilə"
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
                        fallback=|| view! { <EmptyState title="Kart yoxdur" hint="Kartlar istifadəçi, məşqçi və işçi səhifələrindən əlavə edilir." /> }
                    >
                        <div class="card-grid">
                            <For
                                each=move || list.items.get().into_iter().enumerate()
                                key=move |(_, item)| list.row_key(item.id.clone())
                                children=move |(index, card)| {
                                    let now = now_utc();
                                    let status = card.status(now);
                                    let delete_key = format!("delete-{}", card.id.as_string());
                                    let deactivate_key = format!("deactivate-{}", card.id.as_string());
                                    let id_for_delete = card.id.clone();
                                    let id_for_deactivate = card.id.clone();
                                    let can_deactivate = card.can_deactivate(now);
                                    let progress = card.days_left(now).zip(card.progress_percent(now)).zip(card.urgency(now));
                                    let limit = card
                                        .entry_limit
                                        .map(|n| n.to_string())
                                        .unwrap_or_else(|| "Limitsiz".to_string());

                                    view! {
                                        <CardAnimated delay_ms=stagger_delay(index) class="membership-card">
                                            <div class="membership-card__head">
                                                <span class="membership-card__glyph">{card.glyph()}</span>
                                                <span class="membership-card__number">{card.display_name()}</span>
                                                <span class=status_class(status)>{status.label()}</span>
                                            </div>
                                            <dl class="membership-card__details">
                                                <dt>"Növ"</dt>
                                                <dd>{card.card_type.clone()}</dd>
                                                <dt>"Başlama"</dt>
                                                <dd>{format_date(&card.start_date)}</dd>
                                                <dt>"Bitmə"</dt>
                                                <dd>{format_date(&card.end_date)}</dd>
                                                <dt>"Giriş limiti"</dt>
                                                <dd>{limit}</dd>
                                            </dl>
                                            {progress.map(|((days, percent), urgency)| view! {
                                                <div class="progress">
                                                    <div class="progress__label">{days_left_label(days)}</div>
                                                    <div class="progress__track">
                                                        <div class=urgency_class(urgency) style=format!("width: {:.0}%;", percent)></div>
                                                    </div>
                                                </div>
                                            })}
                                            <div class="card-actions">
                                                <Show when=move || can_deactivate>
                                                    <Button
                                                        variant="secondary"
                                                        size="sm"
                                                        busy=Signal::derive({
                                                            let key = deactivate_key.clone();
                                                            move || list.is_busy(&key)
                                                        })
                                                        on_click=Callback::new({
                                                            let id = id_for_deactivate.clone();
                                                            move |_| handle_deactivate(id.clone())
                                                        })
                                                    >
                                                        "Deaktiv et"
                                                    </Button>
                                                </Show>
                                                <Button
                                                    variant="danger"
                                                    size="sm"
                                                    busy=Signal::derive(move || list.is_busy(&delete_key))
                                                    on_click=Callback::new(move |_| handle_delete(id_for_delete.clone()))
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

async fn fetch_cards() -> Result<Vec<Card>, ApiError> {
    get_list(&Card::api_path()).await
}

async fn delete_card(id: &CardId) -> Result<(), ApiError> {
    api_utils::delete(&Card::item_path(id)).await
}

async fn deactivate_card(id: &CardId) -> Result<(), ApiError> {
    send_json(HttpMethod::Patch, &Card::deactivate_path(id), &serde_json::json!({})).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_left_label() {
        assert_eq!(days_left_label(12), "12 gün qalıb");
        assert_eq!(days_left_label(0), "Müddət bitib");
        assert_eq!(days_left_label(-3), "Müddət bitib");
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(status_class(CardStatus::Expired), "badge badge--danger");
        assert_eq!(urgency_class(Urgency::Critical), "progress__bar progress__bar--critical");
    }
}
