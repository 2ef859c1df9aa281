//! Выдача карты владельцу: общая модальная форма для участников,
//! тренеров и сотрудников.

mod model;
mod view;
mod view_model;

pub use view::CardIssueForm;

use crate::shared::flash::Flash;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a006_card::issue_form::CardOwner;
use leptos::prelude::*;

/// Открывает форму выдачи карты.
///
/// `restrict_type` оставляет в списке типов только указанный тип карты.
/// Успех показывается в баннере экрана-владельца.
pub fn open_card_issue_modal(
    modal_stack: ModalStackService,
    owner: CardOwner,
    restrict_type: Option<&'static str>,
    flash: Flash,
) {
    let title = format!("Kart əlavə et: {}", owner.display_name);
    modal_stack.open_with_width(title, "640px", move |handle| {
        view! {
            <CardIssueForm
                owner=owner.clone()
                restrict_type=restrict_type
                modal=handle.clone()
                on_issued=Callback::new({
                    let handle = handle.clone();
                    move |message: String| {
                        handle.close();
                        flash.success(message);
                    }
                })
            />
        }
        .into_any()
    });
}
