use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

/// Выбор фото профиля (необязательный файл для multipart-формы)
#[component]
pub fn PhotoInput(
    #[prop(into)] id: String,
    photo: RwSignal<Option<File>, LocalStorage>,
) -> impl IntoView {
    let file_name = move || photo.with(|f| f.as_ref().map(|f| f.name()));

    view! {
        <div class="form-group">
            <label for=id.clone()>"📷 Profil şəkli (istəyə bağlı)"</label>
            <input
                type="file"
                id=id
                accept="image/*"
                on:change=move |ev| {
                    let input: HtmlInputElement = event_target(&ev);
                    photo.set(input.files().and_then(|files| files.get(0)));
                }
            />
            {move || file_name().map(|name| view! { <div class="form-hint">{name}</div> })}
        </div>
    }
}
