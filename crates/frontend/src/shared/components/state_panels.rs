use leptos::prelude::*;

/// Спиннер на время загрузки списка
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="state-panel state-panel--loading">
            <span class="spinner" aria-hidden="true"></span>
            <span>{label.unwrap_or_else(|| "Yüklənir...".to_string())}</span>
        </div>
    }
}

/// Заглушка пустого списка
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="state-panel state-panel--empty">
            <div class="state-panel__title">{title}</div>
            {hint.map(|h| view! { <div class="state-panel__hint">{h}</div> })}
        </div>
    }
}
