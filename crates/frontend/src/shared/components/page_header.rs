use leptos::prelude::*;

/// Header of a list screen: title, optional counter, actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Number of loaded records, shown next to the title
    #[prop(optional, into)]
    count: MaybeProp<usize>,
    /// Actions (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {move || count.get().map(|n| view! {
                    <span class="page__count">{n}</span>
                })}
            </div>
            <div class="page__header-actions">
                {children()}
            </div>
        </div>
    }
}
