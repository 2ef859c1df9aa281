use leptos::prelude::*;

/// Button with variants (primary, secondary, danger, ghost) and sizes (sm, md)
#[component]
pub fn Button(
    /// "primary" (default), "secondary", "danger" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Request in flight: disables the button and shows a spinner
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "danger" => "button--danger",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };
    let is_busy = move || busy.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            title=move || title.get()
            class=move || format!("button {} {}", variant_class(), size_class())
            disabled=move || disabled.get().unwrap_or(false) || is_busy()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            <Show when=is_busy>
                <span class="button__spinner" aria-hidden="true"></span>
            </Show>
            {children()}
        </button>
    }
}
