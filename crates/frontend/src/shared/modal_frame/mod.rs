use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay with a titled modal surface.
///
/// Forms render their own action buttons; the frame only provides the header
/// with the title and the close button.
#[component]
pub fn ModalFrame(
    /// Header title
    title: String,
    /// CSS width of the surface
    width: String,
    /// Called on overlay click or header close button
    on_close: Callback<()>,
    #[prop(optional)] z_index: Option<i32>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only when both press and release happened on the overlay itself,
    // so selecting text in a field and releasing outside keeps the form open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class="modal"
                style=format!("position: relative; width: {width}; max-width: 95vw;")
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button
                        class="modal__close"
                        title="Bağla"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
