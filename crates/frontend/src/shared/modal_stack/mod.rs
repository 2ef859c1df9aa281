use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Ширина формы по умолчанию
const DEFAULT_MODAL_WIDTH: &str = "560px";

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    width: String,
    builder: ModalBuilder,
}

/// Handle of an open modal form.
///
/// Cloned into event handlers to close the form or lock it while a request
/// is outstanding.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    /// While busy, overlay click and Escape do not close the modal
    pub fn set_busy(&self, busy: bool) {
        let id = self.id;
        self.svc.busy.update(|ids| {
            ids.retain(|x| *x != id);
            if busy {
                ids.push(id);
            }
        });
    }

    pub fn is_busy(&self) -> bool {
        self.svc.busy.with(|ids| ids.contains(&self.id))
    }
}

/// Stack of modal forms (edit form, card issue form, ...).
///
/// Escape closes only the topmost modal (handled by `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    busy: RwSignal<Vec<u64>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            busy: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Open a titled modal. `builder` receives a handle so the form can close itself.
    pub fn open<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.open_with_width(title, DEFAULT_MODAL_WIDTH, builder)
    }

    pub fn open_with_width<F>(
        &self,
        title: impl Into<String>,
        width: &str,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                title: title.into(),
                width: width.to_string(),
                builder: Arc::new(builder),
            });
        });

        ModalHandle { id, svc: *self }
    }

    fn close(&self, id: u64) {
        self.busy.update(|ids| ids.retain(|x| *x != id));
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Closing is deferred to the next tick: the modal may be removed while its
    /// own DOM event is still dispatching.
    fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn close_top_if_idle(&self) {
        let top = self.stack.with_untracked(|s| s.last().map(|e| e.id));
        if let Some(id) = top {
            if !self.busy.with_untracked(|ids| ids.contains(&id)) {
                self.close_deferred(id);
            }
        }
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    svc.close_top_if_idle();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost lives as long as the app
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let handle = ModalHandle { id, svc };
                    let on_close = {
                        let handle = handle.clone();
                        Callback::new(move |_| {
                            if !handle.is_busy() {
                                handle.close();
                            }
                        })
                    };
                    let body = (entry.builder)(handle);

                    view! {
                        <ModalFrame
                            title=entry.title.clone()
                            width=entry.width.clone()
                            z_index=1000 + idx as i32
                            on_close=on_close
                        >
                            {body}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
