//! Transient success/error banner shown above screen content.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "flash flash--success",
            FlashKind::Error => "flash flash--error",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "✅",
            FlashKind::Error => "⚠️",
        }
    }
}

/// Banner state for one screen.
///
/// Each message replaces the previous one and is dismissed after `timeout_ms`,
/// unless a newer message arrived in the meantime.
#[derive(Clone, Copy)]
pub struct Flash {
    current: RwSignal<Option<FlashMessage>>,
    generation: RwSignal<u64>,
    timeout_ms: u32,
}

impl Flash {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
            timeout_ms,
        }
    }

    /// Banner with the configured timeout
    pub fn from_config() -> Self {
        let config = use_context::<crate::shared::config::AppConfig>()
            .expect("AppConfig context not found");
        Self::new(config.flash_timeout_ms)
    }

    pub fn current(&self) -> Option<FlashMessage> {
        self.current.get()
    }

    pub fn show(&self, message: FlashMessage) {
        // Requests may finish after their screen was closed
        let Some(generation) = self.generation.try_get_untracked().map(|g| g + 1) else {
            return;
        };
        let _ = self.generation.try_set(generation);
        let _ = self.current.try_set(Some(message));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.timeout_ms).await;
            if this.generation.try_get_untracked() == Some(generation) {
                let _ = this.current.try_set(None);
            }
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(FlashMessage::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(FlashMessage::error(text));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

#[component]
pub fn FlashBanner(flash: Flash) -> impl IntoView {
    move || {
        flash.current().map(|message| {
            view! {
                <div class=message.css_class() role="status">
                    <span class="flash__glyph">{message.glyph()}</span>
                    <span class="flash__text">{message.text.clone()}</span>
                    <button class="flash__close" title="Bağla" on:click=move |_| flash.dismiss()>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_message_kinds() {
        let ok = FlashMessage::success("Xidmət əlavə edildi");
        assert_eq!(ok.kind, FlashKind::Success);
        assert_eq!(ok.css_class(), "flash flash--success");

        let err = FlashMessage::error("HTTP 500");
        assert_eq!(err.kind, FlashKind::Error);
        assert_eq!(err.css_class(), "flash flash--error");
        assert_eq!(err.glyph(), "⚠️");
    }
}
