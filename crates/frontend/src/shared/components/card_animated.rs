//! CardAnimated: Thaw `Card` с анимацией появления для сеток карточек.
//!
//! Анимация `card-appear` задаётся в стилях приложения; карточки сетки
//! появляются каскадом с шагом [`STAGGER_STEP_MS`].

use leptos::prelude::*;
use thaw::Card;

/// Шаг каскадной задержки между соседними карточками
pub const STAGGER_STEP_MS: u32 = 60;

/// Потолок задержки, чтобы длинные списки не «доезжали» секундами
const MAX_DELAY_MS: u32 = 600;

/// Задержка появления карточки по её позиции в сетке
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS).min(MAX_DELAY_MS)
}

fn appear_style(delay_ms: u32, extra: &str) -> String {
    let base = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=format!("grid-card {}", class) attr:style=appear_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(2), 120);
        assert_eq!(stagger_delay(500), MAX_DELAY_MS);
    }

    #[test]
    fn test_appear_style() {
        assert_eq!(
            appear_style(60, ""),
            "animation: card-appear 0.28s ease-out 60ms both;"
        );
        assert!(appear_style(0, "opacity: 0.6;").ends_with("both; opacity: 0.6;"));
    }
}
