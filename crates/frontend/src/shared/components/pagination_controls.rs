use crate::shared::icons::icon;
use leptos::prelude::*;

/// Номера страниц для кнопок: все, если их немного, иначе окно вокруг текущей
pub fn visible_pages(current: u32, total: u32) -> Vec<u32> {
    const WINDOW: u32 = 2;
    if total == 0 {
        return Vec::new();
    }
    let from = current.saturating_sub(WINDOW).max(1);
    let to = (current + WINDOW).min(total);
    (from..=to).collect()
}

/// Pagination controls (pages are 1-indexed, as the API expects)
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    title="Əvvəlki səhifə"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    visible_pages(current, total_pages.get())
                        .into_iter()
                        .map(|page| view! {
                            <button
                                class=if page == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    title="Növbəti səhifə"
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| on_page_change.run((current_page.get() + 1).min(total_pages.get()))
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_pages() {
        assert_eq!(visible_pages(1, 3), vec![1, 2, 3]);
        assert_eq!(visible_pages(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(visible_pages(10, 10), vec![8, 9, 10]);
        assert!(visible_pages(1, 0).is_empty());
    }
}
