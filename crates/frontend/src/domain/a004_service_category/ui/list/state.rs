use contracts::domain::a004_service_category::aggregate::clamp_page;
use leptos::prelude::*;

/// Пагинация списка категорий (страницы с 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryPageState {
    pub page: u32,
    pub total_pages: u32,
}

impl Default for CategoryPageState {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

impl CategoryPageState {
    /// Применяет `totalPages` из ответа; текущая страница остаётся в допустимых пределах
    pub fn with_total(self, total_pages: Option<u32>) -> Self {
        let total_pages = total_pages.unwrap_or(1).max(1);
        Self {
            page: clamp_page(self.page, total_pages),
            total_pages,
        }
    }

    pub fn go_to(self, page: u32) -> Self {
        Self {
            page: clamp_page(page, self.total_pages),
            ..self
        }
    }
}

pub fn create_state() -> RwSignal<CategoryPageState> {
    RwSignal::new(CategoryPageState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_state_clamps() {
        let state = CategoryPageState::default().with_total(Some(3)).go_to(3);
        assert_eq!(state.page, 3);

        // Last page emptied after a delete
        let shrunk = state.with_total(Some(2));
        assert_eq!(shrunk, CategoryPageState { page: 2, total_pages: 2 });

        assert_eq!(shrunk.go_to(0).page, 1);
        assert_eq!(shrunk.go_to(9).page, 2);
        assert_eq!(CategoryPageState::default().with_total(None).total_pages, 1);
    }
}
