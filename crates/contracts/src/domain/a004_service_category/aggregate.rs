use crate::domain::common::{AggregateRoot, PageQuery};
use serde::{Deserialize, Serialize};

/// Размер страницы на экране категорий
pub const CATEGORY_PAGE_SIZE: u32 = 6;

/// Размер выборки категорий для выпадающего списка в форме услуги
pub const CATEGORY_LOOKUP_PAGE_SIZE: u32 = 100;

// ============================================================================
// ID Type
// ============================================================================

crate::define_string_id!(
    /// Уникальный идентификатор категории услуг
    CategoryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория услуг
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl AggregateRoot for ServiceCategory {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn entity_key() -> &'static str {
        "service_category"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Kateqoriya"
    }

    fn list_name() -> &'static str {
        "Xidmət kateqoriyaları"
    }
}

/// Запрос страницы списка категорий
pub fn category_page(page: u32) -> PageQuery {
    PageQuery {
        page: page.max(1),
        page_size: CATEGORY_PAGE_SIZE,
    }
}

/// Запрос всех категорий для выбора в форме услуги
pub fn category_lookup() -> PageQuery {
    PageQuery {
        page: 1,
        page_size: CATEGORY_LOOKUP_PAGE_SIZE,
    }
}

/// Номер страницы в пределах `1..=total_pages`
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub description: String,
}

impl CategoryDto {
    pub fn from_category(category: &ServiceCategory) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Ad tələb olunur".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_queries() {
        assert_eq!(category_page(0), PageQuery { page: 1, page_size: 6 });
        assert_eq!(category_page(3).page, 3);
        assert_eq!(category_lookup(), PageQuery { page: 1, page_size: 100 });

        let encoded = serde_json::to_value(category_lookup()).unwrap();
        assert_eq!(encoded["pageSize"], 100);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn test_dto_from_category() {
        let category: ServiceCategory =
            serde_json::from_str(r#"{"id":7,"name":"Fitness"}"#).unwrap();
        assert_eq!(category.id.as_str(), "7");

        let dto = CategoryDto::from_category(&category);
        assert_eq!(dto.description, "");
        assert!(dto.validate().is_ok());
        assert!(CategoryDto::default().validate().is_err());
    }
}
