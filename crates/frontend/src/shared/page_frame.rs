//! PageFrame: standard root wrapper for every page rendered inside a tab.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                 - `"{entity}--{category}"`, e.g. `"a005_service--list"`
//!   - `data-page-category` - one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// Card grid of records with create/edit modals
pub const PAGE_CAT_LIST: &str = "list";

/// Welcome and other non-entity pages
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Page id in format `{entity}--{category}`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

#[component]
pub fn PageFrame(
    /// HTML id, see [`page_id`]
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if category == PAGE_CAT_SYSTEM {
        "page page--system"
    } else {
        "page"
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_service::aggregate::Service;
    use contracts::domain::common::AggregateRoot;

    #[test]
    fn test_page_id_uses_entity_full_name() {
        assert_eq!(page_id(&Service::full_name(), PAGE_CAT_LIST), "a005_service--list");
    }
}
