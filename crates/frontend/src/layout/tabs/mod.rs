//! Tab management module
//!
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг tab.key → View
//! - `tab_labels` - заголовки табов

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
