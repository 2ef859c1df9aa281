pub mod card_animated;
pub mod page_header;
pub mod pagination_controls;
pub mod person_card;
pub mod photo_input;
pub mod state_panels;
pub mod ui;
