pub mod center;
pub mod tab_bar;

pub use center::Center;
