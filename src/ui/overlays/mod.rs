pub mod menu;
pub mod toast;
