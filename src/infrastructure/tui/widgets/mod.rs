pub mod countdown_view;
pub mod help_overlay;
pub mod layout;
