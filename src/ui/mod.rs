//! FLTK presentation layer. Widgets only send `Message`s; all state lives in `app`.

pub mod composer_form;
pub mod content;
pub mod main_window;
pub mod menu;
pub mod sidebar;
pub mod theme;
