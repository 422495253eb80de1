//! UI components for the desktop shell

mod about;
mod menu_bar;
mod roles;

pub use about::AboutPanel;
pub use menu_bar::show_menu_bar;
pub use roles::{apply_role, PendingInput};
