//! Application menu
//!
//! [`template`] describes the menu as data; [`builder`] resolves it into
//! translated [`MenuEntry`] values that the menu bar draws.

pub mod builder;
pub mod template;

pub use builder::{MenuBuilder, MenuCommand, MenuEntry};
pub use template::{menu_template, FileAction, MenuAction, MenuRole};
