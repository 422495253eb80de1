//! Turns the menu template into renderable entries.

use crate::i18n::Translator;
use crate::menu::template::{MenuAction, MenuItem, MenuRole};
use std::path::PathBuf;

/// What a menu click asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Action(MenuAction),
    Role(MenuRole),
    OpenRecent(PathBuf),
}

/// A resolved menu node with translated labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Separator,
    Command {
        label: String,
        command: MenuCommand,
    },
    Submenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
    /// Filled from the recent files list each time it is drawn
    RecentDocuments {
        label: String,
        clear_label: String,
        empty_label: String,
    },
}

/// Resolves labels and expands menu-level roles.
pub struct MenuBuilder<'a> {
    translator: &'a Translator,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(translator: &'a Translator) -> Self {
        Self { translator }
    }

    pub fn build(&self, items: &[MenuItem]) -> Vec<MenuEntry> {
        items.iter().map(|item| self.entry(item)).collect()
    }

    fn entry(&self, item: &MenuItem) -> MenuEntry {
        match item {
            MenuItem::Separator => MenuEntry::Separator,
            MenuItem::Action { label, action } => MenuEntry::Command {
                label: self.translator.tc(label),
                command: MenuCommand::Action(*action),
            },
            MenuItem::Submenu { label, items } => MenuEntry::Submenu {
                label: self.translator.tc(label),
                entries: self.build(items),
            },
            MenuItem::Role(role) => self.role(*role),
        }
    }

    fn role(&self, role: MenuRole) -> MenuEntry {
        let label = self.translator.tc(role.label_key());

        if role == MenuRole::RecentDocuments {
            return MenuEntry::RecentDocuments {
                label,
                clear_label: self
                    .translator
                    .tc(MenuRole::ClearRecentDocuments.label_key()),
                empty_label: self.translator.tc("desktop.file.noRecent"),
            };
        }

        match role.submenu() {
            Some(items) => MenuEntry::Submenu {
                label,
                entries: self.build(&items),
            },
            None => MenuEntry::Command {
                label,
                command: MenuCommand::Role(role),
            },
        }
    }
}
