//! The application menu as data
//!
//! The menu is a tree of [`MenuItem`]s. Role items stand for behaviour the
//! shell provides itself (edit, zoom, window management); action items name
//! the operation a click triggers.

use crate::links::HelpLink;
use crate::platform::Platform;

/// Built-in menu behaviour, named after what the item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRole {
    // Whole menus
    AppMenu,
    EditMenu,
    ViewMenu,
    WindowMenu,
    RecentDocuments,

    // Application
    About,
    Hide,
    Quit,

    // File
    ClearRecentDocuments,
    CloseWindow,

    // Edit
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,

    // View
    ResetZoom,
    ZoomIn,
    ZoomOut,
    ToggleFullscreen,

    // Window
    Minimize,
    Zoom,
}

impl MenuRole {
    /// Translation key of the item or menu label.
    pub fn label_key(&self) -> &'static str {
        match self {
            MenuRole::AppMenu => "desktop.app.name",
            MenuRole::EditMenu => "desktop.edit.heading",
            MenuRole::ViewMenu => "desktop.view.heading",
            MenuRole::WindowMenu => "desktop.window.heading",
            MenuRole::RecentDocuments => "desktop.file.recentDocs",
            MenuRole::About => "desktop.help.about",
            MenuRole::Hide => "desktop.app.hide",
            MenuRole::Quit => "desktop.app.quit",
            MenuRole::ClearRecentDocuments => "desktop.file.clearRecent",
            MenuRole::CloseWindow => "desktop.file.closeWindow",
            MenuRole::Undo => "desktop.edit.undo",
            MenuRole::Redo => "desktop.edit.redo",
            MenuRole::Cut => "desktop.edit.cut",
            MenuRole::Copy => "desktop.edit.copy",
            MenuRole::Paste => "desktop.edit.paste",
            MenuRole::SelectAll => "desktop.edit.selectAll",
            MenuRole::ResetZoom => "desktop.view.resetZoom",
            MenuRole::ZoomIn => "desktop.view.zoomIn",
            MenuRole::ZoomOut => "desktop.view.zoomOut",
            MenuRole::ToggleFullscreen => "desktop.view.toggleFullscreen",
            MenuRole::Minimize => "desktop.window.minimize",
            MenuRole::Zoom => "desktop.window.zoom",
        }
    }

    /// Items of a menu-level role, `None` for single items.
    pub fn submenu(&self) -> Option<Vec<MenuItem>> {
        use MenuItem::{Role, Separator};

        let items = match self {
            MenuRole::AppMenu => vec![
                Role(MenuRole::About),
                Separator,
                Role(MenuRole::Hide),
                Role(MenuRole::Quit),
            ],
            MenuRole::EditMenu => vec![
                Role(MenuRole::Undo),
                Role(MenuRole::Redo),
                Separator,
                Role(MenuRole::Cut),
                Role(MenuRole::Copy),
                Role(MenuRole::Paste),
                Role(MenuRole::SelectAll),
            ],
            MenuRole::ViewMenu => vec![
                Role(MenuRole::ResetZoom),
                Role(MenuRole::ZoomIn),
                Role(MenuRole::ZoomOut),
                Separator,
                Role(MenuRole::ToggleFullscreen),
            ],
            MenuRole::WindowMenu => vec![
                Role(MenuRole::Minimize),
                Role(MenuRole::Zoom),
                Role(MenuRole::CloseWindow),
            ],
            _ => return None,
        };
        Some(items)
    }
}

/// Model file operations offered by the File menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Open,
    Save,
    SaveAs,
    Close,
}

/// What a clicked action item asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    File(FileAction),
    OpenLink(HelpLink),
}

/// One node of the menu template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Separator,
    Role(MenuRole),
    Action {
        label: &'static str,
        action: MenuAction,
    },
    Submenu {
        label: &'static str,
        items: Vec<MenuItem>,
    },
}

impl MenuItem {
    fn file(label: &'static str, action: FileAction) -> Self {
        MenuItem::Action {
            label,
            action: MenuAction::File(action),
        }
    }

    fn link(link: HelpLink) -> Self {
        MenuItem::Action {
            label: link.label_key(),
            action: MenuAction::OpenLink(link),
        }
    }
}

/// The full menu bar for `platform`.
pub fn menu_template(platform: Platform) -> Vec<MenuItem> {
    let mut menus = Vec::new();

    if platform.has_app_menu() {
        menus.push(MenuItem::Role(MenuRole::AppMenu));
    }

    menus.push(MenuItem::Submenu {
        label: "desktop.file.heading",
        items: vec![
            MenuItem::file("desktop.file.open", FileAction::Open),
            MenuItem::Role(MenuRole::RecentDocuments),
            MenuItem::file("desktop.file.save", FileAction::Save),
            MenuItem::file("desktop.file.saveAs", FileAction::SaveAs),
            MenuItem::file("desktop.file.close", FileAction::Close),
            MenuItem::Separator,
            MenuItem::Role(MenuRole::CloseWindow),
        ],
    });

    menus.push(MenuItem::Role(MenuRole::EditMenu));
    menus.push(MenuItem::Role(MenuRole::ViewMenu));
    menus.push(MenuItem::Role(MenuRole::WindowMenu));

    menus.push(MenuItem::Submenu {
        label: "desktop.help.heading",
        items: vec![
            MenuItem::link(HelpLink::Docs),
            MenuItem::link(HelpLink::Visit),
            MenuItem::link(HelpLink::CheatSheets),
            MenuItem::Separator,
            MenuItem::link(HelpLink::GitHub),
            MenuItem::link(HelpLink::SubmitIssue),
            MenuItem::link(HelpLink::Releases),
            MenuItem::Separator,
            MenuItem::Role(MenuRole::About),
        ],
    });

    menus
}
