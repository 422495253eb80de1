//! Built-in menu roles
//!
//! Maps edit, view and window roles onto egui: viewport commands, zoom and
//! synthetic input events delivered to the focused widget.
//!
//! Menu clicks are handled after the frame's widgets have run, so input
//! events are held in [`PendingInput`] and fed into the next frame's raw
//! input.

use crate::menu::MenuRole;
use eframe::egui::{self, Event, Key, Modifiers, ViewportCommand};
use log::{debug, warn};

/// What a role does to the egui context.
#[derive(Debug, Clone, PartialEq)]
enum RoleEffect {
    Viewport(ViewportCommand),
    Input(Event),
    Paste,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

fn shortcut(key: Key, modifiers: Modifiers) -> RoleEffect {
    RoleEffect::Input(Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    })
}

/// Effect of `role` given the current window state, `None` when the role
/// needs application state (about panel, recent files) or is a whole menu.
fn role_effect(role: MenuRole, fullscreen: bool, maximized: bool) -> Option<RoleEffect> {
    let effect = match role {
        MenuRole::Quit | MenuRole::CloseWindow => RoleEffect::Viewport(ViewportCommand::Close),
        MenuRole::Hide | MenuRole::Minimize => {
            RoleEffect::Viewport(ViewportCommand::Minimized(true))
        }
        MenuRole::Zoom => RoleEffect::Viewport(ViewportCommand::Maximized(!maximized)),
        MenuRole::ToggleFullscreen => {
            RoleEffect::Viewport(ViewportCommand::Fullscreen(!fullscreen))
        }
        MenuRole::Undo => shortcut(Key::Z, Modifiers::COMMAND),
        MenuRole::Redo => shortcut(Key::Y, Modifiers::COMMAND),
        MenuRole::SelectAll => shortcut(Key::A, Modifiers::COMMAND),
        MenuRole::Cut => RoleEffect::Input(Event::Cut),
        MenuRole::Copy => RoleEffect::Input(Event::Copy),
        MenuRole::Paste => RoleEffect::Paste,
        MenuRole::ZoomIn => RoleEffect::ZoomIn,
        MenuRole::ZoomOut => RoleEffect::ZoomOut,
        MenuRole::ResetZoom => RoleEffect::ResetZoom,
        MenuRole::AppMenu
        | MenuRole::EditMenu
        | MenuRole::ViewMenu
        | MenuRole::WindowMenu
        | MenuRole::RecentDocuments
        | MenuRole::ClearRecentDocuments
        | MenuRole::About => return None,
    };
    Some(effect)
}

/// Input events waiting for the next frame.
#[derive(Debug, Default)]
pub struct PendingInput {
    events: Vec<Event>,
}

impl PendingInput {
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Move every held event into `raw_input`, before the frame starts.
    pub fn drain_into(&mut self, raw_input: &mut egui::RawInput) {
        raw_input.events.append(&mut self.events);
    }
}

/// Carry out `role` on the egui context. Input events land in `pending`
/// and reach widgets on the next frame.
///
/// Returns `false` if the role must be handled by the application.
pub fn apply_role(ctx: &egui::Context, role: MenuRole, pending: &mut PendingInput) -> bool {
    let (fullscreen, maximized) = ctx.input(|i| {
        (
            i.viewport().fullscreen.unwrap_or(false),
            i.viewport().maximized.unwrap_or(false),
        )
    });

    let Some(effect) = role_effect(role, fullscreen, maximized) else {
        return false;
    };
    debug!("Menu role {:?}", role);

    match effect {
        RoleEffect::Viewport(cmd) => ctx.send_viewport_cmd(cmd),
        RoleEffect::Input(event) => {
            pending.push(event);
            ctx.request_repaint();
        }
        RoleEffect::Paste => match arboard::Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) => {
                pending.push(Event::Paste(text));
                ctx.request_repaint();
            }
            Err(e) => warn!("Clipboard unavailable: {}", e),
        },
        RoleEffect::ZoomIn => egui::gui_zoom::zoom_in(ctx),
        RoleEffect::ZoomOut => egui::gui_zoom::zoom_out(ctx),
        RoleEffect::ResetZoom => ctx.set_zoom_factor(1.0),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_roles_toggle_current_state() {
        assert_eq!(
            role_effect(MenuRole::ToggleFullscreen, true, false),
            Some(RoleEffect::Viewport(ViewportCommand::Fullscreen(false)))
        );
        assert_eq!(
            role_effect(MenuRole::Zoom, false, false),
            Some(RoleEffect::Viewport(ViewportCommand::Maximized(true)))
        );
        assert_eq!(
            role_effect(MenuRole::CloseWindow, false, false),
            Some(RoleEffect::Viewport(ViewportCommand::Close))
        );
    }

    #[test]
    fn test_edit_roles_become_input() {
        assert_eq!(
            role_effect(MenuRole::Copy, false, false),
            Some(RoleEffect::Input(Event::Copy))
        );
        assert!(matches!(
            role_effect(MenuRole::Undo, false, false),
            Some(RoleEffect::Input(Event::Key { key: Key::Z, .. }))
        ));
        assert_eq!(role_effect(MenuRole::Paste, false, false), Some(RoleEffect::Paste));
    }

    #[test]
    fn test_app_roles_are_left_to_the_app() {
        for role in [
            MenuRole::About,
            MenuRole::ClearRecentDocuments,
            MenuRole::RecentDocuments,
            MenuRole::EditMenu,
        ] {
            assert_eq!(role_effect(role, false, false), None);
        }
    }

    #[test]
    fn test_apply_role_reports_unhandled() {
        let ctx = egui::Context::default();
        let mut pending = PendingInput::default();
        assert!(!apply_role(&ctx, MenuRole::About, &mut pending));
        assert!(apply_role(&ctx, MenuRole::ResetZoom, &mut pending));
        assert!(pending.is_empty());
    }

    fn count_copies(ctx: &egui::Context) -> usize {
        ctx.input(|i| i.events.iter().filter(|e| **e == Event::Copy).count())
    }

    #[test]
    fn test_edit_role_reaches_next_frame() {
        let ctx = egui::Context::default();
        let mut pending = PendingInput::default();

        let mut seen_in_first = usize::MAX;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            assert!(apply_role(ctx, MenuRole::Copy, &mut pending));
            seen_in_first = count_copies(ctx);
        });
        assert_eq!(seen_in_first, 0);
        assert!(!pending.is_empty());

        let mut raw_input = egui::RawInput::default();
        pending.drain_into(&mut raw_input);
        assert!(pending.is_empty());

        let mut seen_in_second = 0;
        let _ = ctx.run(raw_input, |ctx| {
            seen_in_second = count_copies(ctx);
        });
        assert_eq!(seen_in_second, 1);

        let mut seen_in_third = usize::MAX;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            seen_in_third = count_copies(ctx);
        });
        assert_eq!(seen_in_third, 0);
    }
}
