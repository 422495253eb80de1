//! Menu bar rendering
//!
//! Draws resolved [`MenuEntry`] trees with egui's menu widgets and reports
//! the command of the clicked item.

use crate::menu::{MenuCommand, MenuEntry, MenuRole};
use eframe::egui::{self, Ui};
use std::path::PathBuf;

/// Draw the menu bar and return the command picked this frame.
pub fn show_menu_bar(
    ui: &mut Ui,
    entries: &[MenuEntry],
    recent_files: &[PathBuf],
) -> Option<MenuCommand> {
    let mut picked = None;
    egui::menu::bar(ui, |ui| {
        for entry in entries {
            show_entry(ui, entry, recent_files, &mut picked);
        }
    });
    picked
}

fn show_entry(
    ui: &mut Ui,
    entry: &MenuEntry,
    recent_files: &[PathBuf],
    picked: &mut Option<MenuCommand>,
) {
    match entry {
        MenuEntry::Separator => {
            ui.separator();
        }
        MenuEntry::Command { label, command } => {
            if ui.button(label.as_str()).clicked() {
                *picked = Some(command.clone());
                ui.close_menu();
            }
        }
        MenuEntry::Submenu { label, entries } => {
            ui.menu_button(label.as_str(), |ui| {
                for entry in entries {
                    show_entry(ui, entry, recent_files, picked);
                }
            });
        }
        MenuEntry::RecentDocuments {
            label,
            clear_label,
            empty_label,
        } => {
            ui.menu_button(label.as_str(), |ui| {
                if recent_files.is_empty() {
                    ui.add_enabled(false, egui::Button::new(empty_label.as_str()));
                }
                for path in recent_files {
                    if ui.button(path.display().to_string()).clicked() {
                        *picked = Some(MenuCommand::OpenRecent(path.clone()));
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui
                    .add_enabled(
                        !recent_files.is_empty(),
                        egui::Button::new(clear_label.as_str()),
                    )
                    .clicked()
                {
                    *picked = Some(MenuCommand::Role(MenuRole::ClearRecentDocuments));
                    ui.close_menu();
                }
            });
        }
    }
}
