//! About panel
//!
//! A modal window with the product name and version, the help links and a
//! language picker.

use crate::config::Language;
use crate::i18n::Translator;
use crate::links::{open_external, HelpLink};
use eframe::egui::{self, Color32, RichText};

/// Result of showing the about panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutPanelOutput {
    /// Whether the panel should be closed.
    pub close_requested: bool,
    /// Language picked in the panel, if it changed.
    pub language_changed: Option<Language>,
}

/// About panel rendering.
#[derive(Debug, Clone, Default)]
pub struct AboutPanel;

impl AboutPanel {
    pub fn new() -> Self {
        Self
    }

    /// Show the about panel as a modal window.
    pub fn show(&mut self, ctx: &egui::Context, translator: &Translator) -> AboutPanelOutput {
        let mut output = AboutPanelOutput::default();
        let is_dark = ctx.style().visuals.dark_mode;

        // Semi-transparent overlay
        let screen_rect = ctx.screen_rect();
        let overlay_color = if is_dark {
            Color32::from_rgba_unmultiplied(0, 0, 0, 180)
        } else {
            Color32::from_rgba_unmultiplied(0, 0, 0, 120)
        };

        egui::Area::new(egui::Id::new("about_overlay"))
            .order(egui::Order::Middle)
            .fixed_pos(screen_rect.min)
            .show(ctx, |ui| {
                let response = ui.allocate_response(screen_rect.size(), egui::Sense::click());
                ui.painter().rect_filled(screen_rect, 0.0, overlay_color);

                if response.clicked() {
                    output.close_requested = true;
                }
            });

        egui::Window::new(translator.tc("desktop.app.about"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(380.0)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    output.close_requested = true;
                }

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading(
                        RichText::new(translator.tc("desktop.app.name"))
                            .size(24.0)
                            .strong(),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            translator.tc("desktop.about.version"),
                            env!("CARGO_PKG_VERSION")
                        ))
                        .weak(),
                    );
                });

                ui.add_space(12.0);
                ui.separator();

                for link in HelpLink::all() {
                    if ui
                        .link(translator.tc(link.label_key()))
                        .on_hover_text(link.url())
                        .clicked()
                    {
                        open_external(link.url());
                    }
                }

                ui.add_space(12.0);
                ui.separator();

                let current = translator.language();
                let mut selected = current;
                ui.horizontal(|ui| {
                    ui.label(translator.tc("desktop.about.language"));
                    egui::ComboBox::from_id_source("about_language")
                        .selected_text(selected.display_name())
                        .show_ui(ui, |ui| {
                            for language in Language::all() {
                                ui.selectable_value(
                                    &mut selected,
                                    *language,
                                    language.display_name(),
                                );
                            }
                        });
                });
                if selected != current {
                    output.language_changed = Some(selected);
                }

                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(translator.tc("desktop.about.close")).clicked() {
                        output.close_requested = true;
                    }
                });
            });

        output
    }
}
