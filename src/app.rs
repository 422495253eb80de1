//! Main application for the Threat Dragon desktop shell
//!
//! Hosts the menu bar, dispatches menu commands to the file dialog
//! controller and the built-in roles, and persists settings on exit.

use crate::config::{save_config_silent, Language, Settings, WindowSize};
use crate::files::{DialogOutcome, FileDialogController, RfdBackend, RfdNotifier};
use crate::i18n::Translator;
use crate::links::open_external;
use crate::logging::SharedLogger;
use crate::menu::{
    menu_template, FileAction, MenuAction, MenuBuilder, MenuCommand, MenuEntry, MenuRole,
};
use crate::platform::Platform;
use crate::ui::{apply_role, show_menu_bar, AboutPanel, PendingInput};
use eframe::egui;
use log::{debug, info, warn};
use std::sync::Arc;

/// Load the translator for `language`, degrading to raw keys if the bundle
/// is broken.
fn load_translator(language: Language) -> Arc<Translator> {
    match Translator::new(language) {
        Ok(translator) => Arc::new(translator),
        Err(e) => {
            warn!("{}. Menu labels will show translation keys.", e);
            Arc::new(Translator::passthrough())
        }
    }
}

/// The desktop shell application.
pub struct ThreatDragonApp {
    settings: Settings,
    platform: Platform,
    translator: Arc<Translator>,
    menu: Vec<MenuEntry>,
    controller: FileDialogController,
    about_panel: AboutPanel,
    show_about: bool,
    settings_dirty: bool,
    /// Edit-role events for the next frame
    pending_input: PendingInput,
}

impl ThreatDragonApp {
    /// Create the application from loaded settings and the initialized logger.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        platform: Platform,
        logger: SharedLogger,
    ) -> Self {
        info!("Initializing Threat Dragon desktop shell");

        let translator = load_translator(settings.language);
        let menu = MenuBuilder::new(&translator).build(&menu_template(platform));
        let controller = FileDialogController::new(
            Arc::new(RfdBackend),
            Box::new(RfdNotifier),
            logger,
            Arc::clone(&translator),
        )
        .with_repaint(cc.egui_ctx.clone());

        Self {
            settings,
            platform,
            translator,
            menu,
            controller,
            about_panel: AboutPanel::new(),
            show_about: false,
            settings_dirty: false,
            pending_input: PendingInput::default(),
        }
    }

    /// Rebuild every translated surface for `language`.
    fn set_language(&mut self, language: Language) {
        info!("Switching language to {}", language.code());
        self.settings.language = language;
        self.translator = load_translator(language);
        self.menu = MenuBuilder::new(&self.translator).build(&menu_template(self.platform));
        self.controller.set_translator(Arc::clone(&self.translator));
        self.settings_dirty = true;
    }

    fn handle_menu_command(&mut self, ctx: &egui::Context, command: MenuCommand) {
        match command {
            MenuCommand::Action(MenuAction::File(action)) => {
                debug!("Menu: {:?}", action);
                match action {
                    FileAction::Open => self.controller.request_open(),
                    FileAction::Save => self.controller.request_save(),
                    FileAction::SaveAs => self.controller.request_save_as(),
                    FileAction::Close => self.controller.request_close(),
                }
            }
            MenuCommand::Action(MenuAction::OpenLink(link)) => open_external(link.url()),
            MenuCommand::OpenRecent(path) => {
                self.controller.report_opened(&path);
                self.settings.add_recent_file(path);
                self.settings_dirty = true;
            }
            MenuCommand::Role(role) => {
                if !apply_role(ctx, role, &mut self.pending_input) {
                    self.handle_app_role(role);
                }
            }
        }
    }

    fn handle_app_role(&mut self, role: MenuRole) {
        match role {
            MenuRole::About => self.show_about = true,
            MenuRole::ClearRecentDocuments => {
                debug!("Clearing recent documents");
                self.settings.clear_recent_files();
                self.settings_dirty = true;
            }
            other => debug!("Menu role {:?} has no action", other),
        }
    }

    /// Pick up finished dialogs and remember the files they touched.
    fn handle_dialog_outcomes(&mut self) {
        for outcome in self.controller.poll() {
            match outcome {
                DialogOutcome::Opened(path) | DialogOutcome::Saved(path) => {
                    self.settings.add_recent_file(path);
                    self.settings_dirty = true;
                }
                DialogOutcome::Canceled(_) | DialogOutcome::Failed(_) => {}
            }
        }
    }

    /// Record the current window geometry for the next launch.
    fn capture_window_state(&mut self, ctx: &egui::Context) {
        let (rect, maximized) =
            ctx.input(|i| (i.viewport().outer_rect, i.viewport().maximized.unwrap_or(false)));
        let Some(rect) = rect else {
            return;
        };

        let window_size = if maximized {
            WindowSize {
                maximized: true,
                ..self.settings.window_size
            }
        } else {
            WindowSize {
                width: rect.width(),
                height: rect.height(),
                x: Some(rect.min.x),
                y: Some(rect.min.y),
                maximized: false,
            }
        };

        if window_size != self.settings.window_size {
            self.settings.window_size = window_size;
            self.settings_dirty = true;
        }
    }

    fn render_dashboard(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.heading(
                egui::RichText::new(self.translator.tc("desktop.app.name"))
                    .size(28.0)
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!(
                    "{} → {}",
                    self.translator.tc("desktop.file.heading"),
                    self.translator.tc("desktop.file.open")
                ))
                .weak(),
            );
            if self.controller.pending_count() > 0 {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
    }
}

impl eframe::App for ThreatDragonApp {
    /// Feed events queued by edit roles into the frame about to start.
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        self.pending_input.drain_into(raw_input);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dialog_outcomes();
        self.capture_window_state(ctx);

        let mut picked = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            picked = show_menu_bar(ui, &self.menu, &self.settings.recent_files);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_dashboard(ui);
        });

        if self.show_about {
            let output = self.about_panel.show(ctx, &self.translator);
            if output.close_requested {
                self.show_about = false;
            }
            if let Some(language) = output.language_changed {
                self.set_language(language);
            }
        }

        if let Some(command) = picked {
            self.handle_menu_command(ctx, command);
        }
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        if self.settings_dirty {
            save_config_silent(&self.settings);
        }
    }
}
