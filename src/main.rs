// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Threat Dragon desktop shell - Main Entry Point
//!
//! Native menus and model file dialogs for the Threat Dragon threat
//! modeling tool. Built with Rust and egui.

mod app;
mod config;
mod error;
mod files;
mod i18n;
mod links;
mod logging;
mod menu;
mod platform;
mod ui;

use app::ThreatDragonApp;
use config::load_config;
use log::info;
use platform::Platform;
use std::sync::Arc;

/// Application name constant.
const APP_NAME: &str = "Threat Dragon";

fn main() -> eframe::Result<()> {
    let settings = load_config();
    let platform = Platform::current();

    let logger: logging::SharedLogger = match logging::init_logging(&settings, platform) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("{}", e);
            Arc::new(logging::GlobalLogger)
        }
    };

    info!("Starting {} {}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let window_size = settings.window_size;
    info!(
        "Window configuration: {}x{}, maximized: {}",
        window_size.width, window_size.height, window_size.maximized
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([400.0, 300.0]);

    let viewport = if let (Some(x), Some(y)) = (window_size.x, window_size.y) {
        viewport.with_position([x, y])
    } else {
        viewport
    };

    let viewport = if window_size.maximized {
        viewport.with_maximized(true)
    } else {
        viewport
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(ThreatDragonApp::new(
                cc, settings, platform, logger,
            )))
        }),
    )
}
