//! Native file dialog integration using the rfd crate
//!
//! The shell never talks to rfd directly. A [`DialogRequest`] describes the
//! chooser to show and a [`DialogBackend`] turns it into a [`DialogResult`];
//! blocking notices go through a [`Notifier`]. Both seams have rfd-backed
//! production implementations here.

use crate::error::Result;
use log::debug;
use rfd::{AsyncFileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

/// A named extension filter offered by the chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// Filters offered by both the open and the save dialog.
pub const THREAT_MODEL_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Threat Model",
        extensions: &["json"],
    },
    FileFilter {
        name: "All Files",
        extensions: &["*"],
    },
];

/// Which chooser to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Open,
    Save,
}

/// Chooser behaviour flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogProperty {
    /// Allow picking a single file
    OpenFile,
    /// Show dot-files in the chooser
    ShowHiddenFiles,
}

/// Everything a backend needs to present one chooser.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRequest {
    pub kind: DialogKind,
    pub title: String,
    pub filters: &'static [FileFilter],
    pub properties: Vec<DialogProperty>,
}

impl DialogRequest {
    /// A single-file open chooser for threat models.
    pub fn open(title: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Open,
            title: title.into(),
            filters: THREAT_MODEL_FILTERS,
            properties: vec![DialogProperty::OpenFile],
        }
    }

    /// A save chooser for threat models.
    pub fn save(title: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Save,
            title: title.into(),
            filters: THREAT_MODEL_FILTERS,
            properties: vec![DialogProperty::ShowHiddenFiles],
        }
    }
}

/// What the user did with a chooser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogResult {
    pub canceled: bool,
    pub file_path: Option<PathBuf>,
}

impl DialogResult {
    pub fn selected(path: impl Into<PathBuf>) -> Self {
        Self {
            canceled: false,
            file_path: Some(path.into()),
        }
    }

    pub fn canceled() -> Self {
        Self {
            canceled: true,
            file_path: None,
        }
    }

    /// The chosen path, if the dialog was confirmed with one.
    pub fn chosen_path(&self) -> Option<&PathBuf> {
        if self.canceled {
            None
        } else {
            self.file_path.as_ref()
        }
    }
}

/// Presents file choosers.
///
/// `show` blocks until the user answers; callers run it off the UI thread.
pub trait DialogBackend: Send + Sync {
    fn show(&self, request: &DialogRequest) -> Result<DialogResult>;
}

/// Shows blocking notices to the user.
pub trait Notifier {
    fn error_box(&self, title: &str, message: &str);
}

// ─────────────────────────────────────────────────────────────────────────────
// rfd implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Native choosers through `rfd::AsyncFileDialog`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdBackend;

impl RfdBackend {
    fn build(request: &DialogRequest) -> AsyncFileDialog {
        // rfd exposes no hidden-files switch
        request.filters.iter().fold(
            AsyncFileDialog::new().set_title(request.title.as_str()),
            |dialog, filter| dialog.add_filter(filter.name, filter.extensions),
        )
    }
}

impl DialogBackend for RfdBackend {
    fn show(&self, request: &DialogRequest) -> Result<DialogResult> {
        debug!(
            "Showing {:?} dialog '{}' with {:?}",
            request.kind, request.title, request.properties
        );
        let dialog = Self::build(request);
        let handle = match request.kind {
            DialogKind::Open => pollster::block_on(dialog.pick_file()),
            DialogKind::Save => pollster::block_on(dialog.save_file()),
        };

        Ok(match handle {
            Some(file) => DialogResult::selected(file.path().to_path_buf()),
            None => DialogResult::canceled(),
        })
    }
}

/// Native error boxes through `rfd::MessageDialog`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdNotifier;

impl Notifier for RfdNotifier {
    fn error_box(&self, title: &str, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
