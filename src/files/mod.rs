//! Model file operations
//!
//! Native open/save choosers and the controller that the File menu drives.

pub mod controller;
pub mod dialogs;

pub use controller::{DialogOutcome, FileDialogController};
pub use dialogs::{RfdBackend, RfdNotifier};
