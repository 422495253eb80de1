//! Host platform detection, resolved once at startup.

/// Desktop platforms the shell distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Whether menus get a leading application menu (About / Hide / Quit).
    pub fn has_app_menu(&self) -> bool {
        matches!(self, Platform::MacOs)
    }
}
