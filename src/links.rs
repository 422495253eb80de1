//! Help menu links and the external browser opener.

use log::{debug, warn};
use std::thread;

/// Pages reachable from the Help menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpLink {
    Docs,
    Visit,
    CheatSheets,
    GitHub,
    SubmitIssue,
    Releases,
}

impl HelpLink {
    pub fn url(&self) -> &'static str {
        match self {
            HelpLink::Docs => "https://www.threatdragon.com/docs/",
            HelpLink::Visit => "https://owasp.org/www-project-threat-dragon/",
            HelpLink::CheatSheets => {
                "https://cheatsheetseries.owasp.org/cheatsheets/Threat_Modeling_Cheat_Sheet.html"
            }
            HelpLink::GitHub => "https://github.com/owasp/threat-dragon/",
            HelpLink::SubmitIssue => "https://github.com/owasp/threat-dragon/issues/new/choose/",
            HelpLink::Releases => "https://github.com/OWASP/threat-dragon/releases/",
        }
    }

    /// Translation key of the menu label.
    pub fn label_key(&self) -> &'static str {
        match self {
            HelpLink::Docs => "desktop.help.docs",
            HelpLink::Visit => "desktop.help.visit",
            HelpLink::CheatSheets => "desktop.help.sheets",
            HelpLink::GitHub => "desktop.help.github",
            HelpLink::SubmitIssue => "desktop.help.submit",
            HelpLink::Releases => "desktop.help.check",
        }
    }

    pub fn all() -> &'static [HelpLink] {
        &[
            HelpLink::Docs,
            HelpLink::Visit,
            HelpLink::CheatSheets,
            HelpLink::GitHub,
            HelpLink::SubmitIssue,
            HelpLink::Releases,
        ]
    }
}

/// Open `url` in the default browser without blocking the UI.
///
/// Failures are logged and otherwise ignored.
pub fn open_external(url: &'static str) {
    debug!("Opening external link: {}", url);
    let spawned = thread::Builder::new()
        .name("open-external".to_string())
        .spawn(move || {
            if let Err(e) = open::that(url) {
                warn!("Failed to open {}: {}", url, e);
            }
        });
    if let Err(e) = spawned {
        warn!("Failed to open {}: {}", url, e);
    }
}
