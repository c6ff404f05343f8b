//! Account Console Library
//!
//! Terminal client for a learning platform's account settings and
//! registration pages. The workspace crates do the work; this crate wires
//! error reporting, logging and configuration in front of the TUI.

use std::path::{Path, PathBuf};

use acctui_app::config::{self, Screen, Settings};
use acctui_core::prelude::*;

pub use acctui_app as app;
pub use acctui_client as client;
pub use acctui_core as core;
pub use acctui_tui as tui;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub register: bool,
}

impl Overrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.base_url {
            settings.server.base_url = base_url.clone();
        }
        if self.register {
            settings.ui.start_screen = Screen::Register;
        }
    }
}

/// Config path from `--config`, else the per-user default
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(config::default_config_path)
}

/// Main application entry point
pub async fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    acctui_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Account Console starting");
    info!("Config: {}", config_path.display());
    info!("═══════════════════════════════════════════════════════");

    let mut settings = config::load_or_init_settings(config_path);
    overrides.apply(&mut settings);

    let result = acctui_tui::run(settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Account Console exiting");
    result
}
