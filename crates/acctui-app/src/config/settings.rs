//! Settings file loading and saving

use std::path::{Path, PathBuf};

use acctui_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "acctui";
const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/acctui/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing or invalid.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load settings, writing a commented default file on first launch
pub fn load_or_init_settings(path: &Path) -> Settings {
    if path.exists() {
        return load_settings(path);
    }

    let settings = Settings::default();
    if let Err(e) = save_settings(path, &settings) {
        warn!("Could not write default config to {:?}: {}", path, e);
    }
    settings
}

/// Write settings to `path` atomically
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| Error::config(format!("Invalid config path: {}", path.display())))?;

    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config dir {}", dir.display()))?;
    }

    let temp_path = dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    std::fs::write(&temp_path, &full_content).context("Failed to write temp config file")?;
    std::fs::rename(&temp_path, path).context("Failed to move config file into place")?;

    info!("Saved settings to {:?}", path);
    Ok(())
}

fn generate_config_header() -> String {
    r#"# Account console configuration
# Generated by acctui

"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IconMode, Screen};
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings.server.base_url, "http://localhost:8000");
        assert_eq!(settings.session.csrf_cookie_name, "csrftoken");
        assert_eq!(settings.server.connect_timeout_secs, 10);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "https://courses.example.org"

[ui]
icons = "nerd_fonts"
start_screen = "register"

[options]
language = [["si", "sindarin"], ["el", "elvish"]]
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.server.base_url, "https://courses.example.org");
        assert_eq!(
            settings.server.account_endpoint,
            "/api/user/v0/accounts/user"
        );
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.start_screen, Screen::Register);
        assert_eq!(
            settings.options.language,
            vec![
                ("si".to_string(), "sindarin".to_string()),
                ("el".to_string(), "elvish".to_string())
            ]
        );
        assert!(!settings.options.gender.is_empty());
    }

    #[test]
    fn test_load_invalid_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is [not toml").unwrap();
        let settings = load_settings(&path);
        assert_eq!(settings.server.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut settings = Settings::default();
        settings.server.hostname = Some("studio.example.org".into());
        settings.session.csrf_token = Some("T0K3N".into());

        save_settings(&path, &settings).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Account console configuration"));
        let loaded = load_settings(&path);
        assert_eq!(
            loaded.server.hostname.as_deref(),
            Some("studio.example.org")
        );
        assert_eq!(loaded.session.csrf_token.as_deref(), Some("T0K3N"));
        assert!(!dir.path().join("nested").join(".config.toml.tmp").exists());
    }

    #[test]
    fn test_first_launch_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("acctui").join("config.toml");

        let settings = load_or_init_settings(&path);
        assert_eq!(settings.server.base_url, "http://localhost:8000");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Account console configuration"));
        assert!(content.contains("base_url = \"http://localhost:8000\""));
        assert!(!content.contains("year_of_birth"));
    }

    #[test]
    fn test_existing_file_is_not_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nicons = \"nerd_fonts\"\n").unwrap();

        let settings = load_or_init_settings(&path);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[ui]\nicons = \"nerd_fonts\"\n"
        );
    }

    #[test]
    fn test_save_into_unwritable_location_is_io_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let err = save_settings(&blocker.join("config.toml"), &Settings::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
