//! Settings loader for `<config dir>/bot-dashboard/config.toml`

use std::path::{Path, PathBuf};

use botdash_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "bot-dashboard";

/// Overrides `[service] base_url` when set
pub const BASE_URL_ENV: &str = "BOTDASH_BASE_URL";

/// Location of the user config file, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply environment overrides on top of file settings
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        let base_url = base_url.trim();
        if !base_url.is_empty() {
            debug!("{} overrides base URL: {}", BASE_URL_ENV, base_url);
            settings.service.base_url = base_url.to_string();
        }
    }
}

/// Write a commented default config file unless one already exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    ensure_parent_dir(config_path)?;

    if config_path.exists() {
        debug!("Config file already exists at {:?}", config_path);
        return Ok(());
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

fn ensure_parent_dir(config_path: &Path) -> Result<()> {
    if let Some(dir) = config_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
        }
    }
    Ok(())
}

fn generate_default_config() -> String {
    r#"# Bot Dashboard Configuration

[service]
base_url = "http://localhost:8000"   # Overridden by BOTDASH_BASE_URL or --base-url

[notifications]
display_ms = 5000       # Time a notification stays fully visible
transition_ms = 300     # Exit transition before it is removed

[behavior]
refresh_on_start = true # Load bots and stats at startup

[ui]
tick_rate_ms = 50
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[service]
base_url = "http://bots.internal:9000"

[notifications]
display_ms = 1500
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.service.base_url, "http://bots.internal:9000");
        assert_eq!(settings.notifications.display_ms, 1500);
        assert_eq!(settings.notifications.transition_ms, 300);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILENAME);

        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("default config should parse");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        init_config_file(&path).unwrap();
        std::fs::write(&path, "[behavior]\nrefresh_on_start = false\n").unwrap();
        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("refresh_on_start = false"));
    }

    #[test]
    #[serial]
    fn test_env_override_base_url() {
        std::env::set_var(BASE_URL_ENV, "http://10.0.0.5:8000");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(settings.service.base_url, "http://10.0.0.5:8000");
    }

    #[test]
    #[serial]
    fn test_blank_env_override_ignored() {
        std::env::set_var(BASE_URL_ENV, "  ");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(settings.service.base_url, "http://localhost:8000");
    }
}
