//! Configuration file parsing for the bot dashboard
//!
//! Settings live in `<config dir>/bot-dashboard/config.toml`. A missing or
//! broken file never stops the dashboard from starting; defaults are used.

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, BASE_URL_ENV,
    CONFIG_FILENAME,
};
pub use types::*;
