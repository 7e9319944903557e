mod store;
mod types;

pub use store::{default_settings_path, load_settings, SettingsStore, CONFIG_DIR_ENV};
pub use types::{ConfigError, Settings};
