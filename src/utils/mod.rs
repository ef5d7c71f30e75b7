pub mod config;
pub mod logger;
pub mod settings_file;

pub use config::*;
pub use logger::{module_label, setup_logging};
pub use settings_file::{
    SettingsFile, apply_file_to_opts, load_default_settings, load_settings, parse_settings,
};
