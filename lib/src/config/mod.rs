use std::path::PathBuf;

use tracing::error;

mod redactor;

pub use self::redactor::*;

pub const CONFIG_DIR: &str = "redactor";

pub fn get_default_config_path() -> Option<PathBuf> {
    let config_path = dirs::config_dir().map(|p| p.join(CONFIG_DIR));

    if config_path.is_none() {
        error!("Could not get configuration path!");
    }

    config_path
}

pub fn generate_default_config() -> Result<(), crate::RedactorError> {
    RedactorConfig::write_default()
}
