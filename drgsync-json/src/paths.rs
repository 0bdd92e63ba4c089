use directories::BaseDirs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = ".deepRockSyncConfig";

pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

/// `<home>/.deepRockSyncConfig`, or `None` without a home directory.
pub fn default_config_file() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}
