use drgsync_core::{Config, ConfigStore, CoreError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub mod paths;

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// [`ConfigStore`] backed by a single JSON file.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn open_default() -> Result<Self, CoreError> {
        let path = paths::default_config_file().ok_or(CoreError::HomeDir)?;
        Ok(Self::open_with(path))
    }

    pub fn open_with(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<Config, CoreError> {
        match fs::metadata(&self.path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "writing empty config");
                create_empty(&self.path)?;
            }
            Err(e) => return Err(CoreError::io("stat", &self.path, e)),
        }

        let buf = fs::read(&self.path).map_err(|e| CoreError::io("read", &self.path, e))?;
        let config = serde_json::from_slice::<Config>(&buf).map_err(|source| CoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), ?config, "config read");
        Ok(config)
    }

    fn save(&self, config: &Config) -> Result<(), CoreError> {
        debug!(path = %self.path.display(), ?config, "writing config");
        let json = encode(&self.path, config)?;
        write_config(&self.path, &json, true).map_err(|e| CoreError::io("write", &self.path, e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn encode(path: &Path, config: &Config) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec_pretty(config).map_err(|source| CoreError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates the file with an empty config. Losing the race to another
/// creator is fine; whatever it wrote gets read next.
fn create_empty(path: &Path) -> Result<(), CoreError> {
    let json = encode(path, &Config::default())?;
    match write_config(path, &json, false) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(CoreError::io("create", path, e)),
    }
}

fn write_config(path: &Path, json: &[u8], clobber: bool) -> Result<(), io::Error> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json)?;
    tmp.flush()?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    }

    if clobber {
        tmp.persist(path).map_err(|e| e.error)?;
    } else {
        tmp.persist_noclobber(path).map_err(|e| e.error)?;
    }
    Ok(())
}
