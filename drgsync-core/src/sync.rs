use crate::{CoreError, SyncStep};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const BACKUP_SUFFIX: &str = "_backup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub backup_path: PathBuf,
    pub backed_up_bytes: usize,
    pub copied_bytes: usize,
}

/// `<destination>_backup`, next to the destination.
pub fn backup_path(destination: &Path) -> PathBuf {
    let mut s: OsString = destination.as_os_str().to_owned();
    s.push(BACKUP_SUFFIX);
    PathBuf::from(s)
}

/// Backs up `destination`, then replaces it with the bytes of `source`.
///
/// The overwrite is only attempted after the backup succeeded. A missing
/// destination fails the backup step before anything is written. There is no
/// rollback if the overwrite fails.
pub fn run_sync(source: &Path, destination: &Path) -> Result<SyncReport, CoreError> {
    let (backup_path, backed_up_bytes) =
        backup_file(destination).map_err(|e| step_err(SyncStep::Backup, e))?;
    info!(destination = %destination.display(), backup = %backup_path.display(), "backed up save");

    let copied_bytes =
        replace_file(source, destination).map_err(|e| step_err(SyncStep::Overwrite, e))?;
    info!(source = %source.display(), destination = %destination.display(), bytes = copied_bytes, "copied save");

    Ok(SyncReport {
        backup_path,
        backed_up_bytes,
        copied_bytes,
    })
}

fn backup_file(path: &Path) -> Result<(PathBuf, usize), CoreError> {
    let bytes = fs::read(path).map_err(|e| CoreError::io("read", path, e))?;
    let target = backup_path(path);
    debug!(from = %path.display(), to = %target.display(), len = bytes.len(), "writing backup");
    fs::write(&target, &bytes).map_err(|e| CoreError::io("write", &target, e))?;
    Ok((target, bytes.len()))
}

fn replace_file(input: &Path, output: &Path) -> Result<usize, CoreError> {
    let bytes = fs::read(input).map_err(|e| CoreError::io("read", input, e))?;
    fs::write(output, &bytes).map_err(|e| CoreError::io("write", output, e))?;
    Ok(bytes.len())
}

fn step_err(step: SyncStep, source: CoreError) -> CoreError {
    CoreError::Sync {
        step,
        source: Box::new(source),
    }
}
