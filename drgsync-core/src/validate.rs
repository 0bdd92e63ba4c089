use crate::CoreError;
use std::fs;
use std::io::ErrorKind as IoKind;
use std::path::PathBuf;

/// Checks that `path` names something the tool can stat.
///
/// Only the metadata lookup is performed: a directory or an unreadable file
/// still passes.
pub fn validate_save_path(path: &str) -> Result<(), CoreError> {
    if path.is_empty() {
        return Err(CoreError::EmptyPath);
    }

    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let p = PathBuf::from(path);
            Err(match e.kind() {
                IoKind::NotFound => CoreError::NotFound(p),
                IoKind::PermissionDenied => CoreError::PermissionDenied(p),
                IoKind::TimedOut => CoreError::Timeout(p),
                _ => CoreError::Unknown { path: p, source: e },
            })
        }
    }
}
