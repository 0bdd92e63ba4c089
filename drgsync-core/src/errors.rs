use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of every failure the tool can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyPath,
    NotFound,
    PermissionDenied,
    Timeout,
    ParseError,
    IoError,
    Unknown,
}

/// Which half of a sync transaction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStep {
    Backup,
    Overwrite,
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStep::Backup => f.write_str("backup"),
            SyncStep::Overwrite => f.write_str("overwrite"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("you must enter a path to your save file")]
    EmptyPath,
    #[error("the path {} does not exist, please check it again", .0.display())]
    NotFound(PathBuf),
    #[error("no permission to use {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("timed out while checking {}, try again", .0.display())]
    Timeout(PathBuf),
    #[error("could not access {}: {source}", .path.display())]
    Unknown {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{what} failed for {}: {source}", .path.display())]
    Io {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config json in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{step} step failed: {source}")]
    Sync {
        step: SyncStep,
        #[source]
        source: Box<CoreError>,
    },
    #[error("the {0} save path is not configured, run setup first")]
    NotConfigured(&'static str),
    #[error("could not encode config for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("run deadline passed")]
    DeadlineExceeded,
    #[error("cannot determine the home directory")]
    HomeDir,
    #[error("prompt failed: {0}")]
    Prompt(String),
}

impl CoreError {
    pub fn io(what: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        CoreError::Io {
            what,
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::EmptyPath | CoreError::NotConfigured(_) => ErrorKind::EmptyPath,
            CoreError::NotFound(_) => ErrorKind::NotFound,
            CoreError::PermissionDenied(_) => ErrorKind::PermissionDenied,
            CoreError::Timeout(_) | CoreError::DeadlineExceeded => ErrorKind::Timeout,
            CoreError::Parse { .. } | CoreError::Encode { .. } => ErrorKind::ParseError,
            CoreError::Io { .. } | CoreError::Prompt(_) => ErrorKind::IoError,
            CoreError::Sync { source, .. } => source.kind(),
            CoreError::Unknown { .. } | CoreError::HomeDir => ErrorKind::Unknown,
        }
    }

    /// The failing sync step, if this error came out of a sync transaction.
    pub fn sync_step(&self) -> Option<SyncStep> {
        match self {
            CoreError::Sync { step, .. } => Some(*step),
            _ => None,
        }
    }
}
