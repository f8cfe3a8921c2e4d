use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a YAML file could not be turned into a document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no such file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Why a value could not be reduced to plain JSON-model data.
#[derive(Error, Debug)]
pub enum PlainError {
    #[error(transparent)]
    Serialize(#[from] serde_yaml::Error),

    #[error("key must be a string, found {0}")]
    Key(&'static str),
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Read { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }

    /// The underlying failure, without the path prefix.
    pub fn reason(&self) -> String {
        match self {
            LoadError::NotFound { .. } => "file not found".to_string(),
            LoadError::Read { source, .. } => source.to_string(),
            LoadError::Parse { source, .. } => source.to_string(),
        }
    }
}
