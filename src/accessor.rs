use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::error::LoadError;
use crate::fs;
use crate::logger::{Logger, TracingLogger};
use crate::plain::to_plain;

/// In-memory YAML tree produced by [`YamlFile::load`].
pub type Document = Value;

/// Reads YAML files fail-soft and writes them fail-hard.
///
/// `load` never returns an error: problems are reported to the logger and
/// the result is `None`. `dump` propagates every error to the caller.
#[derive(Clone)]
pub struct YamlFile {
    log: Arc<dyn Logger>,
}

impl YamlFile {
    /// Build an accessor around `logger`, or a [`TracingLogger`] if `None`.
    pub fn new(logger: Option<Arc<dyn Logger>>) -> Self {
        Self {
            log: logger.unwrap_or_else(|| Arc::new(TracingLogger)),
        }
    }

    /// Build an accessor that owns `logger` for its whole lifetime.
    pub fn with_logger<L: Logger + 'static>(logger: L) -> Self {
        Self::new(Some(Arc::new(logger)))
    }

    /// Load a document from `file`.
    ///
    /// Returns `None` if the file is missing, unreadable, or not valid YAML,
    /// after logging one error naming the file and the reason. Use
    /// [`try_load`](Self::try_load) to tell those cases apart.
    pub fn load<P: AsRef<Path>>(&self, file: P) -> Option<Document> {
        self.try_load(file).map_err(|e| self.report(&e)).ok()
    }

    /// Load a document from `file` and convert it into `T`.
    ///
    /// A document that does not fit `T` is treated like malformed YAML.
    pub fn load_as<T, P>(&self, file: P) -> Option<T>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = file.as_ref();
        let doc = self.load(path)?;
        serde_yaml::from_value(doc)
            .map_err(|source| {
                self.report(&LoadError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            })
            .ok()
    }

    /// Load a document from `file` without logging, keeping the reason.
    ///
    /// An empty (or whitespace-only) file loads as `Value::Null`.
    pub fn try_load<P: AsRef<Path>>(&self, file: P) -> Result<Document, LoadError> {
        let path = file.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        if content.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_yaml::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write `data` to `file` as YAML and hand `file` back.
    ///
    /// Parent directories are created as needed and any existing file is
    /// overwritten. `data` is first reduced to plain JSON-model data, see
    /// [`to_plain`].
    pub fn dump<P, T>(&self, file: P, data: &T) -> Result<P>
    where
        P: AsRef<Path>,
        T: Serialize + ?Sized,
    {
        let path = file.as_ref();
        fs::ensure_parent_dir(path)?;

        let plain = to_plain(data)
            .with_context(|| format!("convert data for {} to plain values", path.display()))?;
        let text = serde_yaml::to_string(&plain)
            .with_context(|| format!("serialize yaml for {}", path.display()))?;
        fs::write(path, &text)?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "dumped yaml");
        Ok(file)
    }

    fn report(&self, err: &LoadError) {
        self.log.error(format_args!(
            "Problem parsing {} with {}",
            err.path().display(),
            err.reason()
        ));
    }
}

impl Default for YamlFile {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for YamlFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YamlFile").finish_non_exhaustive()
    }
}
