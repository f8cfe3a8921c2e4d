//! Load YAML files into documents and dump plain data back to disk.
//!
//! ```no_run
//! let yaml = yamlfile::yaml(None);
//! let path = yaml.dump("/tmp/app/.lando.yml", &serde_json::json!({ "name": "app" }))?;
//! let doc = yaml.load(path);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod accessor;
mod error;
mod fs;
pub mod logger;
pub mod logging;
pub mod plain;

use std::sync::Arc;

pub use accessor::{Document, YamlFile};
pub use error::{LoadError, PlainError};
pub use logger::{Logger, TracingLogger};

/// Build a [`YamlFile`] accessor.
///
/// Without a logger, load failures go to a [`TracingLogger`] created for
/// this accessor.
pub fn yaml(logger: Option<Arc<dyn Logger>>) -> YamlFile {
    YamlFile::new(logger)
}
