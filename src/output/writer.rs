//! YAML file writers for the generated Alertmanager configuration

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::alertmanager::{ReceiversDocument, Receiver, RootRoute, Route, RoutesDocument};

/// Write `{ receivers: [...] }` to `dir/file_name`
pub fn write_receivers(
    dir: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    receivers: &[Receiver],
) -> Result<PathBuf, WriteError> {
    let doc = ReceiversDocument {
        receivers: Cow::Borrowed(receivers),
    };
    write_document(dir.as_ref(), file_name.as_ref(), &doc)
}

/// Write the routes wrapped in the root route to `dir/file_name`
pub fn write_routes(
    dir: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    routes: Vec<Route>,
) -> Result<PathBuf, WriteError> {
    let doc = RoutesDocument {
        route: RootRoute::wrap(routes),
    };
    write_document(dir.as_ref(), file_name.as_ref(), &doc)
}

/// Serialize `doc` and write it, creating `dir` and replacing any existing file
fn write_document<T: Serialize>(dir: &Path, file_name: &Path, doc: &T) -> Result<PathBuf, WriteError> {
    std::fs::create_dir_all(dir).map_err(|e| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(file_name);
    let yaml = serde_yaml::to_string(doc).map_err(|e| WriteError::Serialize {
        path: path.clone(),
        source: e,
    })?;

    std::fs::write(&path, yaml.as_bytes()).map_err(|e| WriteError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), bytes = yaml.len(), "Wrote configuration file");

    Ok(path)
}

/// Output file errors
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
