//! Registry file loading

use std::path::{Path, PathBuf};

use super::service::ServiceRegistry;

/// How an unreadable registry file is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Log the failure and continue with an empty registry
    #[default]
    Tolerate,
    /// Fail the load
    Strict,
}

/// Load the service registry from `path`
///
/// Parse failures are always errors. Read failures are errors only under
/// [`ReadPolicy::Strict`]; otherwise they are logged and an empty registry
/// is returned.
pub fn load(path: impl AsRef<Path>, policy: ReadPolicy) -> Result<ServiceRegistry, LoadError> {
    let path = path.as_ref();

    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => match policy {
            ReadPolicy::Tolerate => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Service data unreadable, continuing with an empty registry"
                );
                Vec::new()
            }
            ReadPolicy::Strict => {
                return Err(LoadError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        },
    };

    let registry = ServiceRegistry::from_yaml_slice(&content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        services = registry.len(),
        "Loaded service registry"
    );

    Ok(registry)
}

/// Registry loading errors
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read service data {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse service data {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
