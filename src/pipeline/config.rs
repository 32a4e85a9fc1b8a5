use std::path::PathBuf;

use crate::registry::ReadPolicy;

pub const DEFAULT_SERVICE_DATA: &str = "./services.yaml";
pub const DEFAULT_ROUTES_DIRECTORY: &str = "./routes";
pub const DEFAULT_ROUTING_FILE: &str = "./am_routes.yaml";
pub const DEFAULT_RECEIVERS_FILE: &str = "./am_receivers.yaml";
pub const DEFAULT_ORPHAN_ALERT_EMAIL: &str = "unassigned-alerts@example.com";

/// Generator run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Service registry document to read
    pub service_data: PathBuf,
    /// Directory both output files are written into
    pub routes_directory: PathBuf,
    /// Routes file name, relative to `routes_directory`
    pub routing_file: PathBuf,
    /// Receivers file name, relative to `routes_directory`
    pub receivers_file: PathBuf,
    /// Recipient for alerts no service route claims
    pub orphan_alert_email: String,
    pub read_policy: ReadPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            service_data: PathBuf::from(DEFAULT_SERVICE_DATA),
            routes_directory: PathBuf::from(DEFAULT_ROUTES_DIRECTORY),
            routing_file: PathBuf::from(DEFAULT_ROUTING_FILE),
            receivers_file: PathBuf::from(DEFAULT_RECEIVERS_FILE),
            orphan_alert_email: DEFAULT_ORPHAN_ALERT_EMAIL.to_string(),
            read_policy: ReadPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Read services from `service_data` and write into `routes_directory`
    pub fn new(service_data: impl Into<PathBuf>, routes_directory: impl Into<PathBuf>) -> Self {
        Self {
            service_data: service_data.into(),
            routes_directory: routes_directory.into(),
            ..Default::default()
        }
    }

    pub fn with_orphan_alert_email(mut self, email: impl Into<String>) -> Self {
        self.orphan_alert_email = email.into();
        self
    }

    pub fn with_read_policy(mut self, policy: ReadPolicy) -> Self {
        self.read_policy = policy;
        self
    }

    /// Full path of the routes file
    pub fn routing_path(&self) -> PathBuf {
        self.routes_directory.join(&self.routing_file)
    }

    /// Full path of the receivers file
    pub fn receivers_path(&self) -> PathBuf {
        self.routes_directory.join(&self.receivers_file)
    }
}
