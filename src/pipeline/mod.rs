//! End-to-end generation run
//!
//! Loads the registry once, derives receivers and routes from it and writes
//! the receivers file followed by the routes file. The first failure stops
//! the run; nothing after it is written.

pub mod config;

pub use config::GeneratorConfig;

use std::collections::HashSet;
use std::path::PathBuf;

use crate::alertmanager::{Receiver, Route, DEFAULT_RECEIVER};
use crate::generate::{generate_receivers, generate_routes, IdentityResolver, UrlResolver};
use crate::output::{write_receivers, write_routes, WriteError};
use crate::registry::{self, LoadError};

/// Paths of the files a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub receivers: PathBuf,
    pub routes: PathBuf,
}

/// Run the generator with webhook URLs passed through unchanged
pub fn run(config: &GeneratorConfig) -> Result<GeneratedFiles, PipelineError> {
    run_with_resolver(config, &IdentityResolver)
}

/// Run the generator with a custom webhook URL resolver
pub fn run_with_resolver(
    config: &GeneratorConfig,
    resolver: &dyn UrlResolver,
) -> Result<GeneratedFiles, PipelineError> {
    let registry = registry::load(&config.service_data, config.read_policy)?;

    let receivers = generate_receivers(&registry, &config.orphan_alert_email, resolver);
    let routes = generate_routes(&registry);

    check_referential_integrity(&receivers, &routes)?;

    let receivers = write_receivers(&config.routes_directory, &config.receivers_file, &receivers)?;
    let routes = write_routes(&config.routes_directory, &config.routing_file, routes)?;

    Ok(GeneratedFiles { receivers, routes })
}

/// Verify receiver names are unique and every route, and the root default,
/// names a generated receiver
pub fn check_referential_integrity(receivers: &[Receiver], routes: &[Route]) -> Result<(), PipelineError> {
    let mut names: HashSet<&str> = HashSet::with_capacity(receivers.len());
    for receiver in receivers {
        if !names.insert(receiver.name.as_str()) {
            return Err(PipelineError::DuplicateReceiver(receiver.name.clone()));
        }
    }

    if !names.contains(DEFAULT_RECEIVER) {
        return Err(PipelineError::DanglingRoute(DEFAULT_RECEIVER.to_string()));
    }

    match routes.iter().find(|r| !names.contains(r.receiver.as_str())) {
        Some(route) => Err(PipelineError::DanglingRoute(route.receiver.clone())),
        None => Ok(()),
    }
}

/// Generation run errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Route targets unknown receiver: {0}")]
    DanglingRoute(String),

    #[error("Receiver defined more than once: {0}")]
    DuplicateReceiver(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alertmanager::{ReceiversDocument, RoutesDocument};
    use crate::registry::ReadPolicy;
    use std::path::Path;
    use tempfile::TempDir;

    const REGISTRY: &str = r#"
services:
  api:
    owner: platform
    alert_email: api@example.com
  billing:
    owner: finance
    contact_email: finance@example.com
    alert_email: billing@example.com
    webhook_url: https://hooks.example.com/billing
    insecure_skip_verify: true
  docs:
    owner: writers
    contact_chat: "@writers"
  search:
    owner: discovery
    webhook_url: https://hooks.example.com/search
"#;

    fn setup(content: &str) -> (TempDir, GeneratorConfig) {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("services.yaml");
        std::fs::write(&data, content).unwrap();
        let config = GeneratorConfig::new(data, temp_dir.path().join("routes"));
        (temp_dir, config)
    }

    fn read_receivers(path: &Path) -> ReceiversDocument<'static> {
        serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    fn read_routes(path: &Path) -> RoutesDocument {
        serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_single_email_service() {
        let (_dir, config) = setup("services: {api: {owner: \"x\", alert_email: \"a@b.com\"}}");

        let files = run(&config).unwrap();

        let receivers = read_receivers(&files.receivers).receivers;
        assert_eq!(receivers.len(), 2);
        assert_eq!(receivers[0].name, "email:api");
        assert_eq!(receivers[0].email_configs[0].to, "a@b.com");
        assert_eq!(receivers[1].name, DEFAULT_RECEIVER);
        assert_eq!(receivers[1].email_configs[0].to, "unassigned-alerts@example.com");

        let root = read_routes(&files.routes).route;
        assert_eq!(root.receiver, DEFAULT_RECEIVER);
        assert_eq!(root.routes.len(), 1);
        assert_eq!(root.routes[0].matchers, vec![r#"service="api""#.to_string()]);
        assert_eq!(root.routes[0].receiver, "email:api");
    }

    #[test]
    fn test_empty_services() {
        let (_dir, config) = setup("services: {}\n");

        let files = run(&config).unwrap();

        let receivers = read_receivers(&files.receivers).receivers;
        assert_eq!(receivers.len(), 1);
        assert_eq!(receivers[0].name, DEFAULT_RECEIVER);
        assert!(read_routes(&files.routes).route.routes.is_empty());
    }

    #[test]
    fn test_mixed_registry_closure() {
        let (_dir, config) = setup(REGISTRY);

        let files = run(&config).unwrap();
        let receivers = read_receivers(&files.receivers).receivers;
        let root = read_routes(&files.routes).route;

        // api: 1, billing: 2, docs: 0, search: 1, plus fallback
        assert_eq!(receivers.len(), 5);
        assert_eq!(root.routes.len(), 4);
        check_referential_integrity(&receivers, &root.routes).unwrap();

        let billing_hook = receivers.iter().find(|r| r.name == "webhook:billing").unwrap();
        assert!(billing_hook.webhook_configs[0].http_config.tls_config.insecure_skip_verify);
        let search_hook = receivers.iter().find(|r| r.name == "webhook:search").unwrap();
        assert!(!search_hook.webhook_configs[0].http_config.tls_config.insecure_skip_verify);

        assert!(receivers.iter().all(|r| !r.name.ends_with(":docs")));
        let docs_matcher = r#"service="docs""#.to_string();
        assert!(root.routes.iter().all(|r| !r.matchers.contains(&docs_matcher)));
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let (_dir, config) = setup(REGISTRY);

        let first = run(&config).unwrap();
        let receivers = std::fs::read(&first.receivers).unwrap();
        let routes = std::fs::read(&first.routes).unwrap();

        let second = run(&config).unwrap();
        assert_eq!(std::fs::read(&second.receivers).unwrap(), receivers);
        assert_eq!(std::fs::read(&second.routes).unwrap(), routes);
    }

    #[test]
    fn test_custom_orphan_email() {
        let (_dir, config) = setup("services: {}\n");
        let config = config.with_orphan_alert_email("oncall@example.com");

        let files = run(&config).unwrap();

        let receivers = read_receivers(&files.receivers).receivers;
        assert_eq!(receivers[0].email_configs[0].to, "oncall@example.com");
    }

    #[test]
    fn test_unreadable_input_tolerated() {
        let temp_dir = TempDir::new().unwrap();
        let config = GeneratorConfig::new(temp_dir.path().join("absent.yaml"), temp_dir.path().join("routes"));

        let files = run(&config).unwrap();

        assert_eq!(read_receivers(&files.receivers).receivers.len(), 1);
        assert!(read_routes(&files.routes).route.routes.is_empty());
    }

    #[test]
    fn test_unreadable_input_strict() {
        let temp_dir = TempDir::new().unwrap();
        let config = GeneratorConfig::new(temp_dir.path().join("absent.yaml"), temp_dir.path().join("routes"))
            .with_read_policy(ReadPolicy::Strict);

        let err = run(&config).unwrap_err();

        assert!(matches!(err, PipelineError::Load(LoadError::Read { .. })));
        assert!(!config.routes_directory.exists());
    }

    #[test]
    fn test_malformed_input_writes_nothing() {
        let (_dir, config) = setup("services: nope\n");

        let err = run(&config).unwrap_err();

        assert!(matches!(err, PipelineError::Load(LoadError::Parse { .. })));
        assert!(!config.receivers_path().exists());
        assert!(!config.routing_path().exists());
    }

    #[test]
    fn test_receivers_failure_skips_routes() {
        let (_dir, mut config) = setup(REGISTRY);
        // A directory in place of the receivers file makes that write fail
        std::fs::create_dir_all(config.receivers_path()).unwrap();
        config.routing_file = PathBuf::from("am_routes.yaml");

        let err = run(&config).unwrap_err();

        assert!(matches!(err, PipelineError::Write(WriteError::Write { .. })));
        assert!(!config.routing_path().exists());
    }

    #[test]
    fn test_service_shadowing_fallback_is_rejected() {
        let (_dir, config) = setup("services:\n  default-receiver:\n    owner: x\n    alert_email: team@x.com\n");

        let err = run(&config).unwrap_err();

        assert!(matches!(err, PipelineError::DuplicateReceiver(name) if name == DEFAULT_RECEIVER));
        assert!(!config.receivers_path().exists());
        assert!(!config.routing_path().exists());
    }

    #[test]
    fn test_duplicate_receiver_detected() {
        let receivers = vec![
            Receiver::email("email:api", "a@example.com"),
            Receiver::email("email:api", "b@example.com"),
            Receiver::email(DEFAULT_RECEIVER, "x@example.com"),
        ];
        let routes = vec![Route::for_service("api", "email:api")];

        let err = check_referential_integrity(&receivers, &routes).unwrap_err();
        assert!(matches!(err, PipelineError::DuplicateReceiver(name) if name == "email:api"));
    }

    #[test]
    fn test_dangling_route_detected() {
        let receivers = vec![Receiver::email(DEFAULT_RECEIVER, "x@example.com")];
        let routes = vec![Route::for_service("api", "email:api")];

        let err = check_referential_integrity(&receivers, &routes).unwrap_err();
        assert!(matches!(err, PipelineError::DanglingRoute(name) if name == "email:api"));

        let err = check_referential_integrity(&[], &[]).unwrap_err();
        assert!(matches!(err, PipelineError::DanglingRoute(name) if name == DEFAULT_RECEIVER));
    }
}
