//! alertroute: Alertmanager configuration from a service ownership registry
//!
//! Reads a `services.yaml` registry describing which team owns each service
//! and where its alerts go, and writes the two files Alertmanager includes:
//! a receivers file and a routes file.
//!
//! # Output
//!
//! - **Receivers**: `email:<service>` and/or `webhook:<service>` per service,
//!   plus the `email:default-receiver` fallback
//! - **Routes**: one `service="<service>"` route per receiver, nested under a
//!   root route whose default is the fallback receiver
//!
//! # Example
//!
//! ```no_run
//! use alertroute::pipeline::{run, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("./services.yaml", "./routes")
//!     .with_orphan_alert_email("oncall@example.com");
//!
//! let files = run(&config).unwrap();
//! println!("Wrote {:?} and {:?}", files.receivers, files.routes);
//! ```

pub mod alertmanager;
pub mod cli;
pub mod generate;
pub mod output;
pub mod pipeline;
pub mod registry;

// Re-export commonly used types
pub use alertmanager::{Receiver, Route, DEFAULT_RECEIVER};
pub use pipeline::{run, GeneratedFiles, GeneratorConfig, PipelineError};
pub use registry::{ReadPolicy, Service, ServiceRegistry};
