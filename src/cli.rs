//! Command-line interface

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::config::{
    DEFAULT_ORPHAN_ALERT_EMAIL, DEFAULT_RECEIVERS_FILE, DEFAULT_ROUTES_DIRECTORY,
    DEFAULT_ROUTING_FILE, DEFAULT_SERVICE_DATA,
};
use crate::pipeline::GeneratorConfig;
use crate::registry::ReadPolicy;

/// Generate Alertmanager receivers and routes from a service registry
#[derive(Debug, Clone, Parser)]
#[command(name = "alertroute", version, about)]
pub struct Args {
    /// Service Data
    #[arg(long = "service-data", env = "ALERTROUTE_SERVICE_DATA", default_value = DEFAULT_SERVICE_DATA, allow_hyphen_values = true)]
    pub service_data: PathBuf,

    /// AM Routing configuration directory
    #[arg(long = "routes-directory", env = "ALERTROUTE_ROUTES_DIRECTORY", default_value = DEFAULT_ROUTES_DIRECTORY, allow_hyphen_values = true)]
    pub routes_directory: PathBuf,

    /// Alert Routes Configuration File
    #[arg(long = "alert-routing-file", env = "ALERTROUTE_ROUTING_FILE", default_value = DEFAULT_ROUTING_FILE, allow_hyphen_values = true)]
    pub alert_routing_file: PathBuf,

    /// Alert Receivers Configuration File
    #[arg(long = "alert-receivers-file", env = "ALERTROUTE_RECEIVERS_FILE", default_value = DEFAULT_RECEIVERS_FILE, allow_hyphen_values = true)]
    pub alert_receivers_file: PathBuf,

    /// Unowned Alert Receiver Email Address
    #[arg(long = "orphanAlertEmail", env = "ALERTROUTE_ORPHAN_ALERT_EMAIL", default_value = DEFAULT_ORPHAN_ALERT_EMAIL, allow_hyphen_values = true)]
    pub orphan_alert_email: String,

    /// Fail instead of continuing with an empty registry when service data cannot be read
    #[arg(long, env = "ALERTROUTE_STRICT")]
    pub strict: bool,
}

impl Args {
    /// Parse process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

impl From<Args> for GeneratorConfig {
    fn from(args: Args) -> Self {
        Self {
            service_data: args.service_data,
            routes_directory: args.routes_directory,
            routing_file: args.alert_routing_file,
            receivers_file: args.alert_receivers_file,
            orphan_alert_email: args.orphan_alert_email,
            read_policy: if args.strict {
                ReadPolicy::Strict
            } else {
                ReadPolicy::Tolerate
            },
        }
    }
}

/// Long flags that take a value
const VALUE_FLAGS: &[&str] = &[
    "service-data",
    "routes-directory",
    "alert-routing-file",
    "alert-receivers-file",
    "orphanAlertEmail",
];

/// Rewrite `-long-flag[=value]` into `--long-flag[=value]`
///
/// Two-character short flags, double-dash flags, positional values and
/// everything after a bare `--` are left untouched. A value passed as the
/// argument following a value flag is never rewritten, even when it starts
/// with `-`. The first item is the program name and is passed through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    let mut expect_value = false;
    let mut out = Vec::new();

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if s.len() > 2 && s.starts_with('-') => {
                let name = s.trim_start_matches('-');
                expect_value = !name.contains('=') && VALUE_FLAGS.contains(&name);
                if s.starts_with("--") {
                    None
                } else {
                    Some(OsString::from(format!("-{}", s)))
                }
            }
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }

    out
}
