//! Alertmanager output model
//!
//! Receivers, routes and the root routing envelope as they appear in the
//! generated configuration files.

pub mod config;

pub use config::{
    email_receiver_name, service_matcher, webhook_receiver_name, EmailConfig, HttpConfig,
    ReceiversDocument, Receiver, RootRoute, Route, RoutesDocument, TlsConfig, WebhookConfig,
    DEFAULT_RECEIVER, SERVICE_LABEL,
};
