//! Alertmanager configuration types
//!
//! Only the subset of the Alertmanager schema that the generator emits is
//! modelled here. Field names and omission rules follow Alertmanager's own
//! YAML layout.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Name of the fallback receiver for alerts no service route claims
pub const DEFAULT_RECEIVER: &str = "email:default-receiver";

/// Label every generated route matches on
pub const SERVICE_LABEL: &str = "service";

/// TLS settings for an HTTP-based receiver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsConfig {
    pub insecure_skip_verify: bool,
}

/// HTTP client settings for an HTTP-based receiver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub tls_config: TlsConfig,
}

/// Email notification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub send_resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
}

/// Webhook notification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    pub send_resolved: bool,
    pub http_config: HttpConfig,
}

/// A named notification target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_configs: Vec<EmailConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webhook_configs: Vec<WebhookConfig>,
}

impl Receiver {
    /// Create a receiver with a single email config that also reports resolution
    pub fn email(name: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email_configs: vec![EmailConfig {
                send_resolved: true,
                from: None,
                to: to.into(),
            }],
            webhook_configs: Vec::new(),
        }
    }

    /// Create a receiver with a single webhook config that also reports resolution
    pub fn webhook(name: impl Into<String>, url: impl Into<String>, insecure_skip_verify: bool) -> Self {
        Self {
            name: name.into(),
            email_configs: Vec::new(),
            webhook_configs: vec![WebhookConfig {
                url: url.into(),
                send_resolved: true,
                http_config: HttpConfig {
                    tls_config: TlsConfig {
                        insecure_skip_verify,
                    },
                },
            }],
        }
    }
}

/// Child route dispatching matching alerts to a receiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub matchers: Vec<String>,
    pub receiver: String,
}

impl Route {
    /// Route alerts carrying `service="<service>"` to `receiver`
    pub fn for_service(service: &str, receiver: impl Into<String>) -> Self {
        Self {
            matchers: vec![service_matcher(service)],
            receiver: receiver.into(),
        }
    }
}

/// Top-level routing node all generated routes hang under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootRoute {
    pub group_by: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_wait: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group_interval: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repeat_interval: String,
    pub receiver: String,
    pub routes: Vec<Route>,
}

impl RootRoute {
    /// Wrap child routes in the fixed grouping and timing policy
    pub fn wrap(routes: Vec<Route>) -> Self {
        Self {
            group_by: vec!["alertname".to_string()],
            group_wait: "30s".to_string(),
            group_interval: "5m".to_string(),
            repeat_interval: "1h".to_string(),
            receiver: DEFAULT_RECEIVER.to_string(),
            routes,
        }
    }
}

/// Contents of the receivers file
///
/// Borrows the receiver list when writing, owns it when read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiversDocument<'a> {
    pub receivers: Cow<'a, [Receiver]>,
}

/// Contents of the routes file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesDocument {
    pub route: RootRoute,
}

/// Receiver name for a service's email channel
pub fn email_receiver_name(service: &str) -> String {
    format!("email:{}", service)
}

/// Receiver name for a service's webhook channel
pub fn webhook_receiver_name(service: &str) -> String {
    format!("webhook:{}", service)
}

/// Exact-match expression on the service label
///
/// Quotes and backslashes in the value are escaped so the result is always
/// a single well-formed `label="value"` matcher.
pub fn service_matcher(service: &str) -> String {
    let mut escaped = String::with_capacity(service.len());
    for c in service.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    format!("{}=\"{}\"", SERVICE_LABEL, escaped)
}
