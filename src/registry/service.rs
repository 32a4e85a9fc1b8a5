//! Registry document types

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// A service entry, keyed by name in the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Owning team or person
    #[serde(deserialize_with = "nullable::deserialize")]
    pub owner: String,
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "String::is_empty")]
    pub contact_email: String,
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "String::is_empty")]
    pub contact_chat: String,
    /// Address alert notifications are mailed to
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "String::is_empty")]
    pub alert_email: String,
    /// Endpoint alert notifications are posted to
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    /// Skip TLS certificate verification for `webhook_url`
    #[serde(default, deserialize_with = "nullable::deserialize", skip_serializing_if = "std::ops::Not::not")]
    pub insecure_skip_verify: bool,
}

impl Service {
    /// Create a service with only an owner set
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Default::default()
        }
    }

    /// Set the alert email address
    pub fn with_alert_email(mut self, email: impl Into<String>) -> Self {
        self.alert_email = email.into();
        self
    }

    /// Set the webhook URL and its TLS verification mode
    pub fn with_webhook(mut self, url: impl Into<String>, insecure_skip_verify: bool) -> Self {
        self.webhook_url = url.into();
        self.insecure_skip_verify = insecure_skip_verify;
        self
    }

    pub fn has_alert_email(&self) -> bool {
        !self.alert_email.is_empty()
    }

    pub fn has_webhook(&self) -> bool {
        !self.webhook_url.is_empty()
    }
}

/// All services known to the registry
///
/// Backed by a sorted map so generated files list services in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRegistry {
    #[serde(default, deserialize_with = "unique_services::deserialize")]
    pub services: BTreeMap<String, Service>,
}

impl ServiceRegistry {
    /// Parse a registry document
    ///
    /// Blank input yields an empty registry.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Parse a registry document from raw bytes
    ///
    /// Content that is not valid UTF-8 is a parse error.
    pub fn from_yaml_slice(content: &[u8]) -> Result<Self, serde_yaml::Error> {
        let content = std::str::from_utf8(content).map_err(serde_yaml::Error::custom)?;
        Self::from_yaml_str(content)
    }

    /// Add or replace a service
    pub fn insert(&mut self, name: impl Into<String>, service: Service) -> Option<Service> {
        self.services.insert(name.into(), service)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Services in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Service)> {
        self.services.iter().map(|(name, service)| (name.as_str(), service))
    }
}

/// Treats an explicit YAML `null` as the field's default value
mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Services mapping that rejects a name defined more than once
mod unique_services {
    use std::collections::BTreeMap;
    use std::fmt;

    use serde::de::{Error, MapAccess, Visitor};
    use serde::{Deserialize, Deserializer};

    use super::Service;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, Service>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<UniqueServices>::deserialize(deserializer)?
            .map(|services| services.0)
            .unwrap_or_default())
    }

    struct UniqueServices(BTreeMap<String, Service>);

    impl<'de> Deserialize<'de> for UniqueServices {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(ServicesVisitor)
        }
    }

    struct ServicesVisitor;

    impl<'de> Visitor<'de> for ServicesVisitor {
        type Value = UniqueServices;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping of service names to services")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut services = BTreeMap::new();
            while let Some((name, service)) = map.next_entry::<String, Service>()? {
                if services.contains_key(&name) {
                    return Err(A::Error::custom(format!("service {:?} defined more than once", name)));
                }
                services.insert(name, service);
            }
            Ok(UniqueServices(services))
        }
    }
}
