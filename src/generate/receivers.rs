//! Receiver generation

use super::url::UrlResolver;
use crate::alertmanager::{email_receiver_name, webhook_receiver_name, Receiver, DEFAULT_RECEIVER};
use crate::registry::ServiceRegistry;

/// Build the receiver list for every service in the registry
///
/// A service gets one receiver per configured channel (email, webhook) and
/// none if it has neither. The fallback receiver mailing
/// `orphan_alert_email` is always appended last.
pub fn generate_receivers(
    registry: &ServiceRegistry,
    orphan_alert_email: &str,
    resolver: &dyn UrlResolver,
) -> Vec<Receiver> {
    let mut receivers = Vec::with_capacity(registry.len() * 2 + 1);

    for (name, service) in registry.iter() {
        if service.has_alert_email() {
            tracing::debug!(service = %name, to = %service.alert_email, "Email receiver");
            receivers.push(Receiver::email(email_receiver_name(name), &service.alert_email));
        }
        if service.has_webhook() {
            let url = resolver.resolve(&service.webhook_url);
            tracing::debug!(service = %name, url = %url, "Webhook receiver");
            receivers.push(Receiver::webhook(
                webhook_receiver_name(name),
                url,
                service.insecure_skip_verify,
            ));
        }
    }

    receivers.push(Receiver::email(DEFAULT_RECEIVER, orphan_alert_email));

    tracing::info!(
        receivers = receivers.len(),
        services = registry.len(),
        "Generated receivers"
    );

    receivers
}
