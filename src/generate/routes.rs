//! Route generation

use crate::alertmanager::{email_receiver_name, webhook_receiver_name, Route};
use crate::registry::ServiceRegistry;

/// Build one `service="<name>"` route per configured channel of each service
///
/// Mirrors the receiver membership test so every route targets a generated
/// receiver. The fallback receiver is reached through the root route's
/// default and gets no route of its own.
pub fn generate_routes(registry: &ServiceRegistry) -> Vec<Route> {
    let mut routes = Vec::with_capacity(registry.len() * 2);

    for (name, service) in registry.iter() {
        if service.has_alert_email() {
            routes.push(Route::for_service(name, email_receiver_name(name)));
        }
        if service.has_webhook() {
            routes.push(Route::for_service(name, webhook_receiver_name(name)));
        }
    }

    tracing::info!(routes = routes.len(), "Generated routes");

    routes
}
