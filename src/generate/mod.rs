//! Derives Alertmanager receivers and routes from the service registry

pub mod receivers;
pub mod routes;
pub mod url;

pub use receivers::generate_receivers;
pub use routes::generate_routes;
pub use url::{IdentityResolver, UrlResolver};
