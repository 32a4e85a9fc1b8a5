//! Webhook URL resolution

/// Maps a registry webhook URL to the URL written into the receiver
pub trait UrlResolver {
    fn resolve(&self, raw: &str) -> String;
}

/// Writes registry URLs through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl UrlResolver for IdentityResolver {
    fn resolve(&self, raw: &str) -> String {
        raw.to_string()
    }
}
