use shared_types::{PortalConfig, PortalError};
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// `portal.toml`, baked into the binary so every platform sees the same
/// settings without touching the filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../portal.toml");

/// Parse a config document, falling back to defaults when it is malformed.
fn parse_or_default(contents: &str) -> PortalConfig {
    match PortalConfig::from_toml(contents) {
        Ok(config) => config,
        Err(e) => {
            report_invalid(&e);
            PortalConfig::default()
        }
    }
}

fn report_invalid(err: &PortalError) {
    tracing::warn!(error = %err, "portal.toml rejected, using built-in defaults");
}

/// Resolve the embedded config and store it in the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
pub fn load_portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| {
        let config = parse_or_default(EMBEDDED_CONFIG);
        tracing::info!(
            condominium = %config.condominium.name,
            sent_after_ms = config.panic.sent_after_ms,
            reset_after_ms = config.panic.reset_after_ms,
            "portal config loaded"
        );
        config
    })
}

/// The loaded config. Loads it on first use.
pub fn portal_config() -> &'static PortalConfig {
    load_portal_config()
}
