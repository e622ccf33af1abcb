use crate::error::PortalError;
use crate::panic::PanicTimings;
use serde::Deserialize;
use std::time::Duration;

/// Who and where the portal is showing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CondominiumConfig {
    pub name: String,
    pub resident: String,
    pub unit: String,
    pub pending_packages: u32,
}

impl Default for CondominiumConfig {
    fn default() -> Self {
        Self {
            name: "Condomínio CH7".to_string(),
            resident: "João".to_string(),
            unit: "Morador - Bloco A".to_string(),
            pending_packages: 2,
        }
    }
}

/// External assets declared once at bootstrap.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    pub logo_url: String,
    pub font_stylesheet: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            logo_url: "/assets/icons/logo.png".to_string(),
            font_stylesheet:
                "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700&display=swap"
                    .to_string(),
        }
    }
}

/// Panic cycle delays in milliseconds, measured from confirmation.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PanicConfig {
    pub sent_after_ms: u64,
    pub reset_after_ms: u64,
}

impl Default for PanicConfig {
    fn default() -> Self {
        Self {
            sent_after_ms: 2000,
            reset_after_ms: 3500,
        }
    }
}

impl PanicConfig {
    pub fn timings(&self) -> PanicTimings {
        PanicTimings::new(
            Duration::from_millis(self.sent_after_ms),
            Duration::from_millis(self.reset_after_ms),
        )
    }
}

/// Top-level structure of `portal.toml`. Every field is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PortalConfig {
    pub condominium: CondominiumConfig,
    pub assets: AssetConfig,
    pub panic: PanicConfig,
}

impl PortalConfig {
    pub fn from_toml(contents: &str) -> Result<Self, PortalError> {
        Ok(toml::from_str(contents)?)
    }

    /// Highlighted count in the greeting banner; `None` when nothing waits.
    pub fn pending_packages_label(&self) -> Option<String> {
        match self.condominium.pending_packages {
            0 => None,
            1 => Some("1 encomenda".to_string()),
            n => Some(format!("{n} encomendas")),
        }
    }
}
