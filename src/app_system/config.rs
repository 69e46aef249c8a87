use serde::Deserialize;
use std::path::Path;

/// Runtime settings, read from a TOML file.
///
/// ```toml
/// channel_buffer = 64
/// log_filter = "homecook_market=debug"
///
/// [discovery]
/// default_radius_km = 5.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Mailbox size of every resource actor.
    pub channel_buffer: usize,
    /// Filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// 0 means any distance.
    pub default_radius_km: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            log_filter: "info".to_string(),
            discovery: DiscoveryConfig::default(),
        }
    }
}

impl MarketConfig {
    /// Defaults when the file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Self::default();
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    // tokio rejects a zero-capacity mpsc channel
    fn sanitized(mut self) -> Self {
        self.channel_buffer = self.channel_buffer.max(1);
        self
    }
}
