use anyhow::Context;
use std::net::SocketAddr;
use types::METHODOLOGY_VERSION;

/// Environment variable overriding the listen address
pub const BIND_ADDR_VAR: &str = "BRA_BIND_ADDR";
/// Environment variable overriding the methodology revision stamped on records
pub const METHODOLOGY_VERSION_VAR: &str = "BRA_METHODOLOGY_VERSION";

/// Gateway configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub methodology_version: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            methodology_version: METHODOLOGY_VERSION.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("{BIND_ADDR_VAR}={addr:?} is not a socket address"))?;
        }
        if let Some(version) = lookup(METHODOLOGY_VERSION_VAR) {
            let version = version.trim();
            if version.is_empty() {
                anyhow::bail!("{METHODOLOGY_VERSION_VAR} must not be empty");
            }
            config.methodology_version = version.to_string();
        }

        Ok(config)
    }
}
