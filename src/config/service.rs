//! Service configuration: bind address and dispatch policy.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::core::{DispatchError, DispatchPolicy};

/// Root service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Dispatch policy knobs.
    #[serde(default)]
    pub policy: DispatchPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:9091".to_string(),
            policy: DispatchPolicy::default(),
        }
    }
}

impl ServiceConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(format!("bind_addr `{}` is not a socket address", self.bind_addr));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from `CARPOOL_*` environment variables,
    /// falling back to defaults for anything unset.
    ///
    /// Recognized variables: `CARPOOL_BIND_ADDR` (socket address) and
    /// `CARPOOL_STRICT_ADD` (`1`/`true`/`yes` enables strict adds).
    pub fn from_env() -> Result<Self, DispatchError> {
        let mut cfg = Self::default();
        if let Ok(addr) = std::env::var("CARPOOL_BIND_ADDR") {
            cfg.bind_addr = addr;
        }
        if let Ok(strict) = std::env::var("CARPOOL_STRICT_ADD") {
            cfg.policy.strict_add = matches!(strict.trim(), "1" | "true" | "yes");
        }
        cfg.validate().map_err(DispatchError::Config)?;
        Ok(cfg)
    }
}
