use std::env;

use crate::scoring::StrategyKind;

pub const DEFAULT_SERVICE_NAME: &str = "lambda-model";

/// Runtime tag reported by the `status` action.
pub const RUNTIME: &str = "provided.al2023";

/// Per-invocation configuration. Built fresh on every request so a change to
/// `LAMBDA_HEALTHY` takes effect without a cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub healthy: bool,
    pub strategy: StrategyKind,
    pub service_name: String,
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            healthy: true,
            strategy: StrategyKind::default(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let healthy = lookup("LAMBDA_HEALTHY")
            .is_none_or(|v| v.eq_ignore_ascii_case("true"));

        let strategy = match lookup("SCORING_STRATEGY") {
            Some(raw) => raw
                .parse::<StrategyKind>()
                .map_err(|e| format!("SCORING_STRATEGY: {}", e))?,
            None => StrategyKind::default(),
        };

        let service_name = lookup("SERVICE_NAME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        Ok(Self {
            healthy,
            strategy,
            service_name,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
