use std::time::Duration;

use crate::{error::config::ConfigError, service::poll::StalePolicy};

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Client configuration.
///
/// The only value most deployments set is the API base URL; the timings exist so tests and
/// kiosks can tune them.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    /// Dashboard refresh interval (milliseconds).
    pub poll_interval_ms: u64,
    /// How long error and success notices stay visible (milliseconds).
    pub notice_dismiss_ms: u64,
    /// How long the success notice is shown before the form closes (milliseconds).
    pub success_close_ms: u64,
    pub stale_policy: StalePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_interval_ms: 3000,
            notice_dismiss_ms: 4000,
            success_close_ms: 2000,
            stale_policy: StalePolicy::ClearOnError,
        }
    }
}

impl Config {
    /// Configuration baked in at compile time.
    ///
    /// Browser builds have no process environment, so `TIREFLOW_API_BASE_URL` is read when the
    /// crate is compiled.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("TIREFLOW_API_BASE_URL") {
            config.api_base_url = normalize_base_url(url);
        }
        config
    }

    /// Configuration from the process environment, loading `.env` first if present.
    ///
    /// Unset variables keep their defaults; set but malformed values are an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Configuration for the current target.
    ///
    /// Native builds fall back to the compiled-in configuration when the environment is
    /// invalid, logging why.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_build_env()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_env().unwrap_or_else(|e| {
                dioxus_logger::tracing::error!("Invalid configuration, using defaults: {}", e);
                Self::from_build_env()
            })
        }
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_build_env();

        if let Some(url) = lookup("TIREFLOW_API_BASE_URL") {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidEnvValue {
                    var: "TIREFLOW_API_BASE_URL".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            config.api_base_url = normalize_base_url(&url);
        }
        if let Some(ms) = parse_millis(&lookup, "TIREFLOW_POLL_INTERVAL_MS")? {
            config.poll_interval_ms = ms;
        }
        if let Some(ms) = parse_millis(&lookup, "TIREFLOW_NOTICE_DISMISS_MS")? {
            config.notice_dismiss_ms = ms;
        }
        if let Some(ms) = parse_millis(&lookup, "TIREFLOW_SUCCESS_CLOSE_MS")? {
            config.success_close_ms = ms;
        }
        if let Some(policy) = lookup("TIREFLOW_STALE_POLICY") {
            config.stale_policy = match policy.as_str() {
                "clear" => StalePolicy::ClearOnError,
                "keep" => StalePolicy::KeepLast,
                other => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "TIREFLOW_STALE_POLICY".to_string(),
                        reason: format!("expected \"clear\" or \"keep\", got {:?}", other),
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn notice_dismiss(&self) -> Duration {
        Duration::from_millis(self.notice_dismiss_ms)
    }

    pub fn success_close(&self) -> Duration {
        Duration::from_millis(self.success_close_ms)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_millis<F>(lookup: &F, var: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(ms) => Ok(Some(ms)),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
