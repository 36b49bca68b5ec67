use std::env;
use std::time::Duration;

use crate::core::constants::providers;

/// Credential and model for one external repair provider. An empty
/// environment value counts as absent.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub model: String,
}

impl ProviderSettings {
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Everything the repair pipeline needs, resolved once at process start and
/// passed by value into the orchestrator. Core logic never reads the
/// environment itself.
#[derive(Debug, Clone)]
pub struct RepairSettings {
    pub openrouter: ProviderSettings,
    pub google: ProviderSettings,
    /// Per-provider HTTP timeout.
    pub request_timeout: Duration,
    /// Maximum total wait across all racing provider calls.
    pub combined_deadline: Duration,
}

impl RepairSettings {
    pub fn from_env() -> Self {
        Self {
            openrouter: ProviderSettings {
                api_key: non_empty_var(providers::OPENROUTER_API_KEY_VAR),
                model: non_empty_var(providers::OPENROUTER_MODEL_VAR)
                    .unwrap_or_else(|| providers::DEFAULT_OPENROUTER_MODEL.to_string()),
            },
            google: ProviderSettings {
                api_key: non_empty_var(providers::GOOGLE_API_KEY_VAR),
                model: non_empty_var(providers::GOOGLE_MODEL_VAR)
                    .unwrap_or_else(|| providers::DEFAULT_GOOGLE_MODEL.to_string()),
            },
            request_timeout: Duration::from_secs(15),
            combined_deadline: Duration::from_secs(20),
        }
    }

    /// Settings with no provider configured; repair falls straight back to
    /// heuristics. Used by tests and as the offline default.
    pub fn unconfigured() -> Self {
        Self {
            openrouter: ProviderSettings {
                api_key: None,
                model: providers::DEFAULT_OPENROUTER_MODEL.to_string(),
            },
            google: ProviderSettings {
                api_key: None,
                model: providers::DEFAULT_GOOGLE_MODEL.to_string(),
            },
            request_timeout: Duration::from_secs(15),
            combined_deadline: Duration::from_secs(20),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_settings_have_default_models() {
        let settings = RepairSettings::unconfigured();
        assert!(!settings.openrouter.is_configured());
        assert!(!settings.google.is_configured());
        assert_eq!(settings.openrouter.model, providers::DEFAULT_OPENROUTER_MODEL);
        assert_eq!(settings.google.model, providers::DEFAULT_GOOGLE_MODEL);
    }
}
