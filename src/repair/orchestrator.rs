use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, warn};

use crate::config::RepairSettings;
use crate::core::constants::providers::HEURISTIC;
use crate::core::constants::repair_markers;
use crate::core::types::{Issue, Language, RepairAttempt, RepairOutcome, RepairSource};
use crate::error::ProviderError;
use crate::repair::heuristic::HeuristicFix;
use crate::repair::providers::{
    error_summary, GoogleProvider, OpenRouterProvider, RepairProvider,
};

/// One of the two known provider positions. `provider` is `None` when the
/// credential is absent; the slot is then recorded as skipped without being
/// invoked.
pub struct ProviderSlot {
    pub source: RepairSource,
    pub provider: Option<Arc<dyn RepairProvider>>,
}

impl ProviderSlot {
    pub fn configured(provider: Arc<dyn RepairProvider>) -> Self {
        Self {
            source: provider.source(),
            provider: Some(provider),
        }
    }

    pub fn unconfigured(source: RepairSource) -> Self {
        Self {
            source,
            provider: None,
        }
    }
}

/// Races the configured repair providers and falls back to the heuristic
/// result. Invoked only when heuristic repair left at least one Error.
pub struct FallbackOrchestrator {
    slots: Vec<ProviderSlot>,
    request_timeout: Duration,
    combined_deadline: Duration,
}

impl FallbackOrchestrator {
    pub fn new(
        slots: Vec<ProviderSlot>,
        request_timeout: Duration,
        combined_deadline: Duration,
    ) -> Self {
        Self {
            slots,
            request_timeout,
            combined_deadline,
        }
    }

    /// Wire up the two known providers from resolved settings. A provider
    /// without a credential stays an unconfigured slot.
    pub fn from_settings(settings: &RepairSettings) -> Self {
        let any_configured =
            settings.openrouter.is_configured() || settings.google.is_configured();
        let client = if !any_configured {
            None
        } else {
            match reqwest::Client::builder()
                .timeout(settings.request_timeout)
                .build()
            {
                Ok(client) => Some(client),
                Err(err) => {
                    warn!(error = %err, "failed to build HTTP client; providers disabled");
                    None
                }
            }
        };

        let openrouter = match (&settings.openrouter.api_key, &client) {
            (Some(key), Some(client)) => {
                ProviderSlot::configured(Arc::new(OpenRouterProvider::new(
                    client.clone(),
                    key.clone(),
                    settings.openrouter.model.clone(),
                )))
            }
            _ => ProviderSlot::unconfigured(RepairSource::OpenRouter),
        };
        let google = match (&settings.google.api_key, &client) {
            (Some(key), Some(client)) => ProviderSlot::configured(Arc::new(GoogleProvider::new(
                client.clone(),
                key.clone(),
                settings.google.model.clone(),
            ))),
            _ => ProviderSlot::unconfigured(RepairSource::Google),
        };

        Self::new(
            vec![openrouter, google],
            settings.request_timeout,
            settings.combined_deadline,
        )
    }

    /// Race the configured providers; first completion whose output is
    /// usable wins and the rest are cancelled best-effort. Every resolution
    /// lands in the attempts trail in arrival order. With no acceptance by
    /// the combined deadline (or nothing configured at all) the heuristic
    /// result is returned as-is.
    pub async fn resolve(
        &self,
        code: &str,
        language: Language,
        errors: &[Issue],
        heuristic: HeuristicFix,
    ) -> RepairOutcome {
        let mut attempts = Vec::new();
        let mut abort_handles = Vec::new();
        let mut in_flight = FuturesUnordered::new();

        for slot in &self.slots {
            let provider = match &slot.provider {
                Some(provider) => Arc::clone(provider),
                None => {
                    attempts.push(RepairAttempt::skipped(
                        slot.source.as_str(),
                        repair_markers::MISSING_CREDENTIAL,
                    ));
                    continue;
                }
            };
            let source = slot.source;
            let code = code.to_string();
            let summary = error_summary(errors);
            let request_timeout = self.request_timeout;
            let handle = tokio::spawn(async move {
                let result = tokio::time::timeout(
                    request_timeout,
                    provider.submit_repair(&code, language, &summary),
                )
                .await;
                let outcome = match result {
                    Ok(Ok(text)) => Ok(text),
                    Ok(Err(err)) => Err(err.to_string()),
                    Err(_) => Err(ProviderError::Timeout(request_timeout).to_string()),
                };
                (source, outcome)
            });
            abort_handles.push(handle.abort_handle());
            in_flight.push(handle);
        }

        let accepted = if in_flight.is_empty() {
            None
        } else {
            let race = async {
                while let Some(joined) = in_flight.next().await {
                    match joined {
                        Ok((source, Ok(text))) => {
                            if accepts(&text, code) {
                                return Some((source, text));
                            }
                            debug!(source = %source, "provider declined (empty or unchanged)");
                            attempts.push(RepairAttempt::skipped(
                                source.as_str(),
                                repair_markers::NO_RESULT,
                            ));
                        }
                        Ok((source, Err(message))) => {
                            warn!(source = %source, error = %message, "provider call failed");
                            attempts.push(RepairAttempt::skipped(source.as_str(), message));
                        }
                        Err(join_err) => {
                            warn!(error = %join_err, "repair task failed");
                        }
                    }
                }
                None
            };
            tokio::time::timeout(self.combined_deadline, race)
                .await
                .unwrap_or_default()
        };

        // Stop the losers; their results, if any still arrive, are ignored.
        for handle in &abort_handles {
            handle.abort();
        }

        match accepted {
            Some((source, fixed_code)) => {
                attempts.push(RepairAttempt::applied(source.as_str()));
                RepairOutcome {
                    fixed_code,
                    changes: vec![repair_markers::AI_FIX_APPLIED.to_string()],
                    source,
                    attempts,
                }
            }
            None => {
                attempts.push(RepairAttempt {
                    provider: HEURISTIC.to_string(),
                    applied: !heuristic.changes.is_empty(),
                    error: None,
                });
                let changes = if heuristic.changes.is_empty() {
                    vec![repair_markers::NO_CHANGES.to_string()]
                } else {
                    heuristic.changes
                };
                RepairOutcome {
                    fixed_code: heuristic.fixed_code,
                    changes,
                    source: RepairSource::Heuristic,
                    attempts,
                }
            }
        }
    }
}

/// A completion is usable when it is non-empty and textually different from
/// the original input.
fn accepts(candidate: &str, original: &str) -> bool {
    !candidate.is_empty() && candidate != original
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceptance_requires_non_empty_and_different() {
        assert!(accepts("fixed", "broken"));
        assert!(!accepts("", "broken"));
        assert!(!accepts("broken", "broken"));
    }
}
