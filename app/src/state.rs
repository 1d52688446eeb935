//! Three-state view model for the dashboard.
//!
//! The board is always in exactly one of loading, error, or loaded.
//! Transitions happen only through [`BoardState::refresh`], which is the
//! data fetcher boundary: every retrieval failure is caught here and
//! becomes the error state, never a propagated error.

use rsvp_core::{ResponseRecord, RsvpApi, StatsSummary};
use tracing::{debug, info, warn};

/// Static user-facing message for any retrieval failure.
pub const FETCH_ERROR_MESSAGE: &str =
    "Erro ao carregar os dados. Verifique se o servidor está rodando.";

/// Mutually exclusive view states of the board.
#[derive(Debug, Clone)]
pub enum BoardState {
    Loading,
    Error(String),
    Loaded {
        responses: Vec<ResponseRecord>,
        stats: StatsSummary,
    },
}

impl BoardState {
    /// Refresh from the API: enter loading, issue both fetches
    /// concurrently, then settle in loaded or error.
    ///
    /// Re-invocable; a repeated call is a plain refresh. On failure any
    /// previously loaded data is dropped along with the in-flight
    /// results.
    pub async fn refresh<P: RsvpApi>(&mut self, api: &P) {
        *self = Self::Loading;

        match api.fetch_all().await {
            Ok((responses, stats)) => {
                // Stats are server-computed and trusted as-is; a mismatch
                // is only worth a log line.
                let listed = u64::try_from(responses.len()).unwrap_or(u64::MAX);
                if stats.total_responses != listed {
                    debug!(
                        "Stats disagree with response list: totalResponses={}, listed={listed}",
                        stats.total_responses
                    );
                }

                info!("Loaded {} response records", responses.len());
                *self = Self::Loaded { responses, stats };
            }
            Err(e) => {
                warn!("Data retrieval failed: {e}");
                *self = Self::Error(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Failure is injected on the stats endpoint; either fetch failing
    /// must discard both results.
    #[derive(Default)]
    struct MockApi {
        fail_stats: AtomicBool,
        response_calls: AtomicUsize,
        stats_calls: AtomicUsize,
    }

    #[async_trait]
    impl RsvpApi for MockApi {
        async fn fetch_responses(&self) -> anyhow::Result<Vec<ResponseRecord>> {
            self.response_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![ResponseRecord {
                name: Some("Maria".to_string()),
                ..ResponseRecord::default()
            }])
        }

        async fn fetch_stats(&self) -> anyhow::Result<StatsSummary> {
            self.stats_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_stats.load(Ordering::SeqCst) {
                anyhow::bail!("connection refused");
            }
            Ok(StatsSummary {
                total_responses: 1,
                confirmed_presence: 1,
                with_children: 0,
                total_people: 2,
            })
        }
    }

    #[tokio::test]
    async fn successful_refresh_lands_in_loaded() {
        let api = MockApi::default();
        let mut state = BoardState::Loading;

        state.refresh(&api).await;

        let BoardState::Loaded { responses, stats } = state else {
            panic!("expected loaded state");
        };
        assert_eq!(responses.len(), 1);
        assert_eq!(stats.total_people, 2);
    }

    #[tokio::test]
    async fn failed_refresh_lands_in_error_with_static_message() {
        let api = MockApi::default();
        api.fail_stats.store(true, Ordering::SeqCst);
        let mut state = BoardState::Loading;

        state.refresh(&api).await;

        let BoardState::Error(message) = state else {
            panic!("expected error state");
        };
        assert_eq!(message, FETCH_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn retry_reissues_both_fetches_and_recovers() {
        let api = MockApi::default();
        api.fail_stats.store(true, Ordering::SeqCst);
        let mut state = BoardState::Loading;

        state.refresh(&api).await;
        assert!(matches!(state, BoardState::Error(_)));

        api.fail_stats.store(false, Ordering::SeqCst);
        state.refresh(&api).await;

        assert!(matches!(state, BoardState::Loaded { .. }));
        assert_eq!(api.response_calls.load(Ordering::SeqCst), 2);
        assert_eq!(api.stats_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn refresh_after_loaded_replaces_the_data() {
        let api = MockApi::default();
        let mut state = BoardState::Loading;

        state.refresh(&api).await;
        state.refresh(&api).await;

        let BoardState::Loaded { responses, .. } = state else {
            panic!("expected loaded state");
        };
        assert_eq!(responses.len(), 1);
        assert_eq!(api.response_calls.load(Ordering::SeqCst), 2);
    }
}
