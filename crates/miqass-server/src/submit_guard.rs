use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

/// Remembers recently used contact-form tokens so a double-clicked or
/// re-posted form cannot reach the content API twice.
///
/// Each rendered form carries a fresh token; the first submit registers it
/// and later submits with the same token are answered without a new send.
/// Entries older than the TTL are dropped on every registration.
#[derive(Debug, Clone)]
pub struct SubmitGuard {
    ttl: Duration,
    state: Arc<Mutex<HashMap<String, Instant>>>,
}

impl SubmitGuard {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Registers `token` and reports whether it was fresh.
    ///
    /// Returns `false` when the token was already registered within the TTL,
    /// meaning the submission is a replay and must not be sent again. An
    /// empty token is never tracked and always counts as fresh.
    pub async fn register(&self, token: &str) -> bool {
        if token.is_empty() {
            return true;
        }

        let mut seen = self.state.lock().await;
        let now = Instant::now();
        seen.retain(|_, used_at| now.duration_since(*used_at) < self.ttl);

        match seen.entry(token.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(now);
                true
            }
        }
    }
}

/// Guard with the TTL used by the running site.
#[must_use]
pub fn default_submit_guard() -> SubmitGuard {
    SubmitGuard::new(Duration::from_secs(600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_registration_is_fresh() {
        let guard = SubmitGuard::new(Duration::from_secs(60));
        assert!(guard.register("token-a").await);
    }

    #[tokio::test]
    async fn replayed_token_is_rejected() {
        let guard = SubmitGuard::new(Duration::from_secs(60));
        assert!(guard.register("token-a").await);
        assert!(!guard.register("token-a").await);
    }

    #[tokio::test]
    async fn distinct_tokens_do_not_interfere() {
        let guard = SubmitGuard::new(Duration::from_secs(60));
        assert!(guard.register("token-a").await);
        assert!(guard.register("token-b").await);
    }

    #[tokio::test]
    async fn expired_tokens_are_forgotten() {
        let guard = SubmitGuard::new(Duration::from_millis(10));
        assert!(guard.register("token-a").await);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(guard.register("token-a").await);
    }

    #[tokio::test]
    async fn empty_token_is_never_tracked() {
        let guard = SubmitGuard::new(Duration::from_secs(60));
        assert!(guard.register("").await);
        assert!(guard.register("").await);
    }
}
