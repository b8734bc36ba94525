/// Caching for the AI dashboard summary.
///
/// Provides:
/// - Summary caching with 5-minute TTL
/// - Content hash-based keys so a changed visible set misses
/// - Explicit invalidation on data mutation
/// - Thread-safe access via Mutex
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use crate::domain::DashboardSummary;

struct CachedSummary {
    data: DashboardSummary,
    computed_at: SystemTime,
    view_hash: String,
}

/// Dashboard-summary cache with TTL-based expiration.
pub struct SummaryCache {
    slot: Mutex<Option<CachedSummary>>,
    ttl_seconds: u64,
}

impl SummaryCache {
    /// Create a cache with the default 5-minute TTL.
    pub fn new() -> Self {
        SummaryCache {
            slot: Mutex::new(None),
            ttl_seconds: 300,
        }
    }

    /// Create a cache with a custom TTL (for testing).
    pub fn with_ttl(ttl_seconds: u64) -> Self {
        SummaryCache {
            slot: Mutex::new(None),
            ttl_seconds,
        }
    }

    /// Get the cached summary if still valid (hash matches, not expired).
    pub fn get(&self, current_hash: &str) -> Option<DashboardSummary> {
        let slot = self.slot.lock().unwrap();
        if let Some(cached) = slot.as_ref() {
            if cached.view_hash != current_hash {
                return None;
            }

            let age = SystemTime::now()
                .duration_since(cached.computed_at)
                .unwrap_or(Duration::from_secs(self.ttl_seconds + 1));

            if age.as_secs() < self.ttl_seconds {
                return Some(cached.data.clone());
            }
        }
        None
    }

    /// Store a summary computed for the given visible-set hash.
    pub fn set(&self, summary: DashboardSummary, view_hash: String) {
        let mut slot = self.slot.lock().unwrap();
        *slot = Some(CachedSummary {
            data: summary,
            computed_at: SystemTime::now(),
            view_hash,
        });
    }

    /// Drop the cached summary (call on data mutation).
    pub fn invalidate(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 over the visible incident ids, newline-separated so id
/// concatenation cannot collide across different splits.
pub fn visible_set_hash(incident_ids: &[String]) -> String {
    use hex::encode;
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    for id in incident_ids {
        hasher.update(id.as_bytes());
        hasher.update(b"\n");
    }
    encode(hasher.finalize())
}
