//! Store-assigned document keys.
//!
//! A key is 12 bytes: seconds since the epoch (4), a per-process tag (4)
//! and a process-wide counter (4), rendered with the URL-safe base64
//! alphabet. The tag mixes the pid with the sub-second start time, so
//! processes sharing a pid (one per container) still get distinct tags.
//! Keys are unique per process and roughly ordered by time.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

static COUNTER: AtomicU32 = AtomicU32::new(0);
static PROCESS_TAG: OnceLock<u32> = OnceLock::new();

fn process_tag() -> u32 {
    *PROCESS_TAG.get_or_init(|| {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        std::process::id().rotate_left(16) ^ nanos
    })
}

/// Opaque identifier assigned by a store when a document is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreKey(String);

impl StoreKey {
    /// Generate a fresh key.
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..8].copy_from_slice(&process_tag().to_be_bytes());
        bytes[8..].copy_from_slice(&count.to_be_bytes());

        StoreKey(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Wrap a key read back from storage.
    pub fn from_stored(raw: impl Into<String>) -> Self {
        StoreKey(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
