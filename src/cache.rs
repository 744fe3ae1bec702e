//! Metadata cache seam

use crate::resolver::models::VideoMetadata;
use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value store for resolved metadata, keyed by video ID.
///
/// The resolver consults it before fetching and populates it only after a
/// fully successful resolution; error outcomes are never cached. Whether
/// concurrent lookups for the same ID are coalesced is the implementation's
/// business, not the resolver's.
pub trait MetadataCache: Send + Sync {
    fn get(&self, id: &str) -> Option<VideoMetadata>;
    fn put(&self, id: &str, info: &VideoMetadata);
}

/// In-process cache backed by a mutex-guarded map. Entries never expire;
/// callers that care about stream-URL expiry should check
/// `expires_in_seconds` themselves.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, VideoMetadata>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MetadataCache for MemoryCache {
    fn get(&self, id: &str) -> Option<VideoMetadata> {
        let entries = self.entries.lock().ok()?;
        entries.get(id).cloned()
    }

    fn put(&self, id: &str, info: &VideoMetadata) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(id.to_string(), info.clone());
        }
    }
}
