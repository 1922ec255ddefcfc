//! Keyed store for cleaned payloads awaiting retrieval.
//!
//! `POST /clean` stashes the serialized cleaned file here under a fresh
//! session id; `GET /download` takes it back out exactly once. Entries also
//! expire after a TTL so abandoned sessions do not accumulate.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::cleaning::CleanSummary;

/// One cleaned payload held for retrieval.
#[derive(Debug, Clone)]
pub struct CleanedFile {
    /// Download filename (`cleaned_` + original name).
    pub filename: String,
    /// Serialized cleaned CSV.
    pub bytes: Vec<u8>,
    /// Summary of the cleaning run that produced the payload.
    pub summary: CleanSummary,
}

#[derive(Debug)]
struct StoredEntry {
    payload: CleanedFile,
    stored_at: Instant,
}

/// Session-keyed result store with TTL purge and single-use retrieval.
#[derive(Debug)]
pub struct ResultStore {
    ttl: Duration,
    entries: Mutex<HashMap<Uuid, StoredEntry>>,
}

impl ResultStore {
    /// Create a store whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Store a payload under a fresh session id, purging expired entries
    /// first.
    pub fn put(&self, payload: CleanedFile) -> Uuid {
        let now = Instant::now();
        let mut entries = self.lock();
        Self::purge_expired(&mut entries, now, self.ttl);
        let id = Uuid::new_v4();
        entries.insert(
            id,
            StoredEntry {
                payload,
                stored_at: now,
            },
        );
        id
    }

    /// Take a payload out of the store. Single-use: a successful take
    /// removes the entry, and expired entries are treated as absent.
    pub fn take(&self, id: &Uuid) -> Option<CleanedFile> {
        let now = Instant::now();
        let mut entries = self.lock();
        Self::purge_expired(&mut entries, now, self.ttl);
        entries.remove(id).map(|entry| entry.payload)
    }

    /// Number of payloads currently pending retrieval.
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, StoredEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn purge_expired(entries: &mut HashMap<Uuid, StoredEntry>, now: Instant, ttl: Duration) {
        entries.retain(|_, entry| now.duration_since(entry.stored_at) < ttl);
    }
}
