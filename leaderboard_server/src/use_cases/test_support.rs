use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::LeaderboardEntry;
use crate::domain::ports::{Clock, LeaderboardStore};

pub(crate) type EntryTable = Arc<Mutex<Vec<LeaderboardEntry>>>;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_millis(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub load: bool,
    pub save: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    entries: EntryTable,
    saves: Arc<Mutex<usize>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            saves: Arc::new(Mutex::new(0)),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn with_entries(self, entries: Vec<LeaderboardEntry>) -> Self {
        *self.entries.lock().expect("entries mutex poisoned") = entries;
        self
    }

    pub(crate) fn entries(&self) -> Vec<LeaderboardEntry> {
        self.entries.lock().expect("entries mutex poisoned").clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        *self.saves.lock().expect("saves mutex poisoned")
    }
}

pub(crate) fn test_entry(name: &str, score: u64, timestamp: u64) -> LeaderboardEntry {
    LeaderboardEntry {
        player_name: name.to_string(),
        score,
        wave: 1,
        timestamp,
        id: format!("{name}-{timestamp}"),
    }
}

#[async_trait]
impl LeaderboardStore for RecordingStore {
    async fn load(&self) -> Result<Vec<LeaderboardEntry>, String> {
        if self.failures.load {
            return Err("load failed".to_string());
        }

        Ok(self.entries())
    }

    async fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), String> {
        if self.failures.save {
            return Err("save failed".to_string());
        }

        *self.entries.lock().expect("entries mutex poisoned") = entries.to_vec();
        *self.saves.lock().expect("saves mutex poisoned") += 1;
        Ok(())
    }
}
