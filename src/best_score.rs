//! Best score tracking
//!
//! A single number persisted through the key-value store.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::KeyValueStore;

/// Best score seen across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "snake_best_score";

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Check if a score beats the stored best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.value
    }

    /// Take `score` as the new best if it qualifies. Returns whether it did.
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.value = score;
        true
    }

    /// Load from storage, defaulting to 0 when absent or unreadable
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<BestScore>(&raw) {
                Ok(best) => {
                    log::info!("Loaded best score {}", best.value);
                    best
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable best score {raw:?}: {e}");
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read best score: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        let json = serde_json::to_string(self)?;
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Best score saved ({})", self.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_record_only_beats() {
        let mut best = BestScore::new(5);
        assert!(!best.record(5));
        assert!(!best.record(3));
        assert!(best.record(6));
        assert_eq!(best.value, 6);
    }

    #[test]
    fn test_load_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(BestScore::load(&store).value, 0);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        BestScore::new(12).save(&mut store).unwrap();
        assert_eq!(
            store.get(BestScore::STORAGE_KEY).unwrap().as_deref(),
            Some("12")
        );
        assert_eq!(BestScore::load(&store).value, 12);
    }

    #[test]
    fn test_load_garbage_is_zero() {
        let mut store = MemoryStore::new();
        store.set(BestScore::STORAGE_KEY, "not a number").unwrap();
        assert_eq!(BestScore::load(&store), BestScore::default());
    }
}
