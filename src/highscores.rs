//! Best-score tracking
//!
//! One persisted value. Storage failures degrade to "no high score recorded"
//! and never abort a session.

use crate::persistence::{MemoryStorage, WordStorage};

/// The best score seen so far, backed by a [`WordStorage`]
#[derive(Debug, Clone)]
pub struct HighScore<S: WordStorage = MemoryStorage> {
    best: u32,
    storage: S,
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            best: 0,
            storage: MemoryStorage::new(),
        }
    }
}

impl<S: WordStorage> HighScore<S> {
    /// Load the stored value (0 when missing or unreadable)
    pub fn load(storage: S) -> Self {
        let best = match storage.read() {
            Ok(Some(best)) => {
                log::info!("Loaded high score {}", best);
                best
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("High score unreadable ({}), starting fresh", e);
                0
            }
        };
        Self { best, storage }
    }

    /// Current best score
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Check if a score would set a new record
    pub fn qualifies(&self, score: u64) -> bool {
        Self::clamp(score) > self.best
    }

    /// Record `score` if it beats the current best.
    ///
    /// Returns true when a new record was set. The in-memory best is updated
    /// even if the write fails; the failure is only logged.
    pub fn try_record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }

        self.best = Self::clamp(score);
        match self.storage.write(self.best) {
            Ok(()) => log::info!("New high score saved: {}", self.best),
            Err(e) => log::warn!("New high score {} not saved: {}", self.best, e),
        }
        true
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Scores wider than the stored word saturate
    fn clamp(score: u64) -> u32 {
        u32::try_from(score).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_score_sets_record() {
        let mut hs = HighScore::load(MemoryStorage::new());
        assert_eq!(hs.best(), 0);
        assert!(!hs.try_record(0));
        assert!(hs.try_record(1_200));
        assert_eq!(hs.best(), 1_200);
        assert_eq!(hs.storage().value(), Some(1_200));
    }

    #[test]
    fn test_lower_or_equal_score_is_not_a_record() {
        let mut hs = HighScore::load(MemoryStorage::with_value(5_000));
        assert!(!hs.try_record(4_999));
        assert!(!hs.try_record(5_000));
        assert!(hs.try_record(5_001));
    }

    #[test]
    fn test_write_failure_still_reports_record() {
        let mut storage = MemoryStorage::with_value(100);
        storage.set_read_only(true);
        let mut hs = HighScore::load(storage);
        assert!(hs.try_record(200));
        assert_eq!(hs.best(), 200);
        assert_eq!(hs.storage().value(), Some(100));
    }

    #[test]
    fn test_unreadable_file_degrades_to_no_record() {
        use crate::persistence::FileStorage;

        let path = std::env::temp_dir().join(format!(
            "meteor-defense-{}-short-highscore",
            std::process::id()
        ));
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let mut hs = HighScore::load(FileStorage::new(&path));
        assert_eq!(hs.best(), 0);
        assert!(hs.try_record(1));
        // The next write replaces the corrupt record
        assert!(matches!(hs.storage().read(), Ok(Some(1))));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_oversized_score_saturates() {
        let mut hs = HighScore::default();
        assert!(hs.try_record(u64::MAX));
        assert_eq!(hs.best(), u32::MAX);
        assert!(!hs.try_record(u64::from(u32::MAX) + 10));
    }
}
