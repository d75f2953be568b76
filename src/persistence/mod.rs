//! Best score / total coins persistence
//!
//! Features:
//! - Two-field JSON record (`bestScore`, `totalCoins`)
//! - Missing or unreadable file loads as zeros
//! - Every mutation is written through immediately (tmp → rename)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    pub best_score: u32,
    pub total_coins: u32,
}

/// Persistence gateway used by the run controller at the end of a run
pub trait ScoreStore {
    /// Current record
    fn record(&self) -> Record;

    /// Raise the best score if `score` beats it. Returns true when it did.
    fn submit_best(&mut self, score: u32) -> Result<bool, PersistenceError>;

    /// Add to the lifetime coin total
    fn add_coins(&mut self, amount: u32) -> Result<(), PersistenceError>;
}

impl Record {
    /// Apply a best-score candidate, returning whether it was a new best
    fn apply_best(&mut self, score: u32) -> bool {
        if score > self.best_score {
            self.best_score = score;
            true
        } else {
            false
        }
    }
}

/// File-backed store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    record: Record,
}

impl FileStore {
    /// Load the record at `path`, falling back to zeros
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = Self::load(&path);
        Self { path, record }
    }

    fn load(path: &Path) -> Record {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No save file found, starting fresh");
                return Record::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}, starting fresh", path.display(), e);
                return Record::default();
            }
        };

        match serde_json::from_str::<Record>(&json) {
            Ok(record) => {
                log::info!(
                    "Loaded game data: best score {}, total coins {}",
                    record.best_score,
                    record.total_coins
                );
                record
            }
            Err(e) => {
                log::warn!(
                    "Corrupt save file {}: {}, starting fresh",
                    path.display(),
                    e
                );
                Record::default()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the record through a temp file so a crash never leaves a torn save
    pub fn save(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&self.record)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Game data saved to {}", self.path.display());
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn record(&self) -> Record {
        self.record
    }

    fn submit_best(&mut self, score: u32) -> Result<bool, PersistenceError> {
        if !self.record.apply_best(score) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn add_coins(&mut self, amount: u32) -> Result<(), PersistenceError> {
        self.record.total_coins = self.record.total_coins.saturating_add(amount);
        self.save()
    }
}

/// In-memory store (tests, no-save sessions)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub record: Record,
    /// Number of write-throughs performed
    pub writes: usize,
}

impl MemoryStore {
    pub fn new(record: Record) -> Self {
        Self { record, writes: 0 }
    }
}

impl ScoreStore for MemoryStore {
    fn record(&self) -> Record {
        self.record
    }

    fn submit_best(&mut self, score: u32) -> Result<bool, PersistenceError> {
        let improved = self.record.apply_best(score);
        if improved {
            self.writes += 1;
        }
        Ok(improved)
    }

    fn add_coins(&mut self, amount: u32) -> Result<(), PersistenceError> {
        self.record.total_coins = self.record.total_coins.saturating_add(amount);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_score_never_decreases() {
        let mut store = MemoryStore::default();
        assert!(store.submit_best(5).unwrap());
        assert!(!store.submit_best(3).unwrap());
        assert_eq!(store.record().best_score, 5);
        assert!(!store.submit_best(5).unwrap());
    }

    #[test]
    fn test_add_coins_accumulates() {
        let mut store = MemoryStore::new(Record {
            best_score: 0,
            total_coins: 10,
        });
        store.add_coins(3).unwrap();
        store.add_coins(4).unwrap();
        assert_eq!(store.record().total_coins, 17);
        assert_eq!(store.writes, 2);
    }

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("gamedata.json"));
        assert_eq!(store.record(), Record::default());
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamedata.json");
        fs::write(&path, "{ not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.record(), Record::default());
    }

    #[test]
    fn test_file_store_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamedata.json");

        let mut store = FileStore::open(&path);
        assert!(store.submit_best(5).unwrap());
        assert!(!store.submit_best(3).unwrap());
        store.add_coins(3).unwrap();
        store.add_coins(4).unwrap();

        // Reopen from disk
        let reopened = FileStore::open(&path);
        assert_eq!(
            reopened.record(),
            Record {
                best_score: 5,
                total_coins: 7
            }
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_record_format() {
        let record = Record {
            best_score: 12,
            total_coins: 40,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"bestScore":12,"totalCoins":40}"#);

        // Unknown and missing fields are tolerated
        let partial: Record =
            serde_json::from_str(r#"{"bestScore": 9, "selectedCharacter": 2}"#).unwrap();
        assert_eq!(partial.best_score, 9);
        assert_eq!(partial.total_coins, 0);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the save file should be makes the rename fail
        let path = dir.path().join("blocked");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut store = FileStore::open(&path);
        assert!(store.add_coins(1).is_err());
        // The in-memory record still moved forward
        assert_eq!(store.record().total_coins, 1);
    }
}
