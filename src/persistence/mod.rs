//! Best score persistence
//!
//! The simulation only announces new bests through events; the host owns a
//! [`BestScoreStore`] and forwards those events here. Storage failures are
//! logged and otherwise ignored, so the best score simply stays session-local.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Errors from best score or config storage
#[derive(Debug)]
pub enum PersistError {
    /// Filesystem failure
    Io(std::io::Error),
    /// Stored data couldn't be parsed or written
    Format(serde_json::Error),
    /// Backend missing (e.g. LocalStorage disabled)
    Unavailable(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "I/O error: {}", e),
            PersistError::Format(e) => write!(f, "Invalid data: {}", e),
            PersistError::Unavailable(reason) => write!(f, "Storage unavailable: {}", reason),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Io(e) => Some(e),
            PersistError::Format(e) => Some(e),
            PersistError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(error: std::io::Error) -> Self {
        PersistError::Io(error)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(error: serde_json::Error) -> Self {
        PersistError::Format(error)
    }
}

/// Somewhere to keep a single best score
pub trait BestScoreStore {
    /// Stored value, `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<u64>, PersistError>;
    fn save(&mut self, best: u64) -> Result<(), PersistError>;
    fn clear(&mut self) -> Result<(), PersistError>;
}

/// In-memory store (tests, or when no backend is available)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u64>, PersistError> {
        Ok(self.value)
    }

    fn save(&mut self, best: u64) -> Result<(), PersistError> {
        self.value = Some(best);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        self.value = None;
        Ok(())
    }
}

/// On-disk record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u64,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    const FILE_NAME: &'static str = "best_score.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's data directory, or the working directory if there is none
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_data_dir() -> Self {
        let dir = dirs::data_dir()
            .map(|d| d.join("skyhop"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<u64>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let record: BestScoreRecord = serde_json::from_str(&json)?;
        Ok(Some(record.best_score))
    }

    fn save(&mut self, best: u64) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(&BestScoreRecord { best_score: best })?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Read the stored best score, treating any failure as "no best yet"
pub fn load_best_score(store: &dyn BestScoreStore) -> u64 {
    match store.load() {
        Ok(Some(best)) => {
            log::info!("Loaded best score {}", best);
            best
        }
        Ok(None) => 0,
        Err(e) => {
            log::warn!("Could not load best score, starting from 0: {}", e);
            0
        }
    }
}

/// Apply the storage side effects of a batch of events (last write wins)
pub fn persist_events(store: &mut dyn BestScoreStore, events: &[GameEvent]) {
    for event in events {
        let result = match event {
            GameEvent::BestScoreAchieved { best } => store.save(*best),
            GameEvent::BestScoreReset => store.clear(),
            _ => continue,
        };
        if let Err(e) = result {
            log::warn!("Best score not persisted: {}", e);
        }
    }
}
