//! Progress log persistence.
//!
//! The entire datastore is a single JSON array of progress entries. Appends
//! are read-modify-write over that document, serialized through a
//! process-wide per-document mutex so concurrent appends cannot drop each
//! other's writes, even through separate store handles on the same path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum value for pain and difficulty scales (0 = none, 10 = worst).
pub const MAX_LEVEL: u8 = 10;

/// One logged attempt at an exercise.
///
/// `id` and `date` are assigned by the store at append time and never change
/// afterwards. Entries are immutable once written; the store offers no update
/// or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Unique identifier, assigned by the store
    pub id: Uuid,
    /// Reference to an exercise in the rehab plan catalog (not validated here)
    pub exercise_id: String,
    /// Creation timestamp, assigned by the store
    pub date: DateTime<Utc>,
    /// Sets completed, if tracked for this exercise
    #[serde(default)]
    pub completed_sets: Option<u32>,
    /// Reps completed, if tracked
    #[serde(default)]
    pub completed_reps: Option<u32>,
    /// Duration held/performed, if tracked
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    /// Pain during the exercise, 0-10
    #[serde(default)]
    pub pain_level: Option<u8>,
    /// Perceived difficulty, 0-10
    #[serde(default)]
    pub difficulty_level: Option<u8>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Client-supplied fields for a new entry. `id` and `date` are always
/// server-assigned, never taken from the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProgressEntry {
    pub exercise_id: String,
    #[serde(default)]
    pub completed_sets: Option<u32>,
    #[serde(default)]
    pub completed_reps: Option<u32>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub pain_level: Option<u8>,
    #[serde(default)]
    pub difficulty_level: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewProgressEntry {
    /// Create a candidate entry for the given exercise.
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            ..Default::default()
        }
    }

    /// Check level fields against the 0-10 scale.
    fn validate(&self) -> Result<(), StoreError> {
        if let Some(pain) = self.pain_level {
            if pain > MAX_LEVEL {
                return Err(StoreError::ValidationError(format!(
                    "pain_level must be 0-{}, got {}",
                    MAX_LEVEL, pain
                )));
            }
        }
        if let Some(difficulty) = self.difficulty_level {
            if difficulty > MAX_LEVEL {
                return Err(StoreError::ValidationError(format!(
                    "difficulty_level must be 0-{}, got {}",
                    MAX_LEVEL, difficulty
                )));
            }
        }
        Ok(())
    }

    /// Materialize the entry with store-assigned identity and timestamp.
    fn materialize(self) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            exercise_id: self.exercise_id,
            date: Utc::now(),
            completed_sets: self.completed_sets,
            completed_reps: self.completed_reps,
            duration_seconds: self.duration_seconds,
            pain_level: self.pain_level,
            difficulty_level: self.difficulty_level,
            notes: self.notes,
        }
    }
}

/// Append-only repository of progress entries.
///
/// Implementations guarantee: ids are unique, `date` is stamped exactly once
/// at append, and `read_all` returns entries in append order.
pub trait ProgressRepository: Send + Sync {
    /// Append a new entry and return it fully materialized.
    fn append(&self, candidate: NewProgressEntry) -> Result<ProgressEntry, StoreError>;

    /// Read the full log in insertion order.
    fn read_all(&self) -> Result<Vec<ProgressEntry>, StoreError>;
}

/// Progress store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    /// The durable document does not parse as the expected entry array.
    #[error("Malformed progress log: {0}")]
    MalformedDocument(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Registry of per-document write locks, keyed by the path the store was
/// opened with. All handles on one path share one lock, so the append
/// read-modify-write is serialized process-wide.
static DOCUMENT_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

fn document_lock(path: &Path) -> Arc<Mutex<()>> {
    let registry = DOCUMENT_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut locks = registry
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    locks.entry(path.to_path_buf()).or_default().clone()
}

/// File-backed store: one JSON array is the whole dataset.
///
/// `append` reads the current array, pushes the new entry, and writes the
/// array back. The read-modify-write runs under a lock shared by every store
/// opened on the same document path, so concurrent appends are linearized and
/// none are lost. The write lands in a temp file first and is renamed over
/// the document, so a failed write leaves the previous document intact.
pub struct JsonProgressStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonProgressStore {
    /// Open a store backed by the given document path. The file is created
    /// on first append; a missing file reads as an empty log. Locks are keyed
    /// by the path exactly as given, so refer to one document by one path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let write_lock = document_lock(&path);
        Self { path, write_lock }
    }

    /// Path of the durable document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Vec<ProgressEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| StoreError::MalformedDocument(e.to_string()))
    }

    fn write_document(&self, entries: &[ProgressEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::IoError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;

        // Write to a sibling temp file, then rename into place. Rename within
        // one directory is atomic, so readers never observe a half-written
        // document.
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content).map_err(|e| StoreError::IoError(e.to_string()))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::IoError(e.to_string()))?;

        Ok(())
    }
}

impl ProgressRepository for JsonProgressStore {
    fn append(&self, candidate: NewProgressEntry) -> Result<ProgressEntry, StoreError> {
        candidate.validate()?;

        // Hold the lock across the full read-modify-write so a concurrent
        // append cannot read the pre-write state.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut entries = self.read_document()?;
        let entry = candidate.materialize();
        entries.push(entry.clone());
        self.write_document(&entries)?;

        tracing::debug!(
            entry_id = %entry.id,
            exercise_id = %entry.exercise_id,
            total = entries.len(),
            "Appended progress entry"
        );

        Ok(entry)
    }

    fn read_all(&self) -> Result<Vec<ProgressEntry>, StoreError> {
        self.read_document()
    }
}

/// In-memory store behind the same repository trait. Used in tests and as
/// the swap-in backend when nothing should touch the filesystem.
#[derive(Default)]
pub struct MemoryProgressStore {
    entries: Mutex<Vec<ProgressEntry>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressRepository for MemoryProgressStore {
    fn append(&self, candidate: NewProgressEntry) -> Result<ProgressEntry, StoreError> {
        candidate.validate()?;

        let entry = candidate.materialize();
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.push(entry.clone());

        Ok(entry)
    }

    fn read_all(&self) -> Result<Vec<ProgressEntry>, StoreError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.clone())
    }
}
