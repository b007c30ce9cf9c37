use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Longest accepted slot name.
pub const MAX_SLOT_LEN: usize = 64;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlotError {
    #[error("save slot name is empty")]
    Empty,

    #[error("save slot name is longer than 64 characters")]
    TooLong,
}

/// Validated save slot name (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SaveSlot(String);

impl SaveSlot {
    /// Create a validated slot name.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the name is empty after trimming or too long.
    pub fn new(value: impl Into<String>) -> Result<Self, SlotError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SlotError::Empty);
        }
        if trimmed.chars().count() > MAX_SLOT_LEN {
            return Err(SlotError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SaveSlot {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl fmt::Display for SaveSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One saved game as stored. The payload is opaque to storage; decoding and
/// validation happen in the services layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGameRecord {
    pub slot: SaveSlot,
    pub payload: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedGameRecord {
    #[must_use]
    pub fn new(slot: SaveSlot, payload: impl Into<String>, saved_at: DateTime<Utc>) -> Self {
        Self {
            slot,
            payload: payload.into(),
            saved_at,
        }
    }
}

/// Key-value contract for saved games, one record per slot.
#[async_trait]
pub trait SavedGameRepository: Send + Sync {
    /// Insert or overwrite the record for `record.slot`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn put_saved_game(&self, record: &SavedGameRecord) -> Result<(), StorageError>;

    /// Fetch the record stored under `slot`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures. A missing slot is `Ok(None)`.
    async fn get_saved_game(
        &self,
        slot: &SaveSlot,
    ) -> Result<Option<SavedGameRecord>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    saved_games: Arc<Mutex<HashMap<SaveSlot, SavedGameRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedGameRepository for InMemoryRepository {
    async fn put_saved_game(&self, record: &SavedGameRecord) -> Result<(), StorageError> {
        let mut guard = self
            .saved_games
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(record.slot.clone(), record.clone());
        Ok(())
    }

    async fn get_saved_game(
        &self,
        slot: &SaveSlot,
    ) -> Result<Option<SavedGameRecord>, StorageError> {
        let guard = self
            .saved_games
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(slot).cloned())
    }
}

/// Repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub saved_games: Arc<dyn SavedGameRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let saved_games: Arc<dyn SavedGameRepository> = Arc::new(InMemoryRepository::new());
        Self { saved_games }
    }
}
