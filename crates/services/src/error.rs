//! Shared error types for the services crate.

use thiserror::Error;

use burson_core::model::{RoundError, SessionStage, SnapshotError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the session controller and saved-game service.
///
/// `InvalidOperation` and `Round` are rejected intents; `MalformedSnapshot`
/// and `NoSavedGame` are informational load failures. None of them change
/// the in-memory session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{intent} is not allowed while {stage}")]
    InvalidOperation {
        intent: &'static str,
        stage: SessionStage,
    },
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error("no valid saved game: {0}")]
    MalformedSnapshot(#[from] SnapshotError),
    #[error("no saved game")]
    NoSavedGame,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("could not encode saved game: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SessionError {
    /// True for intents rejected because of the current stage or round.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidOperation { .. } | SessionError::Round(_)
        )
    }
}

/// Errors an audio cue may report. The controller logs and drops them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AudioError {
    #[error("audio output is unavailable")]
    Unavailable,
    #[error("playback failed: {0}")]
    Playback(String),
}

/// Errors emitted while bootstrapping game services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
