use std::sync::Arc;

use burson_core::model::{GameSnapshot, GameState, QuestionBank, RoundError};
use storage::repository::{SaveSlot, SavedGameRecord, SavedGameRepository};

use crate::Clock;
use crate::error::SessionError;

/// Persistence collaborator: encodes game snapshots into a slot of the
/// key-value store and validates them on the way back.
#[derive(Clone)]
pub struct SavedGameService {
    clock: Clock,
    slot: SaveSlot,
    repo: Arc<dyn SavedGameRepository>,
}

impl SavedGameService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn SavedGameRepository>) -> Self {
        Self {
            clock,
            slot: SaveSlot::default(),
            repo,
        }
    }

    #[must_use]
    pub fn with_slot(mut self, slot: SaveSlot) -> Self {
        self.slot = slot;
        self
    }

    #[must_use]
    pub fn slot(&self) -> &SaveSlot {
        &self.slot
    }

    /// Persist `state`, overwriting the slot. An open question is not saved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Round` for a finished game, or storage/encoding
    /// errors.
    pub async fn save(&self, state: &GameState) -> Result<(), SessionError> {
        if let Some(terminal) = state.terminal() {
            return Err(RoundError::Finished(terminal).into());
        }
        let payload = GameSnapshot::capture(state).to_json()?;
        let record = SavedGameRecord::new(self.slot.clone(), payload, self.clock.now());
        self.repo.put_saved_game(&record).await?;
        tracing::info!(slot = %self.slot, lives = state.lives(), "game saved");
        Ok(())
    }

    /// Load and validate the slot against `bank`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSavedGame` for an empty slot,
    /// `SessionError::MalformedSnapshot` if the payload fails validation, or
    /// `SessionError::Storage` on backend failures.
    pub async fn load(&self, bank: &QuestionBank) -> Result<GameState, SessionError> {
        let Some(record) = self.repo.get_saved_game(&self.slot).await? else {
            return Err(SessionError::NoSavedGame);
        };

        let restored =
            GameSnapshot::from_json(&record.payload).and_then(|snapshot| snapshot.restore(bank));
        match restored {
            Ok(state) => {
                tracing::info!(
                    slot = %self.slot,
                    saved_at = %record.saved_at,
                    lives = state.lives(),
                    "game loaded"
                );
                Ok(state)
            }
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "rejected saved game");
                Err(err.into())
            }
        }
    }

    /// True when the slot holds a record, valid or not.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on backend failures.
    pub async fn has_saved_game(&self) -> Result<bool, SessionError> {
        Ok(self.repo.get_saved_game(&self.slot).await?.is_some())
    }
}
