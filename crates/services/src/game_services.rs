use std::sync::Arc;

use burson_core::model::QuestionBank;
use storage::repository::{SaveSlot, Storage};

use crate::Clock;
use crate::audio::AudioCue;
use crate::error::GameServicesError;
use crate::saved_games::SavedGameService;
use crate::session::SessionController;

/// Assembles the game-facing services around one question bank.
#[derive(Clone)]
pub struct GameServices {
    bank: Arc<QuestionBank>,
    saved_games: Arc<SavedGameService>,
}

impl GameServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `GameServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        bank: QuestionBank,
        slot: SaveSlot,
    ) -> Result<Self, GameServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        tracing::debug!(slot = %slot, "sqlite storage ready");
        Ok(Self::from_storage(&storage, clock, bank, slot))
    }

    /// Build services on top of throwaway in-memory storage.
    #[must_use]
    pub fn in_memory(clock: Clock, bank: QuestionBank) -> Self {
        Self::in_memory_with_slot(clock, bank, SaveSlot::default())
    }

    /// Like [`GameServices::in_memory`], saving under `slot`.
    #[must_use]
    pub fn in_memory_with_slot(clock: Clock, bank: QuestionBank, slot: SaveSlot) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, bank, slot)
    }

    fn from_storage(storage: &Storage, clock: Clock, bank: QuestionBank, slot: SaveSlot) -> Self {
        let saved_games = Arc::new(
            SavedGameService::new(clock, Arc::clone(&storage.saved_games)).with_slot(slot),
        );
        Self {
            bank: Arc::new(bank),
            saved_games,
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn saved_games(&self) -> Arc<SavedGameService> {
        Arc::clone(&self.saved_games)
    }

    /// Start a session at character selection, sharing this bank.
    #[must_use]
    pub fn new_session(&self, audio: Arc<dyn AudioCue>) -> SessionController {
        SessionController::new(self.bank(), audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burson_core::model::SessionStage;
    use burson_core::time::fixed_clock;

    use crate::SilentCue;

    #[test]
    fn sessions_share_the_bank() {
        let services = GameServices::in_memory(fixed_clock(), QuestionBank::standard());
        let session = services.new_session(Arc::new(SilentCue));
        assert_eq!(session.stage(), SessionStage::SelectCharacter);
        assert_eq!(session.bank().word(), "BURSON");
        assert_eq!(services.saved_games().slot(), &SaveSlot::default());
    }

    #[tokio::test]
    async fn in_memory_services_use_requested_slot() {
        let services = GameServices::in_memory_with_slot(
            fixed_clock(),
            QuestionBank::standard(),
            SaveSlot::new("weekend").unwrap(),
        );
        assert_eq!(services.saved_games().slot().as_str(), "weekend");
        assert!(!services.saved_games().has_saved_game().await.unwrap());
    }

    #[tokio::test]
    async fn sqlite_services_use_requested_slot() {
        let services = GameServices::new_sqlite(
            "sqlite:file:memdb_services_slot?mode=memory&cache=shared",
            fixed_clock(),
            QuestionBank::standard(),
            SaveSlot::new("weekend").unwrap(),
        )
        .await
        .unwrap();
        assert_eq!(services.saved_games().slot().as_str(), "weekend");
        assert!(!services.saved_games().has_saved_game().await.unwrap());
    }
}
