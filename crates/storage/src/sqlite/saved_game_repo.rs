use chrono::{DateTime, Utc};
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{SaveSlot, SavedGameRecord, SavedGameRepository, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn map_saved_game_row(row: &sqlx::sqlite::SqliteRow) -> Result<SavedGameRecord, StorageError> {
    let slot: String = row.try_get("slot").map_err(ser)?;
    let payload: String = row.try_get("payload").map_err(ser)?;
    let saved_at: DateTime<Utc> = row.try_get("saved_at").map_err(ser)?;
    let slot = SaveSlot::new(slot).map_err(ser)?;
    Ok(SavedGameRecord::new(slot, payload, saved_at))
}

#[async_trait::async_trait]
impl SavedGameRepository for SqliteRepository {
    async fn put_saved_game(&self, record: &SavedGameRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO saved_games (slot, payload, saved_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(slot) DO UPDATE SET
                    payload = excluded.payload,
                    saved_at = excluded.saved_at
            ",
        )
        .bind(record.slot.as_str())
        .bind(&record.payload)
        .bind(record.saved_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn get_saved_game(
        &self,
        slot: &SaveSlot,
    ) -> Result<Option<SavedGameRecord>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT slot, payload, saved_at
                FROM saved_games
                WHERE slot = ?1
            ",
        )
        .bind(slot.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(map_saved_game_row).transpose()
    }
}
