use chrono::{DateTime, Duration, Utc};
use storage::repository::{SaveSlot, SavedGameRecord, SavedGameRepository, Storage};
use storage::sqlite::SqliteRepository;

fn saved_at() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
}

#[tokio::test]
async fn sqlite_roundtrip_persists_payload_and_timestamp() {
    let url = "sqlite:file:memdb_saved_roundtrip?mode=memory&cache=shared";
    let repo = SqliteRepository::connect(url).await.expect("connect");
    repo.migrate().await.expect("migrate");

    let slot = SaveSlot::default();
    let record = SavedGameRecord::new(
        slot.clone(),
        r#"{"version":1,"lives":2,"collected":["B"]}"#,
        saved_at(),
    );
    repo.put_saved_game(&record).await.expect("put");

    let fetched = repo.get_saved_game(&slot).await.expect("get").expect("present");
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn sqlite_put_overwrites_existing_slot() {
    let url = "sqlite:file:memdb_saved_overwrite?mode=memory&cache=shared";
    let repo = SqliteRepository::connect(url).await.expect("connect");
    repo.migrate().await.expect("migrate");

    let slot = SaveSlot::new("main").unwrap();
    repo.put_saved_game(&SavedGameRecord::new(slot.clone(), "old", saved_at()))
        .await
        .unwrap();
    repo.put_saved_game(&SavedGameRecord::new(
        slot.clone(),
        "new",
        saved_at() + Duration::minutes(3),
    ))
    .await
    .unwrap();

    let fetched = repo.get_saved_game(&slot).await.unwrap().unwrap();
    assert_eq!(fetched.payload, "new");
    assert_eq!(fetched.saved_at, saved_at() + Duration::minutes(3));
}

#[tokio::test]
async fn sqlite_missing_slot_is_none() {
    let url = "sqlite:file:memdb_saved_missing?mode=memory&cache=shared";
    let repo = SqliteRepository::connect(url).await.expect("connect");
    repo.migrate().await.expect("migrate");

    let slot = SaveSlot::new("nothing-here").unwrap();
    assert!(repo.get_saved_game(&slot).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let url = "sqlite:file:memdb_saved_migrate?mode=memory&cache=shared";
    let repo = SqliteRepository::connect(url).await.expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let storage = Storage::sqlite(url).await.expect("storage");
    let slot = SaveSlot::default();
    storage
        .saved_games
        .put_saved_game(&SavedGameRecord::new(slot.clone(), "{}", saved_at()))
        .await
        .unwrap();
    assert!(repo.get_saved_game(&slot).await.unwrap().is_some());
}
