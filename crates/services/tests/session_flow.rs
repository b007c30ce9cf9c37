use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use burson_core::model::{AnswerOutcome, Character, Letter, QuestionBank, SessionStage};
use burson_core::time::{fixed_clock, fixed_now};
use services::{
    AudioCue, AudioCueEvent, AudioError, GameServices, SavedGameService, SessionController,
    SessionError,
};
use storage::repository::{
    InMemoryRepository, SaveSlot, SavedGameRecord, SavedGameRepository, StorageError,
};

#[derive(Default)]
struct CueLog(Mutex<Vec<AudioCueEvent>>);

impl AudioCue for CueLog {
    fn play(&self, event: AudioCueEvent) -> Result<(), AudioError> {
        self.0.lock().unwrap().push(event);
        Ok(())
    }
}

struct OfflineRepository;

#[async_trait]
impl SavedGameRepository for OfflineRepository {
    async fn put_saved_game(&self, _record: &SavedGameRecord) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn get_saved_game(
        &self,
        _slot: &SaveSlot,
    ) -> Result<Option<SavedGameRecord>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

fn letter(c: char) -> Letter {
    Letter::new(c).unwrap()
}

fn answer(session: &mut SessionController, c: char, correct: bool) -> AnswerOutcome {
    let question = session.select_letter(letter(c)).unwrap().question.unwrap();
    let chosen = question
        .options()
        .iter()
        .find(|o| question.is_correct(o) == correct)
        .unwrap()
        .clone();
    session.submit_answer(&chosen).unwrap().outcome
}

#[tokio::test]
async fn full_game_from_character_to_win() {
    let services = GameServices::in_memory(fixed_clock(), QuestionBank::standard());
    let cue = Arc::new(CueLog::default());
    let mut session = services.new_session(cue.clone());

    session.select_character(Character::Bursonlino).unwrap();
    assert_eq!(answer(&mut session, 'B', true), AnswerOutcome::Correct);
    assert_eq!(answer(&mut session, 'U', false), AnswerOutcome::Incorrect);
    assert_eq!(answer(&mut session, 'U', true), AnswerOutcome::Correct);

    session.save_game(&services.saved_games()).await.unwrap();

    for c in "RSO".chars() {
        assert_eq!(answer(&mut session, c, true), AnswerOutcome::Correct);
    }
    assert_eq!(answer(&mut session, 'N', true), AnswerOutcome::CorrectAndWin);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.stage, SessionStage::Win);
    assert_eq!(snapshot.game.as_ref().map(|g| g.lives()), Some(2));
    assert_eq!(cue.0.lock().unwrap().last(), Some(&AudioCueEvent::Win));

    session.restart();
    session.select_character(Character::Bursonlina).unwrap();
    let restored = session.load_game(&services.saved_games()).await.unwrap();
    let game = restored.game.unwrap();
    assert_eq!(game.lives(), 2);
    assert_eq!(game.remaining(&services.bank()).len(), 4);
}

#[tokio::test]
async fn saved_game_survives_a_new_session() {
    let repo = Arc::new(InMemoryRepository::new());
    let bank = Arc::new(QuestionBank::standard());
    let saves = SavedGameService::new(fixed_clock(), repo.clone());

    let mut first = SessionController::new(Arc::clone(&bank), Arc::new(CueLog::default()));
    first.select_character(Character::Bursonlina).unwrap();
    answer(&mut first, 'S', true);
    answer(&mut first, 'O', false);
    first.save_game(&saves).await.unwrap();

    let record = repo.get_saved_game(&SaveSlot::default()).await.unwrap().unwrap();
    assert_eq!(record.saved_at, fixed_now());

    let mut second = SessionController::new(bank, Arc::new(CueLog::default()));
    second.select_character(Character::Bursonlino).unwrap();
    let snapshot = second.load_game(&saves).await.unwrap();
    let game = snapshot.game.unwrap();
    assert_eq!(game.lives(), 2);
    assert!(game.is_collected(letter('S')));
    assert!(game.active_question().is_none());
}

#[tokio::test]
async fn storage_failures_leave_session_untouched() {
    let saves = SavedGameService::new(fixed_clock(), Arc::new(OfflineRepository));
    let mut session =
        SessionController::new(Arc::new(QuestionBank::standard()), Arc::new(CueLog::default()));
    session.select_character(Character::Bursonlino).unwrap();
    answer(&mut session, 'R', true);
    let before = session.snapshot();

    let err = session.save_game(&saves).await.unwrap_err();
    assert!(matches!(err, SessionError::Storage(_)));
    let err = session.load_game(&saves).await.unwrap_err();
    assert!(matches!(err, SessionError::Storage(_)));
    assert_eq!(session.snapshot(), before);
}

#[tokio::test]
async fn tampered_save_is_reported_not_applied() {
    let repo = Arc::new(InMemoryRepository::new());
    repo.put_saved_game(&SavedGameRecord::new(
        SaveSlot::default(),
        r#"{"version":1,"lives":9,"collected":[]}"#,
        fixed_now(),
    ))
    .await
    .unwrap();
    let saves = SavedGameService::new(fixed_clock(), repo);

    let mut session =
        SessionController::new(Arc::new(QuestionBank::standard()), Arc::new(CueLog::default()));
    session.select_character(Character::Bursonlina).unwrap();
    answer(&mut session, 'B', false);
    let before = session.snapshot();

    let err = session.load_game(&saves).await.unwrap_err();
    assert!(matches!(err, SessionError::MalformedSnapshot(_)));
    assert_eq!(session.snapshot(), before);
}
