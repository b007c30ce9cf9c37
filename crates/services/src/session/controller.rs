use std::sync::Arc;

use burson_core::model::{
    AnswerOutcome, Character, GameState, Letter, QuestionBank, SessionStage,
};

use crate::audio::{AudioCue, AudioCueEvent, play_isolated};
use crate::error::SessionError;
use crate::saved_games::SavedGameService;

use super::view::{AnswerReport, LetterReport, SessionSnapshot};

/// Top-level stage machine: character selection, playing, win.
///
/// Owns the `GameState` while playing. Every intent either returns the new
/// snapshot or fails with the session untouched.
#[derive(Clone)]
pub struct SessionController {
    bank: Arc<QuestionBank>,
    audio: Arc<dyn AudioCue>,
    stage: SessionStage,
    character: Option<Character>,
    game: Option<GameState>,
}

impl SessionController {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, audio: Arc<dyn AudioCue>) -> Self {
        Self {
            bank,
            audio,
            stage: SessionStage::SelectCharacter,
            character: None,
            game: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    #[must_use]
    pub fn character(&self) -> Option<Character> {
        self.character
    }

    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.stage == SessionStage::Playing
            && self.game.as_ref().is_some_and(GameState::is_game_over)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            stage: self.stage,
            character: self.character,
            game: self.game.clone(),
            game_over: self.is_game_over(),
        }
    }

    /// Pick an avatar and start a fresh game.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOperation` outside character selection.
    pub fn select_character(
        &mut self,
        character: Character,
    ) -> Result<SessionSnapshot, SessionError> {
        self.require_stage("select_character", SessionStage::SelectCharacter)?;
        self.character = Some(character);
        self.game = Some(GameState::new());
        self.set_stage(SessionStage::Playing);
        Ok(self.snapshot())
    }

    /// Open the question for `letter`. Collected or unknown letters are
    /// ignored and come back with no question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOperation` when not playing, or
    /// `SessionError::Round` if the round rejects the selection.
    pub fn select_letter(&mut self, letter: Letter) -> Result<LetterReport, SessionError> {
        let game = self.playing_game("select_letter")?;
        let selection = game.select_letter(&self.bank, letter)?;
        match &selection.question {
            Some(question) => tracing::debug!(letter = %question.letter(), "question opened"),
            None => tracing::debug!(%letter, "letter selection ignored"),
        }
        self.game = Some(selection.state);
        Ok(LetterReport {
            snapshot: self.snapshot(),
            question: selection.question,
        })
    }

    /// Answer the open question.
    ///
    /// The audio cue hears about correct answers and wins only after the new
    /// state is in place.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOperation` when not playing, or
    /// `SessionError::Round` when no question is open or the game has ended.
    pub fn submit_answer(&mut self, chosen: &str) -> Result<AnswerReport, SessionError> {
        let game = self.playing_game("submit_answer")?;
        let result = game.submit_answer(&self.bank, chosen)?;
        tracing::debug!(
            letter = %result.letter,
            outcome = ?result.outcome,
            lives = result.state.lives(),
            "answer evaluated"
        );

        self.game = Some(result.state);
        match result.outcome {
            AnswerOutcome::Correct => {
                play_isolated(self.audio.as_ref(), AudioCueEvent::Correct);
            }
            AnswerOutcome::CorrectAndWin => {
                self.set_stage(SessionStage::Win);
                play_isolated(self.audio.as_ref(), AudioCueEvent::Correct);
                play_isolated(self.audio.as_ref(), AudioCueEvent::Win);
            }
            AnswerOutcome::Incorrect => {
                if self.is_game_over() {
                    tracing::info!("all lives lost");
                }
            }
        }

        Ok(AnswerReport {
            snapshot: self.snapshot(),
            outcome: result.outcome,
            letter: result.letter,
        })
    }

    /// Start over with a fresh game, keeping the character and stage.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOperation` when not playing.
    pub fn reset(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.require_stage("reset", SessionStage::Playing)?;
        self.game = Some(GameState::reset());
        tracing::info!("game reset");
        Ok(self.snapshot())
    }

    /// Discard the game and character and go back to character selection.
    pub fn restart(&mut self) -> SessionSnapshot {
        self.character = None;
        self.game = None;
        self.set_stage(SessionStage::SelectCharacter);
        self.snapshot()
    }

    /// Persist the current game.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOperation` when not playing, or whatever
    /// `SavedGameService::save` reports.
    pub async fn save_game(&self, saves: &SavedGameService) -> Result<(), SessionError> {
        let game = self.playing_game("save_game")?;
        saves.save(game).await
    }

    /// Replace the current game with the saved one.
    ///
    /// The snapshot is fully validated first; on any error the session is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOperation` when not playing,
    /// `SessionError::NoSavedGame`, or `SessionError::MalformedSnapshot`.
    pub async fn load_game(
        &mut self,
        saves: &SavedGameService,
    ) -> Result<SessionSnapshot, SessionError> {
        self.playing_game("load_game")?;
        let loaded = saves.load(&self.bank).await?;
        self.game = Some(loaded);
        Ok(self.snapshot())
    }

    fn require_stage(
        &self,
        intent: &'static str,
        expected: SessionStage,
    ) -> Result<(), SessionError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidOperation {
                intent,
                stage: self.stage,
            })
        }
    }

    fn playing_game(&self, intent: &'static str) -> Result<&GameState, SessionError> {
        self.require_stage(intent, SessionStage::Playing)?;
        self.game.as_ref().ok_or(SessionError::InvalidOperation {
            intent,
            stage: self.stage,
        })
    }

    fn set_stage(&mut self, stage: SessionStage) {
        if self.stage != stage {
            tracing::info!(from = %self.stage, to = %stage, "session stage changed");
            self.stage = stage;
        }
    }
}
