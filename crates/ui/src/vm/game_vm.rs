use burson_core::model::{AnswerOutcome, Character, Letter, SessionStage};
use services::{SavedGameService, SessionController, SessionError};

use super::board_vm::{BoardVm, FinaleVm, map_board, map_finale};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameIntent {
    SelectCharacter(Character),
    SelectLetter(Letter),
    Answer(String),
    Reset,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Short message shown after an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Correct(Letter),
    Incorrect,
    Saved,
    Loaded,
    NoSavedGame,
    InvalidSavedGame,
    StorageFailed,
    NotAllowed,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Notice::Correct(letter) => {
                format!("¡Respuesta correcta! Has ganado la letra {letter}.")
            }
            Notice::Incorrect => "Respuesta incorrecta. Pierdes una vida.".to_string(),
            Notice::Saved => "Partida guardada exitosamente.".to_string(),
            Notice::Loaded => "Partida cargada exitosamente.".to_string(),
            Notice::NoSavedGame => "No hay partida guardada.".to_string(),
            Notice::InvalidSavedGame => {
                "La partida guardada no es válida y no se cargó.".to_string()
            }
            Notice::StorageFailed => "No se pudo acceder a la partida guardada.".to_string(),
            Notice::NotAllowed => "Esa acción no está disponible ahora.".to_string(),
        }
    }

    #[must_use]
    pub fn kind(self) -> NoticeKind {
        match self {
            Notice::Correct(_) | Notice::Saved | Notice::Loaded => NoticeKind::Success,
            Notice::Incorrect | Notice::NoSavedGame | Notice::NotAllowed => NoticeKind::Info,
            Notice::InvalidSavedGame | Notice::StorageFailed => NoticeKind::Error,
        }
    }

    #[must_use]
    pub fn from_error(err: &SessionError) -> Self {
        match err {
            SessionError::NoSavedGame => Notice::NoSavedGame,
            SessionError::MalformedSnapshot(_) => Notice::InvalidSavedGame,
            SessionError::InvalidOperation { .. } | SessionError::Round(_) => Notice::NotAllowed,
            _ => Notice::StorageFailed,
        }
    }
}

/// View-model over the session controller. Maps intents to notices and the
/// current snapshot to board/finale view-models.
#[derive(Clone)]
pub struct GameVm {
    session: SessionController,
}

impl GameVm {
    #[must_use]
    pub fn new(session: SessionController) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn stage(&self) -> SessionStage {
        self.session.stage()
    }

    #[must_use]
    pub fn board(&self) -> Option<BoardVm> {
        map_board(&self.session.snapshot(), self.session.bank())
    }

    #[must_use]
    pub fn finale(&self) -> Option<FinaleVm> {
        map_finale(&self.session.snapshot(), self.session.bank())
    }

    /// Apply a synchronous intent. Rejected intents leave the session as it
    /// was and come back as `Notice::NotAllowed`.
    pub fn apply(&mut self, intent: GameIntent) -> Option<Notice> {
        let result = match intent {
            GameIntent::SelectCharacter(character) => {
                self.session.select_character(character).map(|_| None)
            }
            GameIntent::SelectLetter(letter) => self.session.select_letter(letter).map(|_| None),
            GameIntent::Answer(option) => {
                self.session
                    .submit_answer(&option)
                    .map(|report| match report.outcome {
                        AnswerOutcome::Correct | AnswerOutcome::CorrectAndWin => {
                            Some(Notice::Correct(report.letter))
                        }
                        AnswerOutcome::Incorrect => Some(Notice::Incorrect),
                    })
            }
            GameIntent::Reset => self.session.reset().map(|_| None),
            GameIntent::Restart => {
                self.session.restart();
                Ok(None)
            }
        };

        result.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "intent rejected");
            Some(Notice::from_error(&err))
        })
    }

    pub async fn save(&self, saves: &SavedGameService) -> Notice {
        match self.session.save_game(saves).await {
            Ok(()) => Notice::Saved,
            Err(err) => Notice::from_error(&err),
        }
    }

    pub async fn load(&mut self, saves: &SavedGameService) -> Notice {
        match self.session.load_game(saves).await {
            Ok(_) => Notice::Loaded,
            Err(err) => Notice::from_error(&err),
        }
    }
}
