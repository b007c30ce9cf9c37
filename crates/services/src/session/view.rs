use burson_core::model::{AnswerOutcome, Character, GameState, Letter, Question, SessionStage};

/// What the renderer needs to redraw after an accepted intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub stage: SessionStage,
    pub character: Option<Character>,
    /// Present while playing and on the win screen.
    pub game: Option<GameState>,
    /// The game was lost; the renderer should offer a restart.
    pub game_over: bool,
}

/// Result of a letter click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterReport {
    pub snapshot: SessionSnapshot,
    /// `None` when the click was ignored.
    pub question: Option<Question>,
}

/// Result of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReport {
    pub snapshot: SessionSnapshot,
    pub outcome: AnswerOutcome,
    pub letter: Letter,
}
