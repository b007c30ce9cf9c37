mod bank;
mod game;
mod letter;
mod question;
mod session;
mod snapshot;

pub use bank::{BankError, QuestionBank};
pub use game::{
    AnswerOutcome, AnswerResult, GameState, LetterSelection, MAX_LIVES, RoundError, Terminal,
};
pub use letter::{Letter, LetterError};
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use session::{Character, ParseCharacterError, SessionStage};
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION, SnapshotError};
