use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::model::{Letter, Question, QuestionBank};

/// Lives at the start of every game.
pub const MAX_LIVES: u8 = 3;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// A round operation that is not valid in the current state.
///
/// The state is left untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("no question is open")]
    NoActiveQuestion,

    #[error("the question for {0} must be answered first")]
    QuestionOpen(Letter),

    #[error("the game has already ended ({0})")]
    Finished(Terminal),
}

//
// ─── OUTCOMES ─────────────────────────────────────────────────────────────────
//

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Win,
    Loss,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Win => write!(f, "win"),
            Terminal::Loss => write!(f, "loss"),
        }
    }
}

/// Result of evaluating one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The answer was correct and claimed the last missing letter.
    CorrectAndWin,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct | AnswerOutcome::CorrectAndWin)
    }
}

/// Result of `GameState::select_letter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSelection {
    pub state: GameState,
    /// `None` when the selection was ignored (letter collected or unknown).
    pub question: Option<Question>,
}

/// Result of `GameState::submit_answer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub state: GameState,
    pub outcome: AnswerOutcome,
    /// Letter of the question that was answered.
    pub letter: Letter,
}

//
// ─── GAME STATE ───────────────────────────────────────────────────────────────
//

/// State of one playing session.
///
/// Transitions never mutate `self`; each returns the next state. Lives only go
/// down and collected letters only go up until a reset, so a game cannot be
/// both won and lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    lives: u8,
    collected: BTreeSet<Letter>,
    active_question: Option<Question>,
    terminal: Option<Terminal>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Initial state: full lives, nothing collected, no question open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lives: MAX_LIVES,
            collected: BTreeSet::new(),
            active_question: None,
            terminal: None,
        }
    }

    /// Discards everything and returns the initial state.
    #[must_use]
    pub fn reset() -> Self {
        Self::new()
    }

    /// Rebuild an idle, non-terminal state from already-validated parts.
    pub(crate) fn from_validated(lives: u8, collected: BTreeSet<Letter>) -> Self {
        Self {
            lives,
            collected,
            active_question: None,
            terminal: None,
        }
    }

    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[must_use]
    pub fn collected(&self) -> &BTreeSet<Letter> {
        &self.collected
    }

    #[must_use]
    pub fn is_collected(&self, letter: Letter) -> bool {
        self.collected.contains(&letter)
    }

    #[must_use]
    pub fn active_question(&self) -> Option<&Question> {
        self.active_question.as_ref()
    }

    #[must_use]
    pub fn terminal(&self) -> Option<Terminal> {
        self.terminal
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.terminal == Some(Terminal::Win)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.terminal == Some(Terminal::Loss)
    }

    /// Bank letters still to be claimed, in word order.
    #[must_use]
    pub fn remaining(&self, bank: &QuestionBank) -> Vec<Letter> {
        bank.letters()
            .filter(|letter| !self.collected.contains(letter))
            .collect()
    }

    /// Open the question bound to `letter`.
    ///
    /// Selecting a letter that is already collected, or that the bank does
    /// not know, is ignored even while a question is open: the state comes
    /// back unchanged and no question is surfaced.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Finished` once the game is won or lost, and
    /// `RoundError::QuestionOpen` while another question awaits an answer.
    pub fn select_letter(
        &self,
        bank: &QuestionBank,
        letter: Letter,
    ) -> Result<LetterSelection, RoundError> {
        self.ensure_in_progress()?;
        let question = match bank.find_by_letter(letter) {
            Some(question) if !self.is_collected(letter) => question,
            _ => {
                return Ok(LetterSelection {
                    state: self.clone(),
                    question: None,
                });
            }
        };

        if let Some(open) = &self.active_question {
            return Err(RoundError::QuestionOpen(open.letter()));
        }

        let mut next = self.clone();
        next.active_question = Some(question.clone());
        Ok(LetterSelection {
            state: next,
            question: Some(question.clone()),
        })
    }

    /// Evaluate `chosen` against the open question and close it.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Finished` once the game is won or lost, and
    /// `RoundError::NoActiveQuestion` when nothing is open.
    pub fn submit_answer(
        &self,
        bank: &QuestionBank,
        chosen: &str,
    ) -> Result<AnswerResult, RoundError> {
        self.ensure_in_progress()?;
        let question = self
            .active_question
            .as_ref()
            .ok_or(RoundError::NoActiveQuestion)?;
        let letter = question.letter();

        let mut next = self.clone();
        next.active_question = None;

        let outcome = if question.is_correct(chosen) {
            next.collected.insert(letter);
            if bank.letters().all(|l| next.collected.contains(&l)) {
                next.terminal = Some(Terminal::Win);
                AnswerOutcome::CorrectAndWin
            } else {
                AnswerOutcome::Correct
            }
        } else {
            next.lives = next.lives.saturating_sub(1);
            if next.lives == 0 {
                next.terminal = Some(Terminal::Loss);
            }
            AnswerOutcome::Incorrect
        };

        Ok(AnswerResult {
            state: next,
            outcome,
            letter,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), RoundError> {
        match self.terminal {
            Some(terminal) => Err(RoundError::Finished(terminal)),
            None => Ok(()),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
