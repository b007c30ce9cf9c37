use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::game::{GameState, MAX_LIVES, Terminal};
use crate::model::{Letter, QuestionBank};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Reasons a persisted snapshot is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("snapshot could not be decoded: {0}")]
    Decode(String),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    #[error("lives out of range: {0}")]
    LivesOutOfRange(u8),

    #[error("invalid letter {0:?}")]
    InvalidLetter(String),

    #[error("letter {0} is not part of the question bank")]
    UnknownLetter(Letter),

    #[error("letter {0} is listed twice")]
    DuplicateLetter(Letter),

    #[error("{found} letters collected but the bank only has {expected}")]
    TooManyLetters { found: usize, expected: usize },

    #[error("snapshot describes a finished game ({0})")]
    Terminal(Terminal),
}

/// Serialized form of a `GameState` between rounds.
///
/// There is no field for an open question, so a saved game always resumes
/// idle; unknown fields are refused when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSnapshot {
    pub version: u32,
    pub lives: u8,
    pub collected: Vec<String>,
}

impl GameSnapshot {
    /// Capture `state`, dropping any open question.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            lives: state.lives(),
            collected: state.collected().iter().map(ToString::to_string).collect(),
        }
    }

    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// # Errors
    ///
    /// Returns `SnapshotError::Decode` for invalid JSON, wrong field types, or
    /// unexpected fields.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|err| SnapshotError::Decode(err.to_string()))
    }

    /// Validate the snapshot against `bank` and rebuild the game state.
    ///
    /// Nothing is applied unless every check passes.
    ///
    /// # Errors
    ///
    /// Returns the first `SnapshotError` found. A snapshot with no lives left
    /// or every letter collected is refused as `SnapshotError::Terminal`.
    pub fn restore(&self, bank: &QuestionBank) -> Result<GameState, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }
        if self.lives > MAX_LIVES {
            return Err(SnapshotError::LivesOutOfRange(self.lives));
        }
        if self.lives == 0 {
            return Err(SnapshotError::Terminal(Terminal::Loss));
        }
        if self.collected.len() > bank.len() {
            return Err(SnapshotError::TooManyLetters {
                found: self.collected.len(),
                expected: bank.len(),
            });
        }

        let mut collected = BTreeSet::new();
        for raw in &self.collected {
            let letter = raw
                .parse::<Letter>()
                .map_err(|_| SnapshotError::InvalidLetter(raw.clone()))?;
            if !bank.contains(letter) {
                return Err(SnapshotError::UnknownLetter(letter));
            }
            if !collected.insert(letter) {
                return Err(SnapshotError::DuplicateLetter(letter));
            }
        }
        if collected.len() == bank.len() {
            return Err(SnapshotError::Terminal(Terminal::Win));
        }

        Ok(GameState::from_validated(self.lives, collected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(lives: u8, collected: &[&str]) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            lives,
            collected: collected.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn play_b_correct_u_wrong(bank: &QuestionBank) -> GameState {
        let b = Letter::new('B').unwrap();
        let u = Letter::new('U').unwrap();
        let state = GameState::new().select_letter(bank, b).unwrap().state;
        let state = state
            .submit_answer(bank, "Twitch, YouTube Gaming y Kick.")
            .unwrap()
            .state;
        let state = state.select_letter(bank, u).unwrap().state;
        state.submit_answer(bank, "Candy Crush").unwrap().state
    }

    #[test]
    fn round_trips_through_json() {
        let bank = QuestionBank::standard();
        let state = play_b_correct_u_wrong(&bank);

        let json = GameSnapshot::capture(&state).to_json().unwrap();
        let restored = GameSnapshot::from_json(&json).unwrap().restore(&bank).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.lives(), 2);
    }

    #[test]
    fn fresh_state_round_trips() {
        let bank = QuestionBank::standard();
        let state = GameState::new();
        let restored = GameSnapshot::capture(&state).restore(&bank).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn capture_drops_open_question() {
        let bank = QuestionBank::standard();
        let open = GameState::new()
            .select_letter(&bank, Letter::new('S').unwrap())
            .unwrap()
            .state;
        let restored = GameSnapshot::capture(&open).restore(&bank).unwrap();
        assert!(restored.active_question().is_none());
        assert_eq!(restored, GameState::new());
    }

    #[test]
    fn decode_rejects_wrong_types_and_extra_fields() {
        assert!(matches!(
            GameSnapshot::from_json(r#"{"version":1,"lives":"three","collected":[]}"#),
            Err(SnapshotError::Decode(_))
        ));
        assert!(matches!(
            GameSnapshot::from_json(r#"{"version":1,"lives":-1,"collected":[]}"#),
            Err(SnapshotError::Decode(_))
        ));
        assert!(matches!(
            GameSnapshot::from_json(
                r#"{"version":1,"lives":3,"collected":[],"active_question":"B"}"#
            ),
            Err(SnapshotError::Decode(_))
        ));
        assert!(matches!(
            GameSnapshot::from_json("not json"),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn restore_validates_every_field() {
        let bank = QuestionBank::standard();
        let cases = [
            (
                GameSnapshot {
                    version: 2,
                    ..snapshot(3, &[])
                },
                SnapshotError::UnsupportedVersion(2),
            ),
            (snapshot(4, &[]), SnapshotError::LivesOutOfRange(4)),
            (snapshot(0, &["B"]), SnapshotError::Terminal(Terminal::Loss)),
            (
                snapshot(3, &["B", "U", "R", "S", "O", "N", "B"]),
                SnapshotError::TooManyLetters {
                    found: 7,
                    expected: 6,
                },
            ),
            (
                snapshot(3, &["BU"]),
                SnapshotError::InvalidLetter("BU".to_string()),
            ),
            (
                snapshot(3, &["Z"]),
                SnapshotError::UnknownLetter(Letter::new('Z').unwrap()),
            ),
            (
                snapshot(3, &["B", "b"]),
                SnapshotError::DuplicateLetter(Letter::new('B').unwrap()),
            ),
            (
                snapshot(2, &["B", "U", "R", "S", "O", "N"]),
                SnapshotError::Terminal(Terminal::Win),
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(input.restore(&bank).unwrap_err(), expected, "{input:?}");
        }
    }
}
