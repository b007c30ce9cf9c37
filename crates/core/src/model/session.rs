use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown character id {0:?}")]
pub struct ParseCharacterError(String);

/// Avatar picked before playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Character {
    Bursonlino,
    Bursonlina,
}

impl Character {
    pub const ALL: [Character; 2] = [Character::Bursonlino, Character::Bursonlina];

    /// Stable id used by the renderer (`"male"` / `"female"`).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Character::Bursonlino => "male",
            Character::Bursonlina => "female",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Character::Bursonlino => "Bursonlino",
            Character::Bursonlina => "Bursonlina",
        }
    }

    #[must_use]
    pub fn avatar(self) -> &'static str {
        match self {
            Character::Bursonlino => "🧑",
            Character::Bursonlina => "👩",
        }
    }
}

impl FromStr for Character {
    type Err = ParseCharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Character::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| ParseCharacterError(s.to_string()))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Top-level stage of a play session.
///
/// A lost game stays in `Playing`; the controller flags it as game over until
/// the player restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStage {
    #[default]
    SelectCharacter,
    Playing,
    Win,
}

impl SessionStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStage::SelectCharacter => "select_character",
            SessionStage::Playing => "playing",
            SessionStage::Win => "win",
        }
    }
}

impl fmt::Display for SessionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_ids_round_trip() {
        for character in Character::ALL {
            assert_eq!(character.id().parse::<Character>().unwrap(), character);
        }
        assert_eq!(
            "robot".parse::<Character>().unwrap_err(),
            ParseCharacterError("robot".to_string())
        );
    }

    #[test]
    fn default_stage_is_character_selection() {
        assert_eq!(SessionStage::default(), SessionStage::SelectCharacter);
        assert_eq!(SessionStage::Playing.to_string(), "playing");
    }
}
