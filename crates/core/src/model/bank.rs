use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::question::{OPTION_COUNT, Question, QuestionError};
use crate::model::{Letter, LetterError};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while building or loading a question bank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("letter {0} is bound to more than one question")]
    DuplicateLetter(Letter),

    #[error("question {index}: {source}")]
    Letter {
        index: usize,
        #[source]
        source: LetterError,
    },

    #[error("question {index}: expected 3 options, found {found}")]
    OptionCount { index: usize, found: usize },

    #[error("question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("invalid question bank JSON: {0}")]
    Decode(String),
}

//
// ─── BUILT-IN QUESTIONS ───────────────────────────────────────────────────────
//

struct StaticQuestion {
    letter: char,
    prompt: &'static str,
    options: [&'static str; OPTION_COUNT],
    correct: usize,
}

const STANDARD_QUESTIONS: [StaticQuestion; 6] = [
    StaticQuestion {
        letter: 'B',
        prompt: "¿Qué plataformas dominan el streaming de videojuegos a nivel global?",
        options: [
            "Twitch, YouTube Gaming y Kick.",
            "Facebook, Instagram y TikTok.",
            "Netflix, HBO Max y Disney+.",
        ],
        correct: 0,
    },
    StaticQuestion {
        letter: 'U',
        prompt: "¿Qué juego móvil lidera descargas y audiencia en Colombia y LATAM?",
        options: ["Candy Crush", "Free Fire.", "Clash Royale."],
        correct: 1,
    },
    StaticQuestion {
        letter: 'R',
        prompt: "¿Qué elemento ha transformado más la comunicación en el gaming?",
        options: [
            "La publicidad en los juegos.",
            "La interacción en tiempo real entre streamer y audiencia.",
            "Los gráficos en 4K.",
        ],
        correct: 1,
    },
    StaticQuestion {
        letter: 'S',
        prompt: "Menciona dos videojuegos de PC más jugados globalmente en 2025.",
        options: [
            "Call of Duty: Warzone y Fortnite.",
            "Minecraft y Roblox.",
            "Counter-Strike 2 y League of Legends.",
        ],
        correct: 2,
    },
    StaticQuestion {
        letter: 'O',
        prompt: "¿Qué tipo de publicidad es más efectiva en streaming y eSports?",
        options: [
            "Anuncios de TV",
            "Integraciones nativas en vivo y patrocinios de eventos/ligas.",
            "Anuncios en periódicos.",
        ],
        correct: 1,
    },
    StaticQuestion {
        letter: 'N',
        prompt: "¿Qué red o plataforma es clave para engagement y comunidad en gaming?",
        options: ["LinkedIn", "Twitter", "Discord."],
        correct: 2,
    },
];

/// On-disk shape of one question in a custom bank file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionRecord {
    letter: String,
    prompt: String,
    options: Vec<String>,
    correct_option: String,
}

//
// ─── QUESTION BANK ────────────────────────────────────────────────────────────
//

/// Ordered, immutable set of questions. The order of the questions spells the
/// target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already-validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateLetter` if two questions share a letter.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.letter()) {
                return Err(BankError::DuplicateLetter(question.letter()));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in six-question bank spelling BURSON.
    #[must_use]
    pub fn standard() -> Self {
        let questions = STANDARD_QUESTIONS
            .iter()
            .map(|q| {
                Question::from_static(
                    Letter::from_uppercase(q.letter),
                    q.prompt,
                    q.options,
                    q.correct,
                )
            })
            .collect();
        Self { questions }
    }

    /// Load a custom bank from a JSON array of
    /// `{letter, prompt, options, correct_option}` records.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Decode` for malformed JSON, or the first
    /// validation error found in the records.
    pub fn from_json(text: &str) -> Result<Self, BankError> {
        let records: Vec<QuestionRecord> =
            serde_json::from_str(text).map_err(|err| BankError::Decode(err.to_string()))?;

        let mut questions = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let letter = record
                .letter
                .parse::<Letter>()
                .map_err(|source| BankError::Letter { index, source })?;
            let found = record.options.len();
            let options: [String; OPTION_COUNT] = record
                .options
                .try_into()
                .map_err(|_| BankError::OptionCount { index, found })?;
            let question = Question::new(letter, record.prompt, options, &record.correct_option)
                .map_err(|source| BankError::Question { index, source })?;
            questions.push(question);
        }

        Self::new(questions)
    }

    #[must_use]
    pub fn all_questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn find_by_letter(&self, letter: Letter) -> Option<&Question> {
        self.questions.iter().find(|q| q.letter() == letter)
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.find_by_letter(letter).is_some()
    }

    /// Bank letters in question order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.questions.iter().map(Question::letter)
    }

    /// The target word, e.g. `"BURSON"`.
    #[must_use]
    pub fn word(&self) -> String {
        self.letters().map(Letter::as_char).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
