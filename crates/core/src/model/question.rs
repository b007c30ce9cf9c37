use thiserror::Error;

use crate::model::Letter;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 3;

/// Errors raised when a question record does not hold together.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),

    #[error("correct option {0:?} is not one of the options")]
    CorrectNotAnOption(String),
}

/// A multiple-choice question bound to one letter of the target word.
///
/// The correct option is stored as an index into `options`, so it is always
/// one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    letter: Letter,
    prompt: String,
    options: [String; OPTION_COUNT],
    correct: usize,
}

impl Question {
    /// Validate and build a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or an option is blank, options
    /// repeat, or `correct_option` is not among the options.
    pub fn new(
        letter: Letter,
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_option: &str,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        for (index, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            if options[..index].contains(option) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }
        let correct = options
            .iter()
            .position(|option| option == correct_option)
            .ok_or_else(|| QuestionError::CorrectNotAnOption(correct_option.to_string()))?;

        Ok(Self {
            letter,
            prompt,
            options,
            correct,
        })
    }

    /// Builds one of the compiled-in questions; the unit tests re-validate them.
    pub(crate) fn from_static(
        letter: Letter,
        prompt: &'static str,
        options: [&'static str; OPTION_COUNT],
        correct: usize,
    ) -> Self {
        Self {
            letter,
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct,
        }
    }

    #[must_use]
    pub fn letter(&self) -> Letter {
        self.letter
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }

    /// Exact comparison against the correct option.
    #[must_use]
    pub fn is_correct(&self, chosen: &str) -> bool {
        self.correct_option() == chosen
    }
}
