#![forbid(unsafe_code)]

pub mod audio;
pub mod error;
pub mod game_services;
pub mod saved_games;
pub mod session;

pub use burson_core::Clock;

pub use audio::{AudioCue, AudioCueEvent, SilentCue};
pub use error::{AudioError, GameServicesError, SessionError};
pub use game_services::GameServices;
pub use saved_games::SavedGameService;
pub use session::{AnswerReport, LetterReport, SessionController, SessionSnapshot};
