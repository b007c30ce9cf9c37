mod controller;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::SessionController;
pub use view::{AnswerReport, LetterReport, SessionSnapshot};
