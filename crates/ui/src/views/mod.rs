mod board;
mod character_select;
mod finale;
mod game;
mod notice;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use board::{Board, QuestionModal};
pub use character_select::CharacterSelect;
pub use finale::Finale;
pub use game::GameView;
pub use notice::NoticeBanner;
pub use state::{ViewError, ViewState, view_state_from_resource};
