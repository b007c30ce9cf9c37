mod board_vm;
mod game_vm;

pub use board_vm::{
    BoardVm, CharacterCardVm, FinaleTone, FinaleVm, LetterTileVm, QuestionVm, map_board,
    map_character_cards, map_finale,
};
pub use game_vm::{GameIntent, GameVm, Notice, NoticeKind};
