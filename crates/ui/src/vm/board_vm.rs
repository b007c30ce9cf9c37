use burson_core::model::{Character, QuestionBank, SessionStage};
use services::SessionSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterCardVm {
    pub character: Character,
    pub id: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
}

#[must_use]
pub fn map_character_cards() -> Vec<CharacterCardVm> {
    Character::ALL
        .into_iter()
        .map(|character| CharacterCardVm {
            character,
            id: character.id(),
            name: character.display_name(),
            avatar: character.avatar(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterTileVm {
    pub letter: char,
    pub collected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub letter: char,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardVm {
    pub avatar: &'static str,
    pub character_name: &'static str,
    pub lives: u8,
    pub lives_label: String,
    pub tiles: Vec<LetterTileVm>,
    pub progress_label: String,
    pub question: Option<QuestionVm>,
    pub game_over: bool,
}

/// Board for a session that has a game in progress (or just lost).
#[must_use]
pub fn map_board(snapshot: &SessionSnapshot, bank: &QuestionBank) -> Option<BoardVm> {
    if snapshot.stage != SessionStage::Playing {
        return None;
    }
    let game = snapshot.game.as_ref()?;
    let character = snapshot.character?;

    let tiles = bank
        .letters()
        .map(|letter| LetterTileVm {
            letter: letter.as_char(),
            collected: game.is_collected(letter),
        })
        .collect::<Vec<_>>();
    let collected = tiles.iter().filter(|tile| tile.collected).count();
    let progress_label = format!("{collected}/{}", tiles.len());

    let lives = game.lives();
    let lives_label = match lives {
        1 => "1 vida".to_string(),
        n => format!("{n} vidas"),
    };

    let question = game.active_question().map(|question| QuestionVm {
        letter: question.letter().as_char(),
        prompt: question.prompt().to_string(),
        options: question.options().to_vec(),
    });

    Some(BoardVm {
        avatar: character.avatar(),
        character_name: character.display_name(),
        lives,
        lives_label,
        tiles,
        progress_label,
        question,
        game_over: snapshot.game_over,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinaleTone {
    Victory,
    Defeat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinaleVm {
    pub tone: FinaleTone,
    pub title: String,
}

impl FinaleVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            FinaleTone::Victory => "finale finale--win",
            FinaleTone::Defeat => "finale finale--loss",
        }
    }
}

/// End-of-game overlay: shown after a win, or over the board once all
/// lives are gone.
#[must_use]
pub fn map_finale(snapshot: &SessionSnapshot, bank: &QuestionBank) -> Option<FinaleVm> {
    match snapshot.stage {
        SessionStage::Win => Some(FinaleVm {
            tone: FinaleTone::Victory,
            title: format!(
                "¡Has completado la palabra {} y ganado el juego!",
                bank.word()
            ),
        }),
        SessionStage::Playing if snapshot.game_over => Some(FinaleVm {
            tone: FinaleTone::Defeat,
            title: "¡Perdiste todas tus vidas!".to_string(),
        }),
        _ => None,
    }
}
