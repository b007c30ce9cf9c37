use burson_core::model::{Letter, SessionStage};
use dioxus::document::eval;
use dioxus::prelude::*;

use crate::audio::{WebAudioCue, cue_script};
use crate::context::AppContext;
use crate::views::{
    Board, CharacterSelect, Finale, NoticeBanner, ViewError, view_state_from_resource,
};
use crate::vm::{GameIntent, GameVm, Notice};

fn play_pending(audio: &WebAudioCue) {
    for event in audio.drain() {
        let _ = eval(&cue_script(event));
    }
}

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal({
        let ctx = ctx.clone();
        move || GameVm::new(ctx.new_session())
    });
    let mut notice = use_signal(|| None::<Notice>);
    let mut busy = use_signal(|| false);
    let mut save_revision = use_signal(|| 0_u32);

    let dispatch = use_callback({
        let ctx = ctx.clone();
        move |intent: GameIntent| {
            let result = vm.write().apply(intent);
            notice.set(result);
            play_pending(ctx.audio());
        }
    });

    let saved_game = use_resource({
        let saves = ctx.saved_games();
        move || {
            let saves = saves.clone();
            let _revision = save_revision();
            async move {
                saves
                    .has_saved_game()
                    .await
                    .map_err(|_| ViewError::Unknown)
            }
        }
    });
    let saved_game_state = view_state_from_resource(&saved_game);

    let (stage, board, finale) = {
        let current = vm.read();
        (current.stage(), current.board(), current.finale())
    };

    let save_service = ctx.saved_games();
    let load_service = ctx.saved_games();

    rsx! {
        div { class: "game-root",
            if let Some(current) = notice() {
                NoticeBanner { notice: current, on_dismiss: move |()| notice.set(None) }
            }
            match stage {
                SessionStage::SelectCharacter => rsx! {
                    CharacterSelect {
                        on_select: move |character| {
                            dispatch.call(GameIntent::SelectCharacter(character));
                        },
                    }
                },
                SessionStage::Playing => rsx! {
                    if let Some(board) = board {
                        Board {
                            board,
                            saved_game: saved_game_state,
                            busy: busy(),
                            on_letter: move |c: char| {
                                if let Ok(letter) = Letter::new(c) {
                                    dispatch.call(GameIntent::SelectLetter(letter));
                                }
                            },
                            on_answer: move |option: String| {
                                dispatch.call(GameIntent::Answer(option));
                            },
                            on_save: move |()| {
                                let saves = save_service.clone();
                                spawn(async move {
                                    busy.set(true);
                                    let working = vm.peek().clone();
                                    let result = working.save(&saves).await;
                                    if result == Notice::Saved {
                                        *save_revision.write() += 1;
                                    }
                                    notice.set(Some(result));
                                    busy.set(false);
                                });
                            },
                            on_load: move |()| {
                                let saves = load_service.clone();
                                spawn(async move {
                                    busy.set(true);
                                    let mut working = vm.peek().clone();
                                    let result = working.load(&saves).await;
                                    if result == Notice::Loaded {
                                        vm.set(working);
                                    }
                                    notice.set(Some(result));
                                    busy.set(false);
                                });
                            },
                            on_reset: move |()| dispatch.call(GameIntent::Reset),
                            on_finish: move |()| dispatch.call(GameIntent::Restart),
                        }
                    }
                    if let Some(finale) = finale {
                        Finale {
                            finale,
                            on_restart: move |()| dispatch.call(GameIntent::Restart),
                        }
                    }
                },
                SessionStage::Win => rsx! {
                    if let Some(finale) = finale {
                        Finale {
                            finale,
                            on_restart: move |()| dispatch.call(GameIntent::Restart),
                        }
                    }
                },
            }
        }
    }
}
