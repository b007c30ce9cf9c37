use dioxus::prelude::*;

use crate::views::ViewState;
use crate::vm::{BoardVm, QuestionVm};

const HEART_PATH: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z";

fn saved_game_hint(status: &ViewState<bool>) -> &'static str {
    match status {
        ViewState::Idle | ViewState::Loading => "Buscando partida guardada...",
        ViewState::Ready(true) => "Hay una partida guardada.",
        ViewState::Ready(false) => "Sin partida guardada.",
        ViewState::Error(err) => err.message(),
    }
}

fn progress_class(collected: bool) -> &'static str {
    if collected {
        "progress-letter progress-letter--collected"
    } else {
        "progress-letter"
    }
}

fn tile_class(collected: bool) -> &'static str {
    if collected {
        "letter-tile letter-tile--collected"
    } else {
        "letter-tile"
    }
}

#[component]
pub fn Board(
    board: BoardVm,
    saved_game: ViewState<bool>,
    busy: bool,
    on_letter: EventHandler<char>,
    on_answer: EventHandler<String>,
    on_save: EventHandler<()>,
    on_load: EventHandler<()>,
    on_reset: EventHandler<()>,
    on_finish: EventHandler<()>,
) -> Element {
    let locked = busy || board.game_over;
    let hint = saved_game_hint(&saved_game);

    rsx! {
        div { class: "page board-page", id: "board-root",
            h1 { class: "brand-title", "Burson Gaming" }
            div { class: "board-status",
                div { class: "board-player",
                    span { class: "character-avatar character-avatar--small", "{board.avatar}" }
                    span { class: "character-name", "{board.character_name}" }
                }
                div { class: "board-lives", title: "{board.lives_label}",
                    for index in 0..board.lives {
                        svg {
                            key: "{index}",
                            class: "life-icon",
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "currentColor",
                            path { d: HEART_PATH }
                        }
                    }
                }
                div { class: "board-progress",
                    for tile in board.tiles.iter() {
                        span {
                            key: "progress-{tile.letter}",
                            class: progress_class(tile.collected),
                            "{tile.letter}"
                        }
                    }
                    span { class: "progress-count", "{board.progress_label}" }
                }
            }

            div { class: "letter-row",
                for tile in board.tiles.iter().cloned() {
                    button {
                        key: "tile-{tile.letter}",
                        id: "letter-{tile.letter}",
                        class: tile_class(tile.collected),
                        r#type: "button",
                        disabled: tile.collected || locked,
                        onclick: move |_| on_letter.call(tile.letter),
                        "{tile.letter}"
                    }
                }
            }

            div { class: "board-actions",
                button {
                    id: "board-save",
                    class: "btn btn-light",
                    r#type: "button",
                    disabled: locked,
                    onclick: move |_| on_save.call(()),
                    "Guardar"
                }
                button {
                    id: "board-load",
                    class: "btn btn-light",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_load.call(()),
                    "Cargar"
                }
                button {
                    id: "board-reset",
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_reset.call(()),
                    "Reiniciar"
                }
                button {
                    id: "board-finish",
                    class: "btn btn-danger",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_finish.call(()),
                    "Finalizar"
                }
            }
            p { class: "board-hint", "{hint}" }

            if let Some(question) = board.question.clone() {
                QuestionModal { question, busy, on_answer }
            }
        }
    }
}

#[component]
pub fn QuestionModal(question: QuestionVm, busy: bool, on_answer: EventHandler<String>) -> Element {
    let options = question.options.iter().enumerate().map(|(index, option)| {
        let chosen = option.clone();
        rsx! {
            button {
                key: "{index}",
                id: "option-{index}",
                class: "btn btn-option",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_answer.call(chosen.clone()),
                "{option}"
            }
        }
    });

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                span { class: "modal-letter", "{question.letter}" }
                h3 { class: "modal-prompt", "{question.prompt}" }
                div { class: "modal-options", {options} }
            }
        }
    }
}
