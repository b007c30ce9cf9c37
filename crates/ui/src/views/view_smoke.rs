use std::sync::Arc;

use burson_core::model::{Character, Letter, QuestionBank};
use burson_core::time::fixed_clock;
use dioxus::prelude::*;
use services::{GameServices, SilentCue};

use super::test_harness::{drive_dom, setup_game_harness};
use crate::views::{Board, Finale, NoticeBanner, ViewState};
use crate::vm::{BoardVm, FinaleVm, GameIntent, GameVm, Notice};

#[derive(Props, Clone, PartialEq)]
struct BoardHarnessProps {
    board: BoardVm,
    saved_game: ViewState<bool>,
}

#[component]
fn BoardHarness(props: BoardHarnessProps) -> Element {
    rsx! {
        Board {
            board: props.board.clone(),
            saved_game: props.saved_game.clone(),
            busy: false,
            on_letter: move |_| {},
            on_answer: move |_| {},
            on_save: move |()| {},
            on_load: move |()| {},
            on_reset: move |()| {},
            on_finish: move |()| {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NoticeHarnessProps {
    notice: Notice,
}

#[component]
fn NoticeHarness(props: NoticeHarnessProps) -> Element {
    rsx! { NoticeBanner { notice: props.notice, on_dismiss: move |()| {} } }
}

fn playing_vm(intents: Vec<GameIntent>) -> GameVm {
    let services = GameServices::in_memory(fixed_clock(), QuestionBank::standard());
    let mut vm = GameVm::new(services.new_session(Arc::new(SilentCue)));
    vm.apply(GameIntent::SelectCharacter(Character::Bursonlina));
    for intent in intents {
        vm.apply(intent);
    }
    vm
}

fn render_board(board: BoardVm, saved_game: ViewState<bool>) -> String {
    let props = BoardHarnessProps { board, saved_game };
    let mut dom = VirtualDom::new_with_props(BoardHarness, props);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_starts_at_character_selection() {
    let mut harness = setup_game_harness();
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Elige tu personaje"), "missing prompt in {html}");
    assert!(html.contains("Bursonlino"), "missing male avatar in {html}");
    assert!(html.contains("Bursonlina"), "missing female avatar in {html}");
    assert!(!html.contains("Guardar"), "board rendered too early in {html}");
}

#[test]
fn board_smoke_renders_letters_and_controls() {
    let vm = playing_vm(vec![
        GameIntent::SelectLetter(Letter::new('B').unwrap()),
        GameIntent::Answer("Twitch, YouTube Gaming y Kick.".into()),
    ]);
    let html = render_board(vm.board().unwrap(), ViewState::Ready(false));

    for label in ["Guardar", "Cargar", "Reiniciar", "Finalizar"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("letter-tile--collected"), "missing collected tile in {html}");
    assert!(html.contains("1/6"), "missing progress in {html}");
    assert!(html.contains("Sin partida guardada."), "missing hint in {html}");
    assert!(!html.contains("modal-backdrop"), "unexpected modal in {html}");
}

#[test]
fn board_smoke_renders_open_question() {
    let vm = playing_vm(vec![GameIntent::SelectLetter(Letter::new('S').unwrap())]);
    let html = render_board(vm.board().unwrap(), ViewState::Loading);

    assert!(html.contains("modal-backdrop"), "missing modal in {html}");
    assert!(
        html.contains("Counter-Strike 2 y League of Legends."),
        "missing option in {html}"
    );
    assert!(html.contains("Buscando partida guardada..."), "missing hint in {html}");
}

#[derive(Props, Clone, PartialEq)]
struct FinaleHarnessProps {
    finale: FinaleVm,
}

#[component]
fn FinaleHarness(props: FinaleHarnessProps) -> Element {
    rsx! { Finale { finale: props.finale.clone(), on_restart: move |()| {} } }
}

#[test]
fn finale_smoke_renders_loss_message() {
    let wrong = || GameIntent::Answer("Netflix, HBO Max y Disney+.".into());
    let b = Letter::new('B').unwrap();
    let vm = playing_vm(vec![
        GameIntent::SelectLetter(b),
        wrong(),
        GameIntent::SelectLetter(b),
        wrong(),
        GameIntent::SelectLetter(b),
        wrong(),
    ]);
    let finale = vm.finale().unwrap();

    let mut dom = VirtualDom::new_with_props(FinaleHarness, FinaleHarnessProps { finale });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("¡Perdiste todas tus vidas!"), "missing title in {html}");
    assert!(html.contains("finale--loss"), "missing tone class in {html}");
    assert!(html.contains("Reiniciar"), "missing restart in {html}");
}

#[test]
fn notice_smoke_renders_message() {
    let mut dom = VirtualDom::new_with_props(
        NoticeHarness,
        NoticeHarnessProps {
            notice: Notice::NoSavedGame,
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("No hay partida guardada."), "missing message in {html}");
    assert!(html.contains("notice--info"), "missing kind class in {html}");
}
