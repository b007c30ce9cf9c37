use std::sync::Arc;

use burson_core::model::QuestionBank;
use burson_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::GameServices;

use crate::context::{UiApp, build_app_context};
use crate::views::GameView;

#[derive(Clone)]
struct TestApp {
    services: GameServices,
}

impl UiApp for TestApp {
    fn game_services(&self) -> GameServices {
        self.services.clone()
    }

    fn audio_enabled(&self) -> bool {
        false
    }
}

#[derive(Props, Clone)]
struct GameHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for GameHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn GameHarness(props: GameHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { GameView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_game_harness() -> ViewHarness {
    let services = GameServices::in_memory(fixed_clock(), QuestionBank::standard());
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(GameHarness, GameHarnessProps { app });
    ViewHarness { dom }
}
