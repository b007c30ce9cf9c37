use dioxus::prelude::*;

use crate::vm::FinaleVm;

#[component]
pub fn Finale(finale: FinaleVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "{finale.class()}",
            h2 { class: "finale-title", "{finale.title}" }
            button {
                id: "finale-restart",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Reiniciar"
            }
        }
    }
}
