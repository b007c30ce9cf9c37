use burson_core::model::Character;
use dioxus::prelude::*;

use crate::vm::map_character_cards;

#[component]
pub fn CharacterSelect(on_select: EventHandler<Character>) -> Element {
    let cards = map_character_cards();

    rsx! {
        div { class: "page character-page",
            h1 { class: "brand-title", "Burson Gaming" }
            p { class: "view-subtitle", "Elige tu personaje" }
            div { class: "character-grid",
                for card in cards {
                    button {
                        key: "{card.id}",
                        id: "character-{card.id}",
                        class: "character-card",
                        r#type: "button",
                        onclick: move |_| on_select.call(card.character),
                        span { class: "character-avatar", "{card.avatar}" }
                        span { class: "character-name", "{card.name}" }
                    }
                }
            }
        }
    }
}
