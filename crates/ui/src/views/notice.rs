use dioxus::prelude::*;

use crate::vm::{Notice, NoticeKind};

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Info => "notice notice--info",
        NoticeKind::Error => "notice notice--error",
    }
}

#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let class = notice_class(notice.kind());
    let message = notice.message();

    rsx! {
        div { class: "{class}", role: "status",
            span { class: "notice-text", "{message}" }
            button {
                class: "notice-dismiss",
                r#type: "button",
                aria_label: "Cerrar",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
