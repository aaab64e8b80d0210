use std::time::Duration;

use dioxus::prelude::*;

use crate::{service::notice::NoticeBoard, util::time::sleep};

/// Hides the notice identified by `serial` after `after`, unless a newer one replaced it.
pub fn schedule_dismiss(mut board: Signal<NoticeBoard>, serial: u64, after: Duration) {
    spawn(async move {
        sleep(after).await;
        board.write().dismiss(serial);
    });
}

#[component]
pub fn NoticeBanner(board: Signal<NoticeBoard>) -> Element {
    let notice = board.read().current().cloned();

    rsx!(
        if let Some(notice) = notice {
            div {
                role: "alert",
                class: format!("alert {}", notice.kind.css_class()),
                span { "{notice.message}" }
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| board.write().clear(),
                    "✕"
                }
            }
        }
    )
}
