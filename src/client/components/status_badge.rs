use dioxus::prelude::*;

use crate::model::{request::TireRequest, status::RequestStatus};

#[component]
pub fn StatusBadge(status: RequestStatus) -> Element {
    let class = status.severity().css_class();
    let label = status.label();

    rsx!(
        span { class: "badge {class} whitespace-nowrap", "{label}" }
    )
}

/// Badge plus a check mark for every stage the request has passed.
#[component]
pub fn StatusCell(request: TireRequest) -> Element {
    rsx!(
        div { class: "flex flex-col gap-1",
            StatusBadge { status: request.status.clone() }
            div { class: "flex flex-col text-xs opacity-70",
                for stage in request.passed_stages() {
                    span { "✓ " {stage.label()} }
                }
            }
        }
    )
}
