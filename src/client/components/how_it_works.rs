use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleInfo;
use dioxus_free_icons::Icon;

const STEPS: [&str; 6] = [
    "Submit a tire request for a registered vehicle",
    "Your supervisor will review and approve your request",
    "The technical manager will perform a technical review",
    "An engineer will provide the final technical approval",
    "Once approved, your request will be marked as complete",
    "You will be notified when your tires are ready",
];

#[component]
pub fn HowItWorks() -> Element {
    rsx!(
        div {
            class: "card shadow-sm w-full bg-base-200",
            div {
                class: "card-body",
                div { class: "flex items-center gap-2",
                    Icon { width: 20, height: 20, icon: FaCircleInfo }
                    h2 { class: "card-title", "How Tire Requests Work" }
                }
                ol { class: "list-decimal pl-6 flex flex-col gap-1",
                    for step in STEPS {
                        li { "{step}" }
                    }
                }
            }
        }
    )
}
