use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{HowItWorks, Page},
    router::Route,
    store::{AppContext, UserState},
};

#[component]
pub fn LoginButton() -> Element {
    let context = use_context::<AppContext>();
    let user_state = use_context::<Signal<UserState>>();

    let state = user_state.read();

    rsx!(
        ul { class: "flex gap-2",
            if state.user.is_some() {
                li {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary w-36",
                        "My Requests"
                    }
                }
                if state.review_stage().is_some() {
                    li {
                        Link {
                            to: Route::Review {},
                            class: "btn btn-secondary w-36",
                            "Review Requests"
                        }
                    }
                }
            } else if state.fetched {
                li {
                    a { href: context.api.login_url(),
                        button { class: "btn btn-primary w-36", "Login" }
                    }
                }
            } else {
                li { span { class: "loading loading-dots" } }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "TireFlow" }
        Meta {
            name: "description",
            content: "Tire replacement requests and approvals for fleet vehicles."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6",
                div { class: "flex flex-col items-center gap-2",
                    p { class: "text-3xl font-bold", "TireFlow" }
                    p { class: "opacity-70",
                        "Request tire replacements for your vehicle and track them through approval."
                    }
                }
                LoginButton { }
                div { class: "w-full max-w-3xl",
                    HowItWorks { }
                }
            }
        }
    )
}
