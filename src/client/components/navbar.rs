use dioxus::prelude::*;

use crate::client::{
    router::Route,
    store::{AppContext, UserState},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Navbar() -> Element {
    let context = use_context::<AppContext>();
    let user_state = use_context::<Signal<UserState>>();

    let state = user_state.read();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start gap-4",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl", "TireFlow" }
                        p { class: "text-xs", "v{VERSION}" }
                    }
                }
                if state.user.is_some() {
                    Link { to: Route::Dashboard {}, class: "btn btn-ghost btn-sm", "My Requests" }
                }
                if state.review_stage().is_some() {
                    Link { to: Route::Review {}, class: "btn btn-ghost btn-sm", "Review" }
                }
            }
            div {
                class: "navbar-end gap-2",
                if let Some(user) = &state.user {
                    p { class: "text-sm", "{user.name}" }
                    a { href: context.api.logout_url(),
                        button { class: "btn btn-outline", "Logout" }
                    }
                } else if state.fetched {
                    a { href: context.api.login_url(),
                        button { class: "btn btn-primary", "Login" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
