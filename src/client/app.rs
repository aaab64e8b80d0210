use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        router::Route,
        store::{AppContext, UserState},
    },
    config::Config,
};

#[component]
pub fn App() -> Element {
    let context = use_context_provider(|| AppContext::new(Config::load()));
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Resolve the session once on load
    use_future(move || {
        let api = context.api.clone();

        async move {
            let user = match api.get_current_user().await {
                Ok(user) => user,
                Err(e) => {
                    tracing::error!("Failed to fetch current user: {}", e);
                    None
                }
            };

            if let Some(user) = &user {
                tracing::info!("Signed in as {} ({})", user.name, user.role.as_str());
            }

            user_state.set(UserState {
                user,
                fetched: true,
            });
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
