use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Dashboard, Home, NotFound, Review},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/review")]
    Review {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
