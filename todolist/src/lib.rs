use dioxus::prelude::*;

// Module Declarations
pub mod components;
pub mod config;
pub mod hooks;
pub mod menu;
pub mod menu_client;
pub mod pages;
pub mod types;

use components::layout::AppShell;
use pages::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
