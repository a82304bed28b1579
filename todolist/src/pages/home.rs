use dioxus::prelude::*;

use crate::components::Htag;
use crate::types::HeadingLevel;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page-main",
            Htag { tag: HeadingLevel::H1, "Home" }
        }
    }
}
