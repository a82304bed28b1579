use dioxus::prelude::*;

use crate::components::Htag;
use crate::types::HeadingLevel;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            Htag { tag: HeadingLevel::H1, "Footer" }
        }
    }
}
