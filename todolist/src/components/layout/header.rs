use dioxus::prelude::*;

use crate::components::Htag;
use crate::types::HeadingLevel;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            Htag { tag: HeadingLevel::H1, "Header" }
        }
    }
}
