use dioxus::prelude::*;

use crate::components::navigation::Menu;

/// Left column hosting the menu for the whole page lifetime.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    span { "Todolist" }
                }
            }

            div { class: "sidebar-content",
                Menu {}
            }
        }
    }
}
