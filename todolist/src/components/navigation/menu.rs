use dioxus::prelude::*;

use crate::components::layout::Loading;
use crate::components::navigation::MenuList;
use crate::components::P;
use crate::hooks::use_menu_state;
use crate::menu::MenuLoad;
use crate::types::TextColor;

/// Sidebar navigation loaded from the menu table.
#[component]
pub fn Menu() -> Element {
    let menu = use_menu_state();
    use_context_provider(|| menu);

    let load = menu.load.read().clone();

    match load {
        MenuLoad::Loading => rsx! { Loading {} },
        MenuLoad::Failed(message) => rsx! {
            P { color: TextColor::Error, "{message}" }
        },
        MenuLoad::Ready(tree) => rsx! {
            nav { class: "menu-wrapper",
                MenuList { items: tree, level: 0 }
            }
        },
    }
}
