use dioxus::prelude::*;

use crate::components::{Htag, P};
use crate::hooks::MenuState;
use crate::menu::view::{
    arrow_class, click_action, item_class, link_target, list_class, nested_class, opens_new_tab,
    title_style, toggle_label, ClickAction, TitleStyle,
};
use crate::menu::MenuNode;
use crate::types::{HeadingLevel, TextSize};

/// One `ul` per depth; each item renders its own children one level deeper.
#[component]
pub fn MenuList(items: Vec<MenuNode>, level: usize) -> Element {
    rsx! {
        ul { class: list_class(level),
            for (idx, node) in items.into_iter().enumerate() {
                {
                    let id = node.id();
                    rsx! {
                        MenuItem { key: "{idx}-{id}", node, level }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MenuItem(node: MenuNode, level: usize) -> Element {
    let mut menu = use_context::<MenuState>();

    let id = node.id();
    let has_children = node.has_children();
    let is_open = menu.is_expanded(id);
    let action = click_action(&node);
    let title = node.title().to_string();

    let label = match title_style(level) {
        TitleStyle::Heading => rsx! { Htag { tag: HeadingLevel::H2, "{title}" } },
        TitleStyle::Body => rsx! { P { size: TextSize::Small, "{title}" } },
    };

    let entry = match node.record.link() {
        // A parent that also has a url opens its submenu instead of navigating
        Some(url) if action == ClickAction::Toggle => rsx! {
            a {
                class: "menu-link",
                href: "{url}",
                target: link_target(&node.record),
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    menu.toggle(id);
                },
                {label}
            }
        },
        Some(url) => rsx! {
            Link {
                class: "menu-link",
                to: url.to_string(),
                new_tab: opens_new_tab(&node.record),
                {label}
            }
        },
        None => rsx! {
            div {
                class: "menu-header",
                onclick: move |_| {
                    if action == ClickAction::Toggle {
                        menu.toggle(id);
                    }
                },
                {label}
            }
        },
    };

    rsx! {
        li { class: item_class(&node),
            div { class: "menu-item-wrapper",
                {entry}

                if has_children {
                    button {
                        class: arrow_class(is_open),
                        aria_label: toggle_label(is_open),
                        onclick: move |_| {
                            menu.toggle(id);
                        },
                        "▼"
                    }
                }
            }

            if has_children {
                div { class: nested_class(is_open),
                    MenuList { items: node.children.clone(), level: level + 1 }
                }
            }
        }
    }
}
