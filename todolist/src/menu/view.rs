//! Per-node presentation rules for the nested menu.

use crate::menu::tree::MenuNode;
use crate::types::MenuRecord;

/// What activating a node's title does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Follow the link.
    Navigate,
    /// Open or close the submenu instead of following any link.
    Toggle,
    Inert,
}

pub fn click_action(node: &MenuNode) -> ClickAction {
    if node.has_children() {
        ClickAction::Toggle
    } else if node.record.link().is_some() {
        ClickAction::Navigate
    } else {
        ClickAction::Inert
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleStyle {
    Heading,
    Body,
}

pub fn title_style(level: usize) -> TitleStyle {
    if level == 0 {
        TitleStyle::Heading
    } else {
        TitleStyle::Body
    }
}

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "Close submenu"
    } else {
        "Open submenu"
    }
}

pub fn link_target(record: &MenuRecord) -> &str {
    record.target.as_deref().filter(|t| !t.is_empty()).unwrap_or("_self")
}

pub fn opens_new_tab(record: &MenuRecord) -> bool {
    link_target(record) == "_blank"
}

pub fn list_class(level: usize) -> &'static str {
    if level > 0 {
        "menu-list submenu-list"
    } else {
        "menu-list"
    }
}

pub fn item_class(node: &MenuNode) -> &'static str {
    if node.has_children() {
        "menu-item has-children"
    } else {
        "menu-item"
    }
}

pub fn nested_class(expanded: bool) -> &'static str {
    if expanded {
        "menu-nested menu-nested-open"
    } else {
        "menu-nested"
    }
}

pub fn arrow_class(expanded: bool) -> &'static str {
    if expanded {
        "menu-arrow menu-arrow-open"
    } else {
        "menu-arrow"
    }
}
