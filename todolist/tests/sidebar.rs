//! Server-side render of the sidebar before the menu fetch completes.

use dioxus::prelude::*;
use todolist::components::layout::Sidebar;

fn render_sidebar() -> String {
    let mut dom = VirtualDom::new(Sidebar);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_sidebar_mounts_menu_immediately() {
    let html = render_sidebar();
    assert!(html.contains("sidebar-content"));
    assert!(html.contains(r#"alt="Loading""#));
}

#[test]
fn test_sidebar_has_no_control_that_unmounts_menu() {
    let html = render_sidebar();
    assert!(!html.contains("<button"));
}
