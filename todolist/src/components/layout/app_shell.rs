use dioxus::prelude::*;

use crate::components::layout::{Footer, Header, Sidebar};
use crate::Route;

pub const PAGE_LANG: &str = "ru";

/// Script that sets the `lang` attribute on `<html>`.
pub fn document_lang_script(lang: &str) -> String {
    format!("document.documentElement.lang = {:?};", lang)
}

/// Page frame shared by every route.
#[component]
pub fn AppShell() -> Element {
    use_hook(|| {
        document::eval(&document_lang_script(PAGE_LANG));
    });

    rsx! {
        document::Title { "Todolist" }
        document::Meta { name: "description", content: "Local todolist app" }

        div { class: "layout-wrapper",
            Header {}
            Sidebar {}
            main { class: "layout-body",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_targets_document_root() {
        assert_eq!(
            document_lang_script(PAGE_LANG),
            r#"document.documentElement.lang = "ru";"#
        );
    }
}
