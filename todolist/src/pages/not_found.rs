use dioxus::prelude::*;

use crate::components::{Htag, P};
use crate::types::{HeadingLevel, TextSize};
use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        div { class: "not-found",
            Htag { tag: HeadingLevel::H1, "404" }
            P { "Страница не найдена" }
            P { size: TextSize::Large,
                Link { class: "not-found-link", to: Route::Home {}, "Вернуться на главную" }
            }
        }
    }
}
