use dioxus::prelude::*;

use crate::types::{HeadingLevel, TextColor, TextSize};

#[component]
pub fn Htag(tag: HeadingLevel, children: Element) -> Element {
    match tag {
        HeadingLevel::H1 => rsx! { h1 { class: "htag htag-h1", {children} } },
        HeadingLevel::H2 => rsx! { h2 { class: "htag htag-h2", {children} } },
        HeadingLevel::H3 => rsx! { h3 { class: "htag htag-h3", {children} } },
    }
}

#[component]
pub fn P(
    #[props(default)] size: TextSize,
    #[props(default)] color: TextColor,
    children: Element,
) -> Element {
    let size_class = match size {
        TextSize::Small => "p-small",
        TextSize::Medium => "p-medium",
        TextSize::Large => "p-large",
    };
    let color_class = match color {
        TextColor::Primary => "",
        TextColor::Error => " p-error",
    };

    rsx! {
        p { class: "p {size_class}{color_class}", {children} }
    }
}
