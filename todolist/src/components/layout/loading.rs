use dioxus::prelude::*;

const LOADING_SVG: Asset = asset!("/assets/loading.svg");

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading",
            img {
                src: LOADING_SVG,
                alt: "Loading",
                width: "100",
                height: "100",
            }
        }
    }
}
