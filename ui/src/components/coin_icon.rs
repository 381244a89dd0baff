use dioxus::prelude::*;

use crate::plan::IconRef;

/// A coin's scaled icon, or its first letter when no icon was loaded.
#[component]
pub fn CoinIcon(icon: IconRef, ticker: String) -> Element {
    match icon {
        IconRef::Sprite(sprite) => rsx! {
            img {
                class: "coin-icon",
                src: "{sprite.data_uri()}",
                width: "{sprite.width()}",
                height: "{sprite.height()}",
                alt: "{ticker}",
            }
        },
        IconRef::Placeholder(glyph) => rsx! {
            span {
                class: "coin-placeholder",
                title: "{ticker}",
                "{glyph}"
            }
        },
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! { div { class: "spinner", role: "progressbar" } }
}
