use dioxus::prelude::*;

use crate::components::coin_icon::Spinner;
use crate::components::pico::Card;

#[allow(non_snake_case)]
#[component]
pub fn LoadingScreen(message: String) -> Element {
    rsx! {
        Card {
            div {
                style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;",
                Spinner {}
                p { "{message}" }
            }
        }
    }
}
