use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;

#[allow(non_snake_case)]
#[component]
pub fn TradeScreen(message: String) -> Element {
    rsx! {
        Card {
            h3 { "Trade" }
            EmptyState {
                title: message,
            }
        }
    }
}
