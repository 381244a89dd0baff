//! Small layout and control components shared by the dashboard screens.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A two column grid: list on the left, detail on the right.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

/// A card for grouping related content.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    disabled: bool,
}

pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "{props.button_type.to_class()}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    title: String,
    on_close: EventHandler<()>,
    children: Element,
}

/// A dialog that closes on its close link, a backdrop click or Escape.
///
/// Whether it is shown is decided by the caller; the modal only reports
/// that the user wants it gone.
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        dialog {
            open: true,
            autofocus: true,
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            // The <article> stops clicks from reaching the backdrop.
            article {
                onclick: |evt| evt.stop_propagation(),
                header {
                    h3 { style: "margin-bottom: 0;", "{props.title}" }
                    a {
                        href: "#",
                        "aria-label": "Close",
                        class: "close",
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_close.call(());
                        },
                        "✕"
                    }
                }
                {props.children}
            }
        }
    }
}
