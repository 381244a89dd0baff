// The dashboard core and its Dioxus renderer.
//
// Everything that decides what to show lives in plain modules (`portfolio`,
// `registry`, `selection`, ...) and is driven one frame at a time. The
// components below only draw the resulting `RenderPlan` and feed user input
// back in as `UiEvent`s.

use std::sync::Arc;

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

mod compat;
mod components;
pub mod events;
pub mod gate;
pub mod hot_reload;
pub mod icons;
pub mod plan;
pub mod portfolio;
pub mod registry;
mod screens;
pub mod selection;
mod style;

use api::prefs::user_prefs::UserPrefs;
use api::price_lookup::PriceLookup;
use api::Backend;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Container;
use events::FrameInput;
use events::KeyCode;
use events::KeyPress;
use events::UiEvent;
use events::WindowGeometry;
use icons::IconCache;
use plan::Body;
use plan::DashboardPlan;
use plan::MenuEntry;
use plan::RenderPlan;
use plan::Tab;
use plan::TabContent;
use plan::LOADING_MESSAGE;
use portfolio::PortfolioViewModel;
use screens::loading::LoadingScreen;
use screens::portfolio::PortfolioScreen;
use screens::trade::TradeScreen;

/// Everything the dashboard needs from the host, provided as a Dioxus context.
#[derive(Clone)]
pub struct DashboardContext {
    pub backend: Arc<dyn Backend + Send + Sync>,
    pub prices: Arc<dyn PriceLookup + Send + Sync>,
    pub icons: IconCache,
    pub prefs: UserPrefs,
}

type DashboardModel =
    PortfolioViewModel<Arc<dyn Backend + Send + Sync>, Arc<dyn PriceLookup + Send + Sync>>;

/// Translates a Dioxus key event into the keys the view model knows.
fn key_press(evt: &KeyboardEvent) -> KeyPress {
    let key = match evt.key() {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => KeyCode::Other,
            }
        }
        Key::Escape => KeyCode::Escape,
        _ => KeyCode::Other,
    };
    let modifiers = evt.modifiers();
    KeyPress {
        key,
        control: modifiers.ctrl(),
        shift: modifiers.shift(),
        alt: modifiers.alt(),
    }
}

/// The application menu; its entries are shown but not wired up.
#[component]
fn MenuBar() -> Element {
    rsx! {
        nav {
            class: "menu-bar",
            ul {
                for entry in MenuEntry::iter() {
                    li {
                        a {
                            href: "#",
                            class: { if entry.is_enabled() { "" } else { "disabled" } },
                            "aria-disabled": { if entry.is_enabled() { "false" } else { "true" } },
                            onclick: move |event| event.prevent_default(),
                            "{entry.name()}"
                            if let Some(shortcut) = entry.shortcut() {
                                small { class: "shortcut", "{shortcut}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The top-level navigation tabs.
#[component]
fn Tabs(active: Tab, on_event: EventHandler<UiEvent>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for tab in Tab::iter() {
                    li {
                        a {
                            href: "#",
                            class: { if tab == active { "active-tab" } else { "" } },
                            "aria-current": { if tab == active { "page" } else { "false" } },
                            onclick: move |event| {
                                event.prevent_default();
                                on_event.call(UiEvent::SelectTab(tab));
                            },
                            "{tab.name()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Dashboard(plan: DashboardPlan, on_event: EventHandler<UiEvent>) -> Element {
    let DashboardPlan { tab, content } = plan;

    rsx! {
        Container {
            header {
                class: "app-header",
                MenuBar {}
                Tabs {
                    active: tab,
                    on_event,
                }
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| on_event.call(UiEvent::CloseWindow),
                    "Quit"
                }
            }
            div {
                class: "content",
                match content {
                    TabContent::Portfolio(portfolio) => rsx! {
                        PortfolioScreen {
                            plan: portfolio,
                            on_event,
                        }
                    },
                    TabContent::Trade { message } => rsx! {
                        TradeScreen {
                            message,
                        }
                    },
                }
            }
        }
    }
}

/// The dashboard window body.
///
/// Expects a [`DashboardContext`] in scope. A frame runs every
/// `UserPrefs::frame_interval` and immediately after each user input;
/// `geometry` is asked for the window's placement at the start of every
/// frame, and `on_quit` fires when the user asks to close the window.
#[component]
pub fn DashboardApp(
    geometry: Callback<(), WindowGeometry>,
    on_quit: EventHandler<()>,
) -> Element {
    let ctx = use_context::<DashboardContext>();
    let frame_interval = ctx.prefs.frame_interval();

    let mut model: Signal<DashboardModel> = use_signal(|| {
        PortfolioViewModel::new(
            ctx.backend.clone(),
            ctx.prices.clone(),
            ctx.icons.clone(),
            hot_reload::for_platform(ctx.prefs.live_coding_dir()),
        )
    });
    let mut plan = use_signal(|| None::<RenderPlan>);

    let run_frame = use_callback(move |events: Vec<UiEvent>| {
        let output = model.write().frame(FrameInput {
            window: geometry.call(()),
            events,
        });
        if output.quit_requested {
            dioxus_logger::tracing::info!("quit requested");
            on_quit.call(());
        }
        // Only re-render when something visible changed.
        let unchanged = matches!(&*plan.peek(), Some(current) if *current == output.plan);
        if !unchanged {
            plan.set(Some(output.plan));
        }
    });

    use_future(move || async move {
        let mut ticker = compat::interval::Interval::new(frame_interval);
        loop {
            ticker.tick().await;
            run_frame.call(Vec::new());
        }
    });

    let on_event = move |event: UiEvent| run_frame.call(vec![event]);

    rsx! {
        style {
            "{style::dashboard_css()}"
        }
        div {
            class: "app-main-container",
            tabindex: 0,
            autofocus: true,
            onkeydown: move |evt| run_frame.call(vec![UiEvent::KeyPressed(key_press(&evt))]),
            match plan() {
                Some(RenderPlan {
                    body: Body::Dashboard(dashboard),
                    ..
                }) => rsx! {
                    Dashboard {
                        plan: dashboard,
                        on_event,
                    }
                },
                Some(RenderPlan {
                    body: Body::Loading { message },
                    ..
                }) => rsx! {
                    LoadingScreen {
                        message,
                    }
                },
                None => rsx! {
                    LoadingScreen {
                        message: LOADING_MESSAGE.to_string(),
                    }
                },
            }
        }
    }
}
