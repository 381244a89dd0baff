//=============================================================================
// File: src/screens/portfolio.rs
//=============================================================================
use api::CoinInfo;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::coin_icon::CoinIcon;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Modal;
use crate::events::UiEvent;
use crate::plan::CoinRow;
use crate::plan::DetailContent;
use crate::plan::DetailPlan;
use crate::plan::DetailTab;
use crate::plan::PortfolioPlan;
use crate::plan::TxRow;
use crate::plan::NO_TRANSACTIONS;

#[component]
fn CoinListItem(row: CoinRow, on_event: EventHandler<UiEvent>) -> Element {
    let CoinRow {
        index,
        ticker,
        label,
        icon,
        selected,
    } = row;
    let picked = ticker.clone();

    rsx! {
        li {
            a {
                href: "#",
                class: { if selected { "selected" } else { "" } },
                onclick: move |event| {
                    event.prevent_default();
                    on_event.call(UiEvent::SelectAsset {
                        index,
                        ticker: picked.clone(),
                    });
                },
                CoinIcon {
                    icon,
                    ticker,
                }
                span { "{label}" }
            }
        }
    }
}

#[component]
fn CoinList(coins: Vec<CoinRow>, on_event: EventHandler<UiEvent>) -> Element {
    rsx! {
        ul {
            class: "coin-list",
            for row in coins {
                CoinListItem {
                    row,
                    on_event,
                }
            }
        }
    }
}

/// One transaction, colored by direction.
#[component]
fn TransactionRow(row: TxRow) -> Element {
    let color = row.direction.color().css();
    rsx! {
        tr {
            td {
                style: "color: {color};",
                "{row.direction.label()}"
            }
            td {
                style: "color: {color}; text-align: right;",
                "{row.amount}"
            }
            td {
                class: "muted",
                "{row.fiat_value}"
            }
            td {
                style: "word-break: break-all;",
                "{row.counterparty}"
            }
        }
    }
}

#[component]
fn DetailTabs(active: DetailTab, on_event: EventHandler<UiEvent>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for tab in DetailTab::iter() {
                    li {
                        a {
                            href: "#",
                            class: { if tab == active { "active-tab" } else { "" } },
                            onclick: move |event| {
                                event.prevent_default();
                                on_event.call(UiEvent::SelectDetailTab(tab));
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
fn CoinDetail(detail: DetailPlan, on_event: EventHandler<UiEvent>) -> Element {
    let DetailPlan {
        title,
        balance_line,
        tab,
        content,
        ..
    } = detail;

    rsx! {
        div {
            class: "coin-detail",
            h3 { "{title}" }
            p { "{balance_line}" }
            DetailTabs {
                active: tab,
                on_event,
            }
            match content {
                DetailContent::Transactions(rows) => rsx! {
                    table {
                        tbody {
                            for row in rows {
                                TransactionRow { row }
                            }
                        }
                    }
                },
                DetailContent::NoTransactions => rsx! {
                    EmptyState {
                        title: NO_TRANSACTIONS.to_string(),
                    }
                },
                DetailContent::WorkInProgress(message) => rsx! {
                    EmptyState {
                        title: message,
                    }
                },
            }
        }
    }
}

#[component]
fn EnableDialog(candidates: Vec<CoinInfo>, on_event: EventHandler<UiEvent>) -> Element {
    rsx! {
        Modal {
            title: "Enableable coins".to_string(),
            on_close: move |_| on_event.call(UiEvent::CloseEnableDialog),
            if candidates.is_empty() {
                p { class: "muted", "Every known coin is already enabled." }
            } else {
                ul {
                    for coin in candidates {
                        li {
                            key: "{coin.ticker}",
                            "{coin.label()} ({coin.ticker})"
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PortfolioScreen(plan: PortfolioPlan, on_event: EventHandler<UiEvent>) -> Element {
    let PortfolioPlan {
        total_balance,
        coins,
        detail,
        enable_dialog,
    } = plan;

    rsx! {
        Card {
            div {
                class: "portfolio-header",
                h3 { "{total_balance}" }
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| on_event.call(UiEvent::OpenEnableDialog),
                    "Enable a coin"
                }
            }
            Grid {
                CoinList {
                    coins,
                    on_event,
                }
                match detail {
                    Some(detail) => rsx! {
                        CoinDetail {
                            detail,
                            on_event,
                        }
                    },
                    None => rsx! {
                        EmptyState {
                            title: "No coin enabled".to_string(),
                            description: Some("Enabled coins and their history show up here.".to_string()),
                        }
                    },
                }
            }
        }
        if let Some(dialog) = enable_dialog {
            EnableDialog {
                candidates: dialog.candidates,
                on_event,
            }
        }
    }
}
