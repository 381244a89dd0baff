//! Per-frame orchestration of the dashboard.

use api::fiat_amount::FiatAmount;
use api::price_lookup::Holding;
use api::price_lookup::PriceLookup;
use api::Backend;
use api::CoinInfo;
use api::Transaction;
use dioxus_logger::tracing::debug;

use crate::events::FrameInput;
use crate::events::UiEvent;
use crate::gate::LivenessGate;
use crate::hot_reload::HotReload;
use crate::icons::IconCache;
use crate::plan::Body;
use crate::plan::CoinRow;
use crate::plan::DashboardPlan;
use crate::plan::DetailContent;
use crate::plan::DetailPlan;
use crate::plan::DetailTab;
use crate::plan::Direction;
use crate::plan::EnableDialogPlan;
use crate::plan::IconRef;
use crate::plan::PortfolioPlan;
use crate::plan::RenderPlan;
use crate::plan::Tab;
use crate::plan::TabContent;
use crate::plan::TxRow;
use crate::plan::LOADING_MESSAGE;
use crate::plan::NO_VALUE;
use crate::plan::RECEIVE_WORK_IN_PROGRESS;
use crate::plan::SEND_WORK_IN_PROGRESS;
use crate::plan::WORK_IN_PROGRESS;
use crate::registry::CoinRegistry;
use crate::selection::Selection;

/// The result of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub plan: RenderPlan,
    /// The window close control was activated this frame.
    pub quit_requested: bool,
}

/// Owns all dashboard state and turns backend answers into a [`RenderPlan`].
///
/// Everything here runs on the render thread. Backend answers are used for
/// the frame they were read in and never cached across frames.
pub struct PortfolioViewModel<B, P> {
    backend: B,
    prices: P,
    registry: CoinRegistry,
    icons: IconCache,
    selection: Selection,
    gate: LivenessGate,
    hot_reload: Box<dyn HotReload>,
    tab: Tab,
    detail_tab: DetailTab,
    enable_dialog_open: bool,
}

impl<B: Backend, P: PriceLookup> PortfolioViewModel<B, P> {
    /// Builds the view model and initializes hot reload, which may block
    /// until its watcher is up.
    pub fn new(backend: B, prices: P, icons: IconCache, mut hot_reload: Box<dyn HotReload>) -> Self {
        hot_reload.init();

        let registry = CoinRegistry::with_default_coins();
        let mut selection = Selection::default();
        selection.initialize(registry.first_asset().map(|a| a.coin().code()));

        Self {
            backend,
            prices,
            registry,
            icons,
            selection,
            gate: LivenessGate::default(),
            hot_reload,
            tab: Tab::default(),
            detail_tab: DetailTab::default(),
            enable_dialog_open: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn registry(&self) -> &CoinRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hot_reload(&self) -> &dyn HotReload {
        self.hot_reload.as_ref()
    }

    pub fn frame(&mut self, input: FrameInput) -> FrameOutput {
        self.hot_reload.update();

        let mut quit_requested = false;
        let mut picks = Vec::new();
        for event in input.events {
            match event {
                UiEvent::KeyPressed(key) => {
                    if key.is_reload_chord() {
                        self.hot_reload.trigger_reload();
                    }
                }
                UiEvent::SelectAsset { index, ticker } => picks.push((index, ticker)),
                UiEvent::SelectTab(tab) => self.tab = tab,
                UiEvent::SelectDetailTab(tab) => self.detail_tab = tab,
                UiEvent::OpenEnableDialog => self.enable_dialog_open = true,
                UiEvent::CloseEnableDialog => self.enable_dialog_open = false,
                UiEvent::CloseWindow => quit_requested = true,
            }
        }

        let body = if self.gate.is_ready(&self.backend) {
            Body::Dashboard(self.dashboard(picks))
        } else {
            Body::Loading {
                message: LOADING_MESSAGE.to_string(),
            }
        };

        FrameOutput {
            plan: RenderPlan {
                window: input.window,
                body,
            },
            quit_requested,
        }
    }

    fn dashboard(&mut self, picks: Vec<(usize, String)>) -> DashboardPlan {
        let content = match self.tab {
            Tab::Portfolio => TabContent::Portfolio(self.portfolio(picks)),
            Tab::Trade => TabContent::Trade {
                message: WORK_IN_PROGRESS.to_string(),
            },
        };
        DashboardPlan {
            tab: self.tab,
            content,
        }
    }

    fn portfolio(&mut self, picks: Vec<(usize, String)>) -> PortfolioPlan {
        let enabled = self.backend.enabled_coins();
        self.sync_registry(&enabled);

        for (index, ticker) in picks {
            // the row may have moved or vanished since it was drawn
            if enabled.get(index).is_some_and(|c| c.ticker == ticker) {
                self.selection.select(index, ticker);
            } else {
                debug!("ignoring stale pick of {} at {}", ticker, index);
            }
        }
        if self.selection.reconcile(&enabled) {
            debug!("selection is now {:?}", self.selection.current());
        }

        let coins = enabled
            .iter()
            .enumerate()
            .map(|(index, coin)| CoinRow {
                index,
                ticker: coin.ticker.clone(),
                label: coin.label().to_string(),
                icon: self.icon_for(&coin.ticker),
                selected: self.selection.index() == Some(index),
            })
            .collect();

        let detail = self
            .selection
            .current()
            .map(str::to_owned)
            .map(|ticker| self.detail(&ticker));

        let enable_dialog = self.enable_dialog_open.then(|| EnableDialogPlan {
            candidates: self
                .backend
                .enableable_coins()
                .into_iter()
                .filter(|c| !enabled.iter().any(|e| e.ticker == c.ticker))
                .collect(),
        });

        PortfolioPlan {
            total_balance: format!("Total Balance: {}", self.total_balance(&enabled)),
            coins,
            detail,
            enable_dialog,
        }
    }

    /// Keeps the registry's coin set equal to the enabled list.
    fn sync_registry(&mut self, enabled: &[CoinInfo]) {
        if !self.registry.matches(enabled.iter().map(|c| c.ticker.as_str())) {
            self.registry.rebuild(enabled.iter().map(|c| c.ticker.clone()));
            debug!("coin registry rebuilt with {} coin(s)", self.registry.len());
        }
    }

    fn icon_for(&self, ticker: &str) -> IconRef {
        match self.icons.get(ticker) {
            Some(sprite) => IconRef::Sprite(sprite.clone()),
            None => IconRef::Placeholder(ticker.chars().next().unwrap_or('?')),
        }
    }

    fn total_balance(&self, enabled: &[CoinInfo]) -> String {
        let holdings: Option<Vec<Holding>> = enabled
            .iter()
            .map(|coin| {
                self.backend.balance(&coin.ticker).ok().map(|amount| Holding {
                    ticker: coin.ticker.clone(),
                    amount,
                })
            })
            .collect();
        fiat_text(holdings.and_then(|h| self.prices.portfolio_total(&h)))
    }

    fn detail(&self, ticker: &str) -> DetailPlan {
        // unknown tickers come back as an empty record
        let info = self.backend.coin_info(ticker);
        let title = if info.label().is_empty() {
            ticker.to_string()
        } else {
            info.label().to_string()
        };

        let balance = match self.backend.balance(ticker) {
            Ok(balance) => balance,
            Err(e) => {
                debug!("balance of {} unavailable: {}", ticker, e);
                String::new()
            }
        };
        let fiat_balance = fiat_text(self.prices.fiat_value(ticker, &balance));

        let content = match self.detail_tab {
            DetailTab::Transactions => {
                let history = self.backend.transaction_history(ticker);
                if history.is_empty() {
                    DetailContent::NoTransactions
                } else {
                    DetailContent::Transactions(
                        history.iter().map(|tx| self.tx_row(ticker, tx)).collect(),
                    )
                }
            }
            DetailTab::Receive => DetailContent::WorkInProgress(RECEIVE_WORK_IN_PROGRESS.to_string()),
            DetailTab::Send => DetailContent::WorkInProgress(SEND_WORK_IN_PROGRESS.to_string()),
        };

        DetailPlan {
            ticker: ticker.to_string(),
            title,
            balance_line: format!("Balance: {} {} ({})", balance, ticker, fiat_balance),
            balance,
            fiat_balance,
            tab: self.detail_tab,
            content,
        }
    }

    fn tx_row(&self, ticker: &str, tx: &Transaction) -> TxRow {
        let direction = if tx.am_i_sender {
            Direction::Sent
        } else {
            Direction::Received
        };
        let signed = tx.signed_amount();
        TxRow {
            direction,
            amount: format!("{} {}", signed, ticker),
            counterparty: tx.counterparty().unwrap_or_default().to_string(),
            fiat_value: fiat_text(self.prices.fiat_value(ticker, &signed)),
        }
    }
}

fn fiat_text(value: Option<FiatAmount>) -> String {
    match value {
        Some(value) => value.to_string_with_code(),
        None => NO_VALUE.to_string(),
    }
}
