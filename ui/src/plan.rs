//! What to draw this frame.
//!
//! The view model produces a [`RenderPlan`]; renderers only translate it
//! into drawing calls and never query the backend themselves.

use api::CoinInfo;

use crate::events::WindowGeometry;
use crate::icons::Sprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

pub const BRIGHT: Rgb = Rgb(0, 149, 143);
pub const DARK: Rgb = Rgb(25, 40, 56);
pub const OUTGOING: Rgb = Rgb(255, 52, 0);
pub const INCOMING: Rgb = Rgb(80, 255, 118);
pub const MUTED: Rgb = Rgb(128, 128, 128);

pub const LOADING_MESSAGE: &str = "Loading, please wait...";
pub const NO_TRANSACTIONS: &str = "No transactions";
pub const WORK_IN_PROGRESS: &str = "Work in progress";
pub const RECEIVE_WORK_IN_PROGRESS: &str = "Work in progress, will receive coins here";
pub const SEND_WORK_IN_PROGRESS: &str = "Work in progress, will send coins here";
/// Shown wherever a fiat value is unknown.
pub const NO_VALUE: &str = "-";

/// Top-level dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter, strum::IntoStaticStr)]
pub enum Tab {
    #[default]
    Portfolio,
    Trade,
}

impl Tab {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Entries of the header menu. None of them does anything yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::IntoStaticStr)]
pub enum MenuEntry {
    Open,
    Settings,
}

impl MenuEntry {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn shortcut(&self) -> Option<&'static str> {
        match self {
            Self::Open => Some("Ctrl+O"),
            Self::Settings => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        false
    }
}

/// Tabs of the selected coin's detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter, strum::IntoStaticStr)]
pub enum DetailTab {
    #[default]
    Transactions,
    Receive,
    Send,
}

impl DetailTab {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub window: WindowGeometry,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Loading { message: String },
    Dashboard(DashboardPlan),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPlan {
    pub tab: Tab,
    pub content: TabContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    Portfolio(PortfolioPlan),
    Trade { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioPlan {
    pub total_balance: String,
    pub coins: Vec<CoinRow>,
    pub detail: Option<DetailPlan>,
    pub enable_dialog: Option<EnableDialogPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IconRef {
    Sprite(Sprite),
    /// No icon was loaded for the coin; draw this glyph instead.
    Placeholder(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinRow {
    pub index: usize,
    pub ticker: String,
    pub label: String,
    pub icon: IconRef,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPlan {
    pub ticker: String,
    pub title: String,
    /// Empty when the balance query failed.
    pub balance: String,
    pub fiat_balance: String,
    pub balance_line: String,
    pub tab: DetailTab,
    pub content: DetailContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    Transactions(Vec<TxRow>),
    NoTransactions,
    WorkInProgress(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sent,
    Received,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Sent => "Sent",
            Direction::Received => "Received",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Direction::Sent => OUTGOING,
            Direction::Received => INCOMING,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TxRow {
    pub direction: Direction,
    /// Signed amount with ticker suffix, e.g. "-5 KMD".
    pub amount: String,
    pub counterparty: String,
    pub fiat_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnableDialogPlan {
    pub candidates: Vec<CoinInfo>,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tabs_are_listed_in_display_order() {
        let names: Vec<_> = Tab::iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Portfolio", "Trade"]);

        let names: Vec<_> = DetailTab::iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Transactions", "Receive", "Send"]);
    }

    #[test]
    fn menu_entries_are_listed_and_disabled() {
        let names: Vec<_> = MenuEntry::iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Open", "Settings"]);
        assert_eq!(MenuEntry::Open.shortcut(), Some("Ctrl+O"));
        assert!(MenuEntry::iter().all(|e| !e.is_enabled()));
    }

    #[test]
    fn colors_render_as_css() {
        assert_eq!(BRIGHT.css(), "rgb(0, 149, 143)");
        assert_eq!(Direction::Sent.color(), OUTGOING);
        assert_eq!(Direction::Received.label(), "Received");
    }
}
