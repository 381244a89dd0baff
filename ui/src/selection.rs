//! Which asset's detail pane is shown.

use api::CoinInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selected {
    index: usize,
    ticker: String,
}

/// The current selection: an index into the enabled-coin list together
/// with the ticker found there, or nothing.
///
/// Index and ticker live in one value, so they always change together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<Selected>,
}

impl Selection {
    pub fn select(&mut self, index: usize, ticker: impl Into<String>) {
        self.current = Some(Selected {
            index,
            ticker: ticker.into(),
        });
    }

    /// Points the selection at `default_ticker`, the first entry of the
    /// coin list, or clears it when there is none.
    pub fn initialize(&mut self, default_ticker: Option<&str>) {
        self.current = default_ticker.map(|ticker| Selected {
            index: 0,
            ticker: ticker.to_string(),
        });
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.ticker.as_str())
    }

    pub fn index(&self) -> Option<usize> {
        self.current.as_ref().map(|s| s.index)
    }

    /// Revalidates the selection against the coins enabled right now.
    ///
    /// A ticker still present keeps its selection, with the index moved to
    /// wherever the ticker now sits. Otherwise the selection falls back to
    /// the first enabled coin, or to nothing. Returns true if anything changed.
    pub fn reconcile(&mut self, enabled: &[CoinInfo]) -> bool {
        let position = self
            .current()
            .and_then(|ticker| enabled.iter().position(|c| c.ticker == ticker));

        let next = match position {
            Some(index) => Some(Selected {
                index,
                ticker: enabled[index].ticker.clone(),
            }),
            None => enabled.first().map(|first| Selected {
                index: 0,
                ticker: first.ticker.clone(),
            }),
        };

        let changed = self.current != next;
        self.current = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(tickers: &[&str]) -> Vec<CoinInfo> {
        tickers.iter().map(|t| CoinInfo::new(*t, "")).collect()
    }

    #[test]
    fn select_then_current_returns_the_ticker() {
        let mut selection = Selection::default();
        selection.select(2, "MORTY");
        assert_eq!(selection.current(), Some("MORTY"));
        assert_eq!(selection.index(), Some(2));
    }

    #[test]
    fn reconcile_without_prior_selection_picks_first() {
        let mut selection = Selection::default();
        assert!(selection.reconcile(&coins(&["KMD", "RICK", "MORTY"])));
        assert_eq!(selection.current(), Some("KMD"));
        assert_eq!(selection.index(), Some(0));
    }

    #[test]
    fn initialize_uses_given_default() {
        let mut selection = Selection::default();
        selection.initialize(Some("KMD"));
        assert_eq!(selection.current(), Some("KMD"));
        selection.initialize(None);
        assert_eq!(selection.current(), None);
        assert_eq!(selection.index(), None);
    }

    #[test]
    fn reconcile_keeps_a_present_ticker_and_fixes_its_index() {
        let mut selection = Selection::default();
        selection.select(1, "RICK");
        assert!(!selection.reconcile(&coins(&["KMD", "RICK"])));

        assert!(selection.reconcile(&coins(&["RICK", "KMD"])));
        assert_eq!(selection.current(), Some("RICK"));
        assert_eq!(selection.index(), Some(0));
    }

    #[test]
    fn reconcile_falls_back_when_the_ticker_disappears() {
        let mut selection = Selection::default();
        selection.select(2, "MORTY");
        assert!(selection.reconcile(&coins(&["KMD", "RICK"])));
        assert_eq!(selection.current(), Some("KMD"));

        assert!(selection.reconcile(&[]));
        assert_eq!(selection.current(), None);
        assert!(!selection.reconcile(&[]));
    }
}
