//! Read-only snapshots of what the daemon reports about coins.

use serde::Deserialize;
use serde::Serialize;

/// A coin as described by the daemon or the coins configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinInfo {
    pub ticker: String,
    pub display_name: String,
}

impl CoinInfo {
    pub fn new(ticker: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            display_name: display_name.into(),
        }
    }

    /// The human readable name, falling back to the ticker when the daemon
    /// did not provide one.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.ticker
        } else {
            &self.display_name
        }
    }
}

/// One entry of a coin's transaction history.
///
/// `my_balance_change` is an opaque display string, already formatted by
/// the daemon. It may or may not carry a sign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub am_i_sender: bool,
    pub my_balance_change: String,
    pub from: Vec<String>,
    pub to: Vec<String>,
}

impl Transaction {
    /// The balance change with any leading sign removed.
    pub fn unsigned_amount(&self) -> &str {
        self.my_balance_change.trim_start_matches(['-', '+'])
    }

    /// The balance change signed by direction: `-` when sent, `+` when received.
    pub fn signed_amount(&self) -> String {
        let sign = if self.am_i_sender { "-" } else { "+" };
        format!("{}{}", sign, self.unsigned_amount())
    }

    /// The other side of the transaction: the first recipient for outgoing
    /// transactions, the first sender for incoming ones.
    pub fn counterparty(&self) -> Option<&str> {
        let addresses = if self.am_i_sender { &self.to } else { &self.from };
        addresses.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(am_i_sender: bool, change: &str) -> Transaction {
        Transaction {
            am_i_sender,
            my_balance_change: change.to_string(),
            from: vec!["addr2".to_string()],
            to: vec!["addr1".to_string()],
        }
    }

    #[test]
    fn signed_amount_never_doubles_the_sign() {
        assert_eq!(tx(true, "-5").signed_amount(), "-5");
        assert_eq!(tx(true, "5").signed_amount(), "-5");
        assert_eq!(tx(false, "+2").signed_amount(), "+2");
        assert_eq!(tx(false, "2.5").signed_amount(), "+2.5");
    }

    #[test]
    fn counterparty_follows_direction() {
        assert_eq!(tx(true, "-5").counterparty(), Some("addr1"));
        assert_eq!(tx(false, "2").counterparty(), Some("addr2"));
    }

    #[test]
    fn counterparty_is_absent_for_empty_address_lists() {
        let empty = Transaction {
            am_i_sender: true,
            ..Default::default()
        };
        assert_eq!(empty.counterparty(), None);
    }

    #[test]
    fn label_falls_back_to_ticker() {
        assert_eq!(CoinInfo::new("KMD", "Komodo").label(), "Komodo");
        assert_eq!(CoinInfo::new("KMD", "").label(), "KMD");
    }
}
