//! mm2 legacy JSON-RPC: every request is a POST of
//! `{"userpass": .., "method": .., <params>}` to the daemon's root URL.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value;

use super::Mm2Config;
use crate::coin::Transaction;
use crate::error::BackendError;

#[derive(Deserialize)]
struct VersionResponse {
    result: String,
}

#[derive(Deserialize)]
struct EnabledCoinsResponse {
    result: Vec<EnabledCoin>,
}

#[derive(Deserialize)]
struct EnabledCoin {
    ticker: String,
}

#[derive(Deserialize)]
struct BalanceResponse {
    balance: String,
}

#[derive(Deserialize)]
struct TxHistoryResponse {
    result: TxHistory,
}

#[derive(Deserialize)]
struct TxHistory {
    #[serde(default)]
    transactions: Vec<RawTransaction>,
}

#[derive(Deserialize)]
struct RawTransaction {
    #[serde(default)]
    from: Vec<String>,
    #[serde(default)]
    to: Vec<String>,
    my_balance_change: String,
}

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        Self {
            am_i_sender: raw.my_balance_change.trim_start().starts_with('-'),
            my_balance_change: raw.my_balance_change,
            from: raw.from,
            to: raw.to,
        }
    }
}

/// Turns a raw reply into `T`, mapping `{"error": ..}` bodies to [`BackendError::Rpc`].
fn decode_response<T: DeserializeOwned>(value: Value) -> Result<T, BackendError> {
    if let Some(error) = value.get("error") {
        let msg = match error.as_str() {
            Some(s) => s.to_string(),
            None => error.to_string(),
        };
        return Err(BackendError::Rpc(msg));
    }
    serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))
}

pub struct Mm2Client {
    http: reqwest::Client,
    endpoint: String,
    userpass: String,
}

impl Mm2Client {
    /// Every request, connecting included, is abandoned after
    /// `config.request_timeout`.
    pub fn new(config: &Mm2Config) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.request_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            userpass: config.userpass.clone(),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, BackendError> {
        let mut body = json!({
            "userpass": self.userpass,
            "method": method,
        });
        if let (Some(body), Value::Object(params)) = (body.as_object_mut(), params) {
            body.extend(params);
        }

        let reply: Value = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        decode_response(reply)
    }

    pub async fn version(&self) -> Result<String, BackendError> {
        let reply: VersionResponse = self.call("version", json!({})).await?;
        Ok(reply.result)
    }

    /// Tickers of the enabled coins, in daemon order.
    pub async fn enabled_coins(&self) -> Result<Vec<String>, BackendError> {
        let reply: EnabledCoinsResponse = self.call("get_enabled_coins", json!({})).await?;
        Ok(reply.result.into_iter().map(|c| c.ticker).collect())
    }

    pub async fn my_balance(&self, coin: &str) -> Result<String, BackendError> {
        let reply: BalanceResponse = self.call("my_balance", json!({ "coin": coin })).await?;
        Ok(reply.balance)
    }

    pub async fn my_tx_history(&self, coin: &str, limit: usize) -> Result<Vec<Transaction>, BackendError> {
        let reply: TxHistoryResponse = self
            .call("my_tx_history", json!({ "coin": coin, "limit": limit }))
            .await?;
        Ok(reply
            .result
            .transactions
            .into_iter()
            .map(Transaction::from)
            .collect())
    }
}
