use thiserror::Error;

/// Why a query against the daemon could not be answered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("unknown coin: {0}")]
    NotFound(String),

    #[error("backend is not running")]
    NotRunning,

    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl BackendError {
    /// True when the daemon itself is unreachable, as opposed to a single
    /// query being rejected.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::NotRunning | Self::Transport(_))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        let msg = e.to_string();
        if e.is_connect() || e.is_timeout() || looks_like_connection_error(&msg) {
            Self::Transport(msg)
        } else if e.is_decode() {
            Self::Decode(msg)
        } else {
            Self::Rpc(msg)
        }
    }
}

fn looks_like_connection_error(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("connection refused")
        || msg.contains("broken pipe")
        || msg.contains("network unreachable")
        || msg.contains("connection reset")
        || msg.contains("failed to connect")
        || msg.contains("channel closed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_class_errors_count_as_connection_errors() {
        assert!(BackendError::NotRunning.is_connection_error());
        assert!(BackendError::Transport("refused".into()).is_connection_error());
        assert!(!BackendError::NotFound("XYZ".into()).is_connection_error());
        assert!(!BackendError::Rpc("No such coin".into()).is_connection_error());
        assert!(!BackendError::Decode("eof".into()).is_connection_error());
    }

    #[test]
    fn connection_heuristic_is_case_insensitive() {
        assert!(looks_like_connection_error("Connection Refused (os error 111)"));
        assert!(!looks_like_connection_error("invalid userpass"));
    }
}
