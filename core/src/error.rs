use thiserror::Error;
use tickbridge_signals::SignalError;

/// Failure signalled by the external subscription control, passed through
/// unmodified. `code` is the collaborator's return code (negative on the
/// wire for rejected calls).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("broker call failed with code {code}: {message}")]
pub struct BrokerError {
    pub code: i32,
    pub message: String,
}

impl BrokerError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

/// Errors surfaced by a real-data dispatch: either a listener failed during
/// the broadcast, or a deferred removal flush failed at the broker boundary.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error(transparent)]
    Signal(#[from] SignalError),
    #[error(transparent)]
    Broker(#[from] BrokerError),
}
