use crate::error::BrokerError;
use crate::types::{ScreenId, SubjectId};

/// How a registration combines with subjects already on the screen.
///
/// Wire values are "0" (replace) and "1" (accumulate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterMode {
    /// Drop the screen's existing subject set and register only this list.
    Replace,
    /// Add this list to whatever the screen already carries.
    Accumulate,
}

impl RegisterMode {
    pub fn as_wire(&self) -> &'static str {
        match self {
            RegisterMode::Replace => "0",
            RegisterMode::Accumulate => "1",
        }
    }
}

/// The external subscription control.
///
/// Both calls are blocking and synchronous. The collaborator documents no
/// idempotence guarantee, so callers must not issue `remove_subscription`
/// more than once per (screen, subject) pair unless re-requested. Errors are
/// passed through unmodified; this layer applies no retry or backoff.
pub trait BrokerControl: Send + Sync {
    /// Registers `subjects` (still in wire encoding) under `screen`.
    fn register_subscription(
        &self,
        screen: &ScreenId,
        subjects: &str,
        fields: &str,
        mode: RegisterMode,
    ) -> Result<(), BrokerError>;

    /// Removes the subscription of `subject` under `screen`. Either side may
    /// be the reserved "ALL" sentinel for bulk removal.
    fn remove_subscription(&self, screen: &ScreenId, subject: &SubjectId) -> Result<(), BrokerError>;
}
