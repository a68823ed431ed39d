use thiserror::Error;

/// Boxed error type carried by listeners across the dispatch boundary.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum SignalError {
    /// The schema registry has no signature for the requested event kind.
    /// Fatal to the dispatcher being constructed.
    #[error("unknown event kind {0:?}")]
    UnknownEventKind(String),

    /// The candidate listener's declared arity does not match the event
    /// kind's signature. Local to the failed register call.
    #[error("listener arity {found} does not match event kind {kind:?} arity {expected}")]
    IncompatibleListener { kind: &'static str, expected: usize, found: usize },

    /// A listener failed mid-broadcast. Listeners registered after it were
    /// not invoked for that dispatch; earlier ones are not rolled back.
    #[error("listener failed during {kind:?} dispatch: {source}")]
    ListenerFailed { kind: &'static str, source: ListenerError },
}
