use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::{
    error::SignalError,
    listener::SignalListener,
    schema::EventSignature,
    value::SignalValue,
};

/// Thread-safe ordered broadcast for a single named event kind.
///
/// Listeners are held behind one lock. Dispatch snapshots the current set and
/// invokes outside the lock, so a listener may register or unregister from
/// within its own invocation without deadlocking, and concurrent registration
/// changes never corrupt an in-progress broadcast.
pub struct SignalDispatcher {
    signature: &'static EventSignature,
    listeners: Mutex<Vec<Arc<dyn SignalListener>>>,
}

impl std::fmt::Debug for SignalDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalDispatcher")
            .field("kind", &self.signature.name)
            .field("listeners", &self.listeners.lock().unwrap().len())
            .finish()
    }
}

impl SignalDispatcher {
    /// Dispatcher for a kind name resolved through the schema registry.
    pub fn new(kind: &str) -> Result<Self, SignalError> {
        let signature = EventSignature::from_name(kind)
            .ok_or_else(|| SignalError::UnknownEventKind(kind.to_string()))?;
        Ok(Self::for_signature(signature))
    }

    /// Dispatcher for a signature the caller already holds a registry entry for.
    pub fn for_signature(signature: &'static EventSignature) -> Self {
        Self { signature, listeners: Mutex::new(Vec::new()) }
    }

    pub fn signature(&self) -> &'static EventSignature { self.signature }

    /// Structural compatibility check: declared arity only, never value types.
    pub fn is_compatible(&self, listener: &dyn SignalListener) -> bool {
        listener.arity() == self.signature.arity()
    }

    /// Appends `listener` if not already present, keyed by pointer identity.
    /// Registering the same listener twice is a silent no-op.
    pub fn register(&self, listener: Arc<dyn SignalListener>) -> Result<(), SignalError> {
        if !self.is_compatible(listener.as_ref()) {
            return Err(SignalError::IncompatibleListener {
                kind: self.signature.name,
                expected: self.signature.arity(),
                found: listener.arity(),
            });
        }
        let mut listeners = self.listeners.lock().unwrap();
        if !listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            listeners.push(listener);
        }
        Ok(())
    }

    /// Removes `listener`, or clears the whole set when `None`.
    ///
    /// Unregistering a listener that isn't registered is a no-op that warns.
    pub fn unregister(&self, listener: Option<&Arc<dyn SignalListener>>) {
        let mut listeners = self.listeners.lock().unwrap();
        match listener {
            None => listeners.clear(),
            Some(listener) => match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
                Some(idx) => {
                    listeners.remove(idx);
                }
                None => {
                    warn!(kind = self.signature.name, "tried to unregister a listener that isn't registered")
                }
            },
        }
    }

    pub fn listener_count(&self) -> usize { self.listeners.lock().unwrap().len() }

    /// Invokes every registered listener with `args`, in registration order,
    /// synchronously on the calling thread.
    ///
    /// A failing listener aborts the remainder of this dispatch; listeners
    /// already invoked are not rolled back.
    pub fn dispatch(&self, args: &[SignalValue]) -> Result<(), SignalError> {
        // Copy the list before releasing the lock so mutations from other
        // threads (or from listeners themselves) can't touch this broadcast.
        let snapshot = self.listeners.lock().unwrap().clone();
        for listener in snapshot {
            listener.call(args).map_err(|source| SignalError::ListenerFailed {
                kind: self.signature.name,
                source,
            })?;
        }
        Ok(())
    }
}
