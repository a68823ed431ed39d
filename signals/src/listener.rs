use crate::{error::ListenerError, value::SignalValue};

/// A registered callable invoked on every dispatched event for one kind.
///
/// Arity is declared by the listener itself and checked once at registration
/// time; the dispatcher never inspects argument types.
pub trait SignalListener: Send + Sync {
    /// Number of parameters this listener expects.
    fn arity(&self) -> usize;

    /// Called with the dispatched arguments, on the dispatching thread.
    fn call(&self, args: &[SignalValue]) -> Result<(), ListenerError>;
}

/// Closure listener with a declared arity.
pub struct FnListener<F> {
    arity: usize,
    f: F,
}

impl<F> FnListener<F>
where F: Fn(&[SignalValue]) -> Result<(), ListenerError> + Send + Sync
{
    pub fn new(arity: usize, f: F) -> Self { Self { arity, f } }
}

impl<F> SignalListener for FnListener<F>
where F: Fn(&[SignalValue]) -> Result<(), ListenerError> + Send + Sync
{
    fn arity(&self) -> usize { self.arity }

    fn call(&self, args: &[SignalValue]) -> Result<(), ListenerError> { (self.f)(args) }
}

/// Forwards each dispatch into a standard channel.
///
/// Send errors are ignored: a dropped receiver just stops listening.
pub struct ChannelListener {
    arity: usize,
    tx: std::sync::mpsc::Sender<Vec<SignalValue>>,
}

impl ChannelListener {
    pub fn new(arity: usize, tx: std::sync::mpsc::Sender<Vec<SignalValue>>) -> Self {
        Self { arity, tx }
    }
}

impl SignalListener for ChannelListener {
    fn arity(&self) -> usize { self.arity }

    fn call(&self, args: &[SignalValue]) -> Result<(), ListenerError> {
        let _ = self.tx.send(args.to_vec());
        Ok(())
    }
}

/// Forwards each dispatch into a tokio unbounded channel.
#[cfg(feature = "tokio")]
pub struct UnboundedChannelListener {
    arity: usize,
    tx: tokio::sync::mpsc::UnboundedSender<Vec<SignalValue>>,
}

#[cfg(feature = "tokio")]
impl UnboundedChannelListener {
    pub fn new(arity: usize, tx: tokio::sync::mpsc::UnboundedSender<Vec<SignalValue>>) -> Self {
        Self { arity, tx }
    }
}

#[cfg(feature = "tokio")]
impl SignalListener for UnboundedChannelListener {
    fn arity(&self) -> usize { self.arity }

    fn call(&self, args: &[SignalValue]) -> Result<(), ListenerError> {
        let _ = self.tx.send(args.to_vec());
        Ok(())
    }
}
