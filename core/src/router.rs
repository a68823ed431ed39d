use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use tickbridge_signals::{
    REAL_DATA_RECEIVED, SignalDispatcher, SignalError, SignalListener, SignalValue,
};

use crate::broker::{BrokerControl, RegisterMode};
use crate::codec::{DelimitedSubjects, SubjectCodec};
use crate::error::{BrokerError, RouteError};
use crate::types::{ScreenId, SubjectId};

/// Ingress seam for real-time push events: the transport layer depends on
/// this trait rather than on the concrete router.
pub trait RealDataSink: Send + Sync {
    fn on_real_data(&self, subject: &SubjectId, real_type: &str, data: &str)
        -> Result<(), RouteError>;
}

/// Subscription-aware dispatcher for the `real_data_received` event kind.
///
/// Owns a generic [`SignalDispatcher`] and layers subscription-lifecycle
/// reconciliation around it. The broker applies removal asynchronously and
/// may still have events for the subject in flight, so removal requests are
/// not forwarded immediately: they are parked per subject and applied right
/// after that subject's next dispatch. Listeners therefore always observe the
/// terminal event for a subject before its teardown, and a registration that
/// arrives while a removal is parked cancels the stale removal instead of
/// being torn down by it.
pub struct RealDataRouter {
    dispatcher: SignalDispatcher,
    broker: Arc<dyn BrokerControl>,
    codec: Box<dyn SubjectCodec>,
    /// Deferred subject -> screens removals, flushed after that subject's
    /// next dispatch. Guarded independently of the listener set's lock; no
    /// operation holds both locks at once.
    pending_removes: Mutex<HashMap<SubjectId, Vec<ScreenId>>>,
}

impl RealDataRouter {
    pub fn new(broker: Arc<dyn BrokerControl>) -> Self {
        Self {
            dispatcher: SignalDispatcher::for_signature(&REAL_DATA_RECEIVED),
            broker,
            codec: Box::new(DelimitedSubjects::default()),
            pending_removes: Mutex::new(HashMap::new()),
        }
    }

    /// Replaces the subject-list decoder (the delimiter is a wire-format
    /// detail of the collaborator, not a choice of this layer).
    pub fn with_codec(mut self, codec: impl SubjectCodec + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    /// The underlying generic dispatcher.
    pub fn dispatcher(&self) -> &SignalDispatcher { &self.dispatcher }

    pub fn register(&self, listener: Arc<dyn SignalListener>) -> Result<(), SignalError> {
        self.dispatcher.register(listener)
    }

    pub fn unregister(&self, listener: Option<&Arc<dyn SignalListener>>) {
        self.dispatcher.unregister(listener)
    }

    /// Forwards a registration to the broker, first cancelling any pending
    /// removal it supersedes.
    ///
    /// `subjects` stays in wire encoding; it is decoded only for the
    /// supersession scan. An emptied pending list is left in place; the
    /// subject's next dispatch cleans it up.
    pub fn request_register(
        &self,
        screen: &ScreenId,
        subjects: &str,
        fields: &str,
        mode: RegisterMode,
    ) -> Result<(), BrokerError> {
        {
            let mut pending = self.pending_removes.lock().unwrap();
            if !pending.is_empty() {
                for subject in self.codec.decode(subjects) {
                    if let Some(screens) = pending.get_mut(&subject) {
                        if let Some(idx) = screens.iter().position(|s| s == screen) {
                            screens.remove(idx);
                            debug!(%screen, %subject, "fresh registration supersedes pending removal");
                        }
                    }
                }
            }
        }
        self.broker.register_subscription(screen, subjects, fields, mode)
    }

    /// Requests removal of `subject`'s subscription under `screen`.
    ///
    /// Bulk removals (either side "ALL") go straight to the broker, since
    /// there is no per-subject event to wait for. Everything else is parked
    /// until the subject's next dispatch.
    pub fn request_remove(&self, screen: &ScreenId, subject: &SubjectId) -> Result<(), BrokerError> {
        if screen.is_all() || subject.is_all() {
            return self.broker.remove_subscription(screen, subject);
        }
        let mut pending = self.pending_removes.lock().unwrap();
        pending.entry(subject.clone()).or_default().push(screen.clone());
        debug!(%screen, %subject, "deferring subscription removal until next dispatch");
        Ok(())
    }

    /// Sole ingress for push events: broadcasts to all listeners, then
    /// applies whatever removals are still pending for `subject`.
    ///
    /// The broadcast runs first so every listener observes every event a
    /// removal was requested for, exactly once, before teardown. A listener
    /// failure propagates and leaves the subject's pending removals parked
    /// for its next event. A broker failure mid-flush also propagates; the
    /// subject's entry was already taken, because the collaborator gives no
    /// idempotence guarantee and an already-removed screen must not be queued
    /// for a second call.
    pub fn dispatch(&self, subject: &SubjectId, real_type: &str, data: &str) -> Result<(), RouteError> {
        let args: [SignalValue; 3] = [
            subject.as_str().into(),
            real_type.into(),
            data.into(),
        ];
        self.dispatcher.dispatch(&args)?;

        let mut pending = self.pending_removes.lock().unwrap();
        if let Some(screens) = pending.remove(subject) {
            for screen in &screens {
                debug!(%screen, %subject, "applying deferred subscription removal");
                self.broker.remove_subscription(screen, subject)?;
            }
        }
        Ok(())
    }
}

impl RealDataSink for RealDataRouter {
    fn on_real_data(&self, subject: &SubjectId, real_type: &str, data: &str)
        -> Result<(), RouteError> {
        self.dispatch(subject, real_type, data)
    }
}
