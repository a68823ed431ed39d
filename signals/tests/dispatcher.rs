use std::sync::Arc;

use tickbridge_signals::{ChannelListener, FnListener, SignalDispatcher, SignalError, SignalListener};

mod common;
use common::event_watcher;

fn real_data_args() -> Vec<tickbridge_signals::SignalValue> {
    vec!["005930".into(), "quote".into(), "71000".into()]
}

#[test]
fn unknown_event_kind_fails_construction() {
    let err = SignalDispatcher::new("not_an_event").unwrap_err();
    assert!(matches!(err, SignalError::UnknownEventKind(name) if name == "not_an_event"));
}

#[test]
fn every_registry_kind_can_host_a_dispatcher() {
    for signature in tickbridge_signals::SIGNATURES {
        let dispatcher = SignalDispatcher::new(signature.name).unwrap();
        assert_eq!(dispatcher.signature().arity(), signature.arity());
    }
}

#[test]
fn listeners_run_in_registration_order() {
    let dispatcher = SignalDispatcher::new("real_data_received").unwrap();
    let (watcher, check) = event_watcher();

    for tag in ["first", "second", "third"] {
        let watcher = watcher.clone();
        dispatcher.register(Arc::new(FnListener::new(3, move |_| {
            watcher(tag);
            Ok(())
        }))).unwrap();
    }

    dispatcher.dispatch(&real_data_args()).unwrap();
    assert_eq!(check(), ["first", "second", "third"]);

    // order survives later dispatches too
    dispatcher.dispatch(&real_data_args()).unwrap();
    assert_eq!(check(), ["first", "second", "third"]);
}

#[test]
fn unregister_removes_only_the_given_listener() {
    let dispatcher = SignalDispatcher::new("real_data_received").unwrap();
    let (watcher, check) = event_watcher();

    let mut listeners: Vec<Arc<dyn SignalListener>> = Vec::new();
    for tag in ["a", "b", "c"] {
        let watcher = watcher.clone();
        let listener: Arc<dyn SignalListener> = Arc::new(FnListener::new(3, move |_| {
            watcher(tag);
            Ok(())
        }));
        dispatcher.register(listener.clone()).unwrap();
        listeners.push(listener);
    }

    dispatcher.unregister(Some(&listeners[1]));
    dispatcher.dispatch(&real_data_args()).unwrap();
    assert_eq!(check(), ["a", "c"]);
}

#[test]
fn unregister_absent_listener_is_a_noop() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dispatcher = SignalDispatcher::new("real_data_received").unwrap();
    dispatcher.register(Arc::new(FnListener::new(3, |_| Ok(())))).unwrap();

    let never_registered: Arc<dyn SignalListener> = Arc::new(FnListener::new(3, |_| Ok(())));
    dispatcher.unregister(Some(&never_registered));
    assert_eq!(dispatcher.listener_count(), 1);
}

#[test]
fn unregister_none_clears_the_set() {
    let dispatcher = SignalDispatcher::new("real_data_received").unwrap();
    for _ in 0..3 {
        dispatcher.register(Arc::new(FnListener::new(3, |_| Ok(())))).unwrap();
    }
    assert_eq!(dispatcher.listener_count(), 3);

    dispatcher.unregister(None);
    assert_eq!(dispatcher.listener_count(), 0);
}

#[test]
fn failing_listener_aborts_the_rest_of_the_dispatch() {
    let dispatcher = SignalDispatcher::new("real_data_received").unwrap();
    let (watcher, check) = event_watcher();

    let w = watcher.clone();
    dispatcher.register(Arc::new(FnListener::new(3, move |_| {
        w("ok");
        Ok(())
    }))).unwrap();
    dispatcher.register(Arc::new(FnListener::new(3, |_| Err("boom".into())))).unwrap();
    let w = watcher.clone();
    dispatcher.register(Arc::new(FnListener::new(3, move |_| {
        w("skipped");
        Ok(())
    }))).unwrap();

    let err = dispatcher.dispatch(&real_data_args()).unwrap_err();
    assert!(matches!(err, SignalError::ListenerFailed { kind: "real_data_received", .. }));
    // the first listener ran and is not rolled back; the third never ran
    assert_eq!(check(), ["ok"]);
}

#[test]
fn channel_listener_forwards_arguments() {
    let dispatcher = SignalDispatcher::new("real_data_received").unwrap();
    let (tx, rx) = std::sync::mpsc::channel();
    dispatcher.register(Arc::new(ChannelListener::new(3, tx))).unwrap();

    dispatcher.dispatch(&real_data_args()).unwrap();
    assert_eq!(rx.try_recv().unwrap(), real_data_args());
    assert!(rx.try_recv().is_err());
}

#[cfg(feature = "tokio")]
#[test]
fn tokio_channel_listener_forwards_arguments() {
    use tickbridge_signals::UnboundedChannelListener;

    let dispatcher = SignalDispatcher::new("real_data_received").unwrap();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    dispatcher.register(Arc::new(UnboundedChannelListener::new(3, tx))).unwrap();

    dispatcher.dispatch(&real_data_args()).unwrap();
    assert_eq!(rx.try_recv().unwrap(), real_data_args());
    assert!(rx.try_recv().is_err());
}

#[test]
fn concurrent_registration_never_corrupts_a_broadcast() {
    let dispatcher = Arc::new(SignalDispatcher::new("real_data_received").unwrap());
    let (watcher, check) = event_watcher();

    let w = watcher.clone();
    dispatcher.register(Arc::new(FnListener::new(3, move |_| {
        w(());
        Ok(())
    }))).unwrap();

    let registrar = {
        let dispatcher = dispatcher.clone();
        std::thread::spawn(move || {
            for _ in 0..100 {
                dispatcher.register(Arc::new(FnListener::new(3, |_| Ok(())))).unwrap();
            }
        })
    };
    for _ in 0..100 {
        dispatcher.dispatch(&real_data_args()).unwrap();
    }
    registrar.join().unwrap();

    // the original listener saw every dispatch exactly once
    assert_eq!(check().len(), 100);
    assert_eq!(dispatcher.listener_count(), 101);
}
