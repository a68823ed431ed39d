use std::sync::{Arc, Mutex};

/// Returns a capture closure plus a check closure that drains and returns
/// everything recorded since the last check.
pub fn event_watcher<T: Send + 'static>() -> (impl Fn(T) + Send + Sync + Clone, impl Fn() -> Vec<T>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let captured2 = captured.clone();
    let watcher = move |value| captured.lock().unwrap().push(value);
    let check = move || captured2.lock().unwrap().drain(..).collect();
    (watcher, check)
}
