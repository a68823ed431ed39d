/*!
Real-time subscription routing for tickbridge.

Bridges a broker's push-event surface (events keyed by subject identifier) to
a dynamic set of in-process listeners, while reconciling the
subscribe/unsubscribe protocol the broker handles asynchronously: an
unsubscribe that races with in-flight events for its subject is deferred
until immediately after that subject's next dispatched event, and a fresh
registration cancels a stale pending removal for the same (screen, subject)
pair.

```rust
use std::sync::Arc;
use tickbridge_core::{BrokerControl, RealDataRouter, RegisterMode};
use tickbridge_signals::FnListener;

fn wire(broker: Arc<dyn BrokerControl>) -> anyhow::Result<()> {
    let router = RealDataRouter::new(broker);
    router.register(Arc::new(FnListener::new(3, |args| {
        println!("tick: {args:?}");
        Ok(())
    })))?;

    router.request_register(&"0001".into(), "005930;000660", "10;11", RegisterMode::Accumulate)?;
    // ... events arrive through router.dispatch(...) ...
    router.request_remove(&"0001".into(), &"005930".into())?; // deferred
    Ok(())
}
```
*/

mod broker;
mod codec;
mod error;
mod router;
mod types;

pub use broker::{BrokerControl, RegisterMode};
pub use codec::{DelimitedSubjects, SubjectCodec};
pub use error::{BrokerError, RouteError};
pub use router::{RealDataRouter, RealDataSink};
pub use types::{ScreenId, SubjectId, ALL};
