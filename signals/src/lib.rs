/*!
Thread-safe signal dispatch for broker push events.

Each [`SignalDispatcher`] broadcasts one named event kind to an ordered set of
listeners. Listener compatibility is structural: a listener declares how many
parameters it expects, and registration is rejected when that count differs
from the event kind's signature in the schema registry. Value types are never
checked.

# Basic usage

```rust
use std::sync::Arc;
use tickbridge_signals::{FnListener, SignalDispatcher};

let dispatcher = SignalDispatcher::new("real_data_received").unwrap();
dispatcher
    .register(Arc::new(FnListener::new(3, |args| {
        println!("event: {args:?}");
        Ok(())
    })))
    .unwrap();

dispatcher.dispatch(&["005930".into(), "quote".into(), "71000".into()]).unwrap();
```
*/

mod dispatcher;
mod error;
mod listener;
mod schema;
mod value;

pub use dispatcher::*;
pub use error::*;
pub use listener::*;
pub use schema::*;
pub use value::*;
