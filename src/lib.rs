//! Typed publish/subscribe event emitter with companion utilities:
//! debounce/throttle, JSON deep merge, typed key-value storage, sequential
//! task running, and currying.

mod curry;
mod emitter;
#[cfg(feature = "storage")]
mod storage;
mod tasks;
mod timing;
#[cfg(feature = "value")]
mod value;

pub use curry::{curry2, curry3};
pub use emitter::{EmitResult, Event, EventEmitter, SubscriptionId};
#[cfg(feature = "storage")]
pub use storage::{InMemoryValueStore, Storage, StorageError, ValueStore};
pub use tasks::{run_sequential, SequenceReport, TaskSequence};
pub use timing::{Debounce, Throttle};
#[cfg(feature = "value")]
pub use value::{deep_merge, merge_into, shallow_merge, ValueKind};
