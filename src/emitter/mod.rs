//! Typed publish/subscribe dispatch.
//!
//! An [`EventEmitter`] connects producers to consumers through a registry
//! of handler lists, one list per event kind:
//!
//! ```text
//!                        +---------------------------+
//!   emit(&event) ------> |  registry                 |
//!                        |    Kind::A -> [h1, h2]    | --> h1(&event)
//!                        |    Kind::B -> [h3]        | --> h2(&event)
//!                        +---------------------------+
//!                                  ^
//!                                  |  on / once -> SubscriptionId
//!                                  |  off(SubscriptionId)
//! ```
//!
//! Events are plain values implementing [`Event`], which names the enum of
//! kinds the emitter routes on. Registration hands back an opaque
//! [`SubscriptionId`]; removal goes through that id, never through closure
//! identity. Delivery is synchronous and ordered, and each emit runs
//! against the handler list as it stood when the emit began.
//!
//! ## Example
//!
//! ```
//! use emitter_rust::{Event, EventEmitter};
//!
//! #[derive(Debug)]
//! enum Signal {
//!     Tick,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum SignalKind {
//!     Tick,
//! }
//!
//! impl Event for Signal {
//!     type Kind = SignalKind;
//!     fn kind(&self) -> SignalKind {
//!         SignalKind::Tick
//!     }
//! }
//!
//! let bus = EventEmitter::new();
//! let sub = bus.once(SignalKind::Tick, |_: &Signal| println!("tick"));
//!
//! bus.emit(&Signal::Tick); // prints once
//! bus.emit(&Signal::Tick); // subscription already consumed
//! assert!(!bus.off(sub));
//! ```

mod emitter;
mod event;
mod subscription;

pub use emitter::{EmitResult, EventEmitter};
pub use event::Event;
pub use subscription::SubscriptionId;
