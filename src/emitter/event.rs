//! The typed event contract.

use std::fmt;
use std::hash::Hash;

/// Trait for event types that can be dispatched through an
/// [`EventEmitter`](super::EventEmitter).
///
/// An event type is usually an enum carrying event payloads, paired with
/// a fieldless `Kind` enum that names each variant. Registration is keyed
/// by `Kind`, so subscribing to an event that does not exist, or emitting
/// a payload under the wrong name, is a compile error rather than a
/// silent string mismatch.
///
/// ## Example
///
/// ```
/// use emitter_rust::Event;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum ChatEvent {
///     Joined { user: String },
///     Left { user: String },
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum ChatEventKind {
///     Joined,
///     Left,
/// }
///
/// impl Event for ChatEvent {
///     type Kind = ChatEventKind;
///
///     fn kind(&self) -> ChatEventKind {
///         match self {
///             ChatEvent::Joined { .. } => ChatEventKind::Joined,
///             ChatEvent::Left { .. } => ChatEventKind::Left,
///         }
///     }
/// }
///
/// assert_eq!(ChatEvent::Left { user: "alice".into() }.kind(), ChatEventKind::Left);
/// ```
pub trait Event: 'static {
    /// The enumeration of event kinds this type can carry.
    ///
    /// `Copy + Eq + Hash` makes kinds usable as registry keys; `Debug`
    /// lets dispatch failures name the kind in log output.
    type Kind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// The kind of this particular event value.
    fn kind(&self) -> Self::Kind;
}
